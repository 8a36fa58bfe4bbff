//! Browser-independent controller state.
//!
//! DESIGN
//! ======
//! State is split by concern (`dropdown`, `load`, `form`) so the DOM layer
//! stays a thin mirror and every transition can be tested natively.

pub mod dropdown;
pub mod form;
pub mod load;
