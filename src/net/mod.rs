//! Network layer: notification DTOs, REST helpers and task observation.

pub mod api;
pub mod task;
pub mod types;
