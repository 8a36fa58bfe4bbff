//! Role card and count stepper rules.
//!
//! The count input is free text in the DOM; parsing follows the browser's
//! `parseInt(value, 10) || 1` so server-rendered values behave as before.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Smallest count the stepper will write.
pub const MIN_COUNT: i64 = 1;

/// Value written into an empty count when a role card gets checked.
pub const INITIAL_COUNT: &str = "1";

/// Leading base-10 integer of `raw`, skipping leading whitespace.
/// `None` when no digits follow the optional sign.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    // Overlong inputs saturate instead of failing.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Current stepper value: unparseable or zero counts read as `MIN_COUNT`.
pub fn current_count(raw: &str) -> i64 {
    match parse_leading_int(raw) {
        Some(0) | None => MIN_COUNT,
        Some(v) => v,
    }
}

/// Value to write after stepping by `delta`, or `None` to leave the input
/// untouched.
pub fn step_value(raw: &str, delta: i64) -> Option<i64> {
    let next = current_count(raw).saturating_add(delta);
    (next >= MIN_COUNT).then_some(next)
}

/// Count to write after a role card toggles to `checked`.
pub fn role_count_fill(checked: bool, raw: &str) -> Option<&'static str> {
    (checked && (raw.is_empty() || raw == "0")).then_some(INITIAL_COUNT)
}

/// Everything a role card click changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleToggle {
    pub checked: bool,
    /// Whether the card carries the `active` class.
    pub active: bool,
    /// New count input value, if it must change.
    pub count: Option<&'static str>,
}

/// Flip a role card that was `was_checked`. `count` is the current value of
/// its count input, `None` when the card has none.
pub fn toggle_role(was_checked: bool, count: Option<&str>) -> RoleToggle {
    let checked = !was_checked;
    RoleToggle {
        checked,
        active: checked,
        count: count.and_then(|raw| role_count_fill(checked, raw)),
    }
}
