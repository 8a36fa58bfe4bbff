use super::*;

// =============================================================
// parse_leading_int
// =============================================================

#[test]
fn parses_plain_and_signed_integers() {
    assert_eq!(parse_leading_int("3"), Some(3));
    assert_eq!(parse_leading_int("+4"), Some(4));
    assert_eq!(parse_leading_int("-2"), Some(-2));
}

#[test]
fn ignores_leading_whitespace_and_trailing_garbage() {
    assert_eq!(parse_leading_int("  12px"), Some(12));
    assert_eq!(parse_leading_int("5.9"), Some(5));
}

#[test]
fn rejects_inputs_without_digits() {
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int("x1"), None);
}

#[test]
fn overlong_input_saturates() {
    assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
}

// =============================================================
// step_value
// =============================================================

#[test]
fn decrement_from_three_yields_two() {
    assert_eq!(step_value("3", -1), Some(2));
}

#[test]
fn decrement_from_one_is_refused() {
    assert_eq!(step_value("1", -1), None);
}

#[test]
fn unparseable_value_steps_from_one() {
    assert_eq!(step_value("abc", 1), Some(2));
    assert_eq!(step_value("", 1), Some(2));
}

#[test]
fn zero_reads_as_one() {
    assert_eq!(current_count("0"), 1);
    assert_eq!(step_value("0", 1), Some(2));
}

#[test]
fn negative_value_below_minimum_is_left_alone() {
    assert_eq!(step_value("-5", 1), None);
}

#[test]
fn no_upper_bound() {
    assert_eq!(step_value("999", 1), Some(1000));
    assert_eq!(step_value(&i64::MAX.to_string(), 1), Some(i64::MAX));
}

// =============================================================
// role_count_fill
// =============================================================

#[test]
fn checking_fills_empty_or_zero_count() {
    assert_eq!(role_count_fill(true, ""), Some("1"));
    assert_eq!(role_count_fill(true, "0"), Some("1"));
}

#[test]
fn checking_keeps_existing_count() {
    assert_eq!(role_count_fill(true, "3"), None);
}

#[test]
fn unchecking_never_changes_count() {
    assert_eq!(role_count_fill(false, ""), None);
    assert_eq!(role_count_fill(false, "2"), None);
}

// =============================================================
// toggle_role
// =============================================================

#[test]
fn toggling_unchecked_card_with_empty_count_activates_and_fills() {
    let first = toggle_role(false, Some(""));
    assert_eq!(
        first,
        RoleToggle {
            checked: true,
            active: true,
            count: Some("1"),
        }
    );
}

#[test]
fn toggling_again_deactivates_and_leaves_count() {
    let first = toggle_role(false, Some(""));
    let second = toggle_role(first.checked, first.count);
    assert_eq!(
        second,
        RoleToggle {
            checked: false,
            active: false,
            count: None,
        }
    );
}

#[test]
fn card_without_count_input_only_flips_state() {
    let toggled = toggle_role(false, None);
    assert!(toggled.checked);
    assert!(toggled.active);
    assert_eq!(toggled.count, None);
}
