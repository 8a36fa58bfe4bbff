//! Role card and stepper handlers bound to real elements.

use web_sys::Element;

use super::{ACTIVE_CLASS, CHECKBOX_SELECTOR, ROLE_COUNT_SELECTOR, as_input, query_in, set_class};
use crate::state::form;

/// Flip the card's checkbox and keep `active` and the count in step with it.
pub fn toggle_role(card: &Element) {
    let Some(checkbox) = query_in(card, CHECKBOX_SELECTOR).and_then(as_input) else {
        log::debug!("role card without checkbox");
        return;
    };
    let count_input = query_in(card, ROLE_COUNT_SELECTOR).and_then(as_input);
    let count_value = count_input.as_ref().map(web_sys::HtmlInputElement::value);
    let toggled = form::toggle_role(checkbox.checked(), count_value.as_deref());

    checkbox.set_checked(toggled.checked);
    set_class(card, ACTIVE_CLASS, toggled.active);
    if let (Some(input), Some(value)) = (count_input, toggled.count) {
        input.set_value(value);
    }
}

/// Step the count input next to `button` by `delta`, never below one.
pub fn step_count(button: &Element, delta: i64) {
    let Some(input) = button
        .parent_element()
        .and_then(|parent| query_in(&parent, ROLE_COUNT_SELECTOR))
        .and_then(as_input)
    else {
        return;
    };
    if let Some(next) = form::step_value(&input.value(), delta) {
        input.set_value(&next.to_string());
    }
}
