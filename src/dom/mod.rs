//! Browser DOM access for the page controller.
//!
//! Lookups return `Option` and callers no-op when an element is missing:
//! not every server-rendered page carries the header dropdowns or the role
//! form, and a missing element is never worth an exception.

pub mod controller;
pub mod forms;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlInputElement, HtmlMetaElement};

use crate::config::CONFIG_SCRIPT_ID;
use crate::render::{ITEM_CLASS, UNREAD_CLASS};

pub const OPEN_CLASS: &str = "open";
pub const ACTIVE_CLASS: &str = "active";
pub const BADGE_SELECTOR: &str = ".notif-badge";
pub const MARK_READ_SELECTOR: &str = ".notif-mark-read";
pub const CSRF_META_SELECTOR: &str = r#"meta[name="csrf-token"]"#;
pub const ROLE_COUNT_SELECTOR: &str = ".role-count-input";
pub const CHECKBOX_SELECTOR: &str = r#"input[type="checkbox"]"#;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// First match of `selector` under `root`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn as_input(el: Element) -> Option<HtmlInputElement> {
    el.dyn_into::<HtmlInputElement>().ok()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Whether `target` is an element inside (or equal to) a match of `selector`.
/// Non-element targets count as outside.
pub fn is_inside(target: Option<&EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_ref::<Element>())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// `content` of `<meta name="csrf-token">`, empty when the tag is absent.
pub fn csrf_token(document: &Document) -> String {
    document
        .query_selector(CSRF_META_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlMetaElement>().ok())
        .map(|meta| meta.content())
        .unwrap_or_default()
}

pub fn remove_badge(document: &Document) {
    if let Ok(Some(badge)) = document.query_selector(BADGE_SELECTOR) {
        badge.remove();
    }
}

/// Strip the unread marker from every rendered notification entry.
pub fn clear_unread(document: &Document) {
    let selector = format!(".{ITEM_CLASS}.{UNREAD_CLASS}");
    let Ok(items) = document.query_selector_all(&selector) else {
        return;
    };
    for i in 0..items.length() {
        if let Some(el) = items.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            let _ = el.class_list().remove_1(UNREAD_CLASS);
        }
    }
}

/// Text of the optional JSON config block.
pub fn config_text(document: &Document) -> Option<String> {
    document.get_element_by_id(CONFIG_SCRIPT_ID)?.text_content()
}
