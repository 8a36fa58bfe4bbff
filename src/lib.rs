//! # svyaz-ui
//!
//! WASM page controller for the server-rendered project board. Attaches to
//! existing markup: the header dropdowns (notifications, user menu), the
//! notification list and mark-read action, and the role card / count stepper
//! form controls.
//!
//! Browser code is behind the `hydrate` feature. Without it the crate builds
//! natively and exposes the pure pieces (state, decoding, rendering, form
//! rules) for tests.
//!
//! On start the page functions are registered on `window` so inline handlers
//! such as `onclick="toggleRole(this)"` reach them.

pub mod config;
pub mod globals;
pub mod net;
pub mod render;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
mod entry {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Event, Window};

    use crate::config::ControllerConfig;
    use crate::dom::{self, controller, forms};
    use crate::globals::PageFunction;

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        let Some(document) = dom::document() else {
            return;
        };
        if document.ready_state() == "loading" {
            let target = document.clone();
            let on_ready = Closure::once_into_js(move || boot(target));
            let _ = document
                .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref::<js_sys::Function>());
        } else {
            boot(document);
        }
    }

    fn boot(document: Document) {
        let (config, config_error) = match dom::config_text(&document).map(|text| ControllerConfig::from_json(&text)) {
            None => (ControllerConfig::default(), None),
            Some(Ok(config)) => (config, None),
            Some(Err(err)) => (ControllerConfig::default(), Some(err)),
        };
        // A second init (module re-evaluated) keeps the first logger.
        let _ = console_log::init_with_level(config.level());
        if let Some(err) = config_error {
            log::warn!("ignoring invalid page config: {err}");
        }
        if let Some(window) = web_sys::window() {
            register_globals(&window);
        }
        controller::install(document, config);
    }

    fn handler(function: PageFunction) -> JsValue {
        match function {
            PageFunction::ToggleNotifications => {
                Closure::<dyn FnMut()>::new(controller::toggle_notifications).into_js_value()
            }
            PageFunction::ToggleUserMenu => Closure::<dyn FnMut()>::new(controller::toggle_user_menu).into_js_value(),
            PageFunction::LoadNotifications => {
                Closure::<dyn FnMut()>::new(controller::load_notifications).into_js_value()
            }
            PageFunction::MarkNotificationsRead => {
                Closure::<dyn FnMut(Event)>::new(|event: Event| controller::mark_notifications_read(&event))
                    .into_js_value()
            }
            // "idle", "pending", "ok" or "failed" for the latest mark-read.
            PageFunction::MarkReadStatus => {
                Closure::<dyn FnMut() -> String>::new(|| controller::mark_read_status().to_owned()).into_js_value()
            }
            PageFunction::ToggleRole => {
                Closure::<dyn FnMut(Element)>::new(|card: Element| forms::toggle_role(&card)).into_js_value()
            }
            PageFunction::StepCount => Closure::<dyn FnMut(Element, i32)>::new(|button: Element, delta: i32| {
                forms::step_count(&button, i64::from(delta));
            })
            .into_js_value(),
        }
    }

    /// Closures handed to `into_js_value` live as long as the page.
    fn register_globals(window: &Window) {
        for function in PageFunction::ALL {
            let name = function.js_name();
            if let Err(err) = js_sys::Reflect::set(window, &JsValue::from_str(name), &handler(function)) {
                log::warn!("could not register {name} on window: {err:?}");
            }
        }
    }
}
