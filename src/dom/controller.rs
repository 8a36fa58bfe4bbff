//! Page controller: dropdowns, notification loading and mark-read.
//!
//! DESIGN
//! ======
//! One `PageController` lives in a thread-local slot for the lifetime of the
//! page. It owns the listener closures it installs; dropping it removes them.
//! Event handlers and async completions reach it through `with_controller`,
//! and no borrow is held across an `.await`.
//!
//! Mark-read requests run as observed tasks so their outcome is logged and
//! queryable through `mark_read_status`.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget, PageTransitionEvent};

use super::{MARK_READ_SELECTOR, OPEN_CLASS, clear_unread, csrf_token, has_class, is_inside, remove_badge};
use crate::config::ControllerConfig;
use crate::net::api::{self, ApiError};
use crate::net::task::{TaskHandle, TaskStatus, observed};
use crate::net::types::Notification;
use crate::state::dropdown::{ClickHit, Dropdown, DropdownState, ToggleEffect};
use crate::state::load::{LoadGate, LoadOutcome, LoadTicket, MarkReadScope};

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

/// An installed event listener, removed again on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn install(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Self {
        let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
        let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub struct PageController {
    config: ControllerConfig,
    document: Document,
    notif: Option<Element>,
    user: Option<Element>,
    dropdowns: DropdownState,
    loads: LoadGate,
    mark_read: Option<TaskHandle<Result<(), ApiError>>>,
    // Held for their `Drop`, which unregisters them.
    _listeners: Vec<Listener>,
}

impl PageController {
    fn attach(document: Document, config: ControllerConfig) -> Self {
        let notif = document.get_element_by_id(&config.notif_dropdown_id);
        let user = document.get_element_by_id(&config.user_dropdown_id);
        let dropdowns = DropdownState::from_flags(
            notif.as_ref().is_some_and(|el| has_class(el, OPEN_CLASS)),
            user.as_ref().is_some_and(|el| has_class(el, OPEN_CLASS)),
        );

        let mut listeners = vec![Listener::install(&document, "click", |event| {
            with_controller(|c| c.dismiss_outside(&event));
        })];
        if let Some(panel) = &notif {
            listeners.push(Listener::install(panel, "click", |event| {
                if is_inside(event.target().as_ref(), MARK_READ_SELECTOR) {
                    mark_notifications_read(&event);
                }
            }));
        }
        if let Some(window) = web_sys::window() {
            listeners.push(Listener::install(&window, "pagehide", |event| {
                let persisted = event
                    .dyn_ref::<PageTransitionEvent>()
                    .is_some_and(PageTransitionEvent::persisted);
                if !persisted {
                    detach();
                }
            }));
        }

        log::debug!(
            "page controller attached (notifications: {}, user menu: {})",
            notif.is_some(),
            user.is_some()
        );
        let controller = Self {
            config,
            document,
            notif,
            user,
            dropdowns,
            loads: LoadGate::default(),
            mark_read: None,
            _listeners: listeners,
        };
        controller.sync();
        controller
    }

    fn element(&self, dropdown: Dropdown) -> Option<&Element> {
        match dropdown {
            Dropdown::Notifications => self.notif.as_ref(),
            Dropdown::UserMenu => self.user.as_ref(),
        }
    }

    /// Mirror `dropdowns` into the `open` class.
    fn sync(&self) {
        for dropdown in Dropdown::ALL {
            if let Some(el) = self.element(dropdown) {
                super::set_class(el, OPEN_CLASS, self.dropdowns.is_open(dropdown));
            }
        }
    }

    fn toggle(&mut self, dropdown: Dropdown) -> ToggleEffect {
        let effect = self.dropdowns.request_toggle(dropdown, self.element(dropdown).is_some());
        if effect == ToggleEffect::Missing {
            log::debug!("{dropdown:?} dropdown not on page");
        }
        self.sync();
        effect
    }

    fn dismiss_outside(&mut self, event: &Event) {
        let target = event.target();
        let hit = ClickHit {
            in_notif_wrap: is_inside(target.as_ref(), Dropdown::Notifications.wrap_selector()),
            in_user_wrap: is_inside(target.as_ref(), Dropdown::UserMenu.wrap_selector()),
        };
        if self.dropdowns.dismiss_outside(hit) {
            self.sync();
        }
    }

    fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Notification>, ApiError>) {
        let Some(panel) = self.notif.clone() else {
            return;
        };
        match self.loads.settle(ticket, result) {
            LoadOutcome::Stale => log::debug!("dropping stale notification load"),
            LoadOutcome::Loaded { html, mark_read } => {
                panel.set_inner_html(&html);
                if let Some(scope) = mark_read {
                    self.spawn_mark_read(scope);
                }
            }
            LoadOutcome::Failed { html, error } => {
                log::warn!("failed to load notifications: {error}");
                panel.set_inner_html(&html);
            }
        }
    }

    fn spawn_mark_read(&mut self, scope: MarkReadScope) {
        let endpoint = self.config.mark_read_endpoint.clone();
        let csrf = csrf_token(&self.document);
        let document = self.document.clone();
        let (driver, handle) = observed(async move {
            let result = api::mark_notifications_read(&endpoint, &csrf).await;
            if let Err(err) = &result {
                log::warn!("failed to mark notifications read: {err}");
            }
            let cleanup = scope.cleanup(&result);
            if cleanup.remove_badge {
                remove_badge(&document);
            }
            if cleanup.clear_unread {
                clear_unread(&document);
            }
            result
        });
        self.mark_read = Some(handle);
        spawn_local(driver);
    }

    fn mark_read_status(&mut self) -> &'static str {
        match self.mark_read.as_mut().map(TaskHandle::status) {
            None => "idle",
            Some(TaskStatus::Pending) => "pending",
            Some(TaskStatus::Finished(Ok(()))) => "ok",
            Some(TaskStatus::Finished(Err(_)) | TaskStatus::Dropped) => "failed",
        }
    }
}

/// Run `f` against the installed controller. `None` before install, after
/// unload, or if the controller is already borrowed.
fn with_controller<R>(f: impl FnOnce(&mut PageController) -> R) -> Option<R> {
    CONTROLLER.with(|slot| {
        let Ok(mut guard) = slot.try_borrow_mut() else {
            log::warn!("page controller busy, event skipped");
            return None;
        };
        guard.as_mut().map(f)
    })
}

/// Install the controller for `document`, replacing any earlier one.
pub fn install(document: Document, config: ControllerConfig) {
    let controller = PageController::attach(document, config);
    let previous = CONTROLLER.with(|slot| slot.borrow_mut().replace(controller));
    drop(previous);
}

/// Remove the controller. The drop is deferred because the caller may be
/// one of its own listeners.
fn detach() {
    let taken = CONTROLLER.with(|slot| slot.try_borrow_mut().ok().and_then(|mut s| s.take()));
    if let Some(controller) = taken {
        log::debug!("page controller detached");
        spawn_local(async move { drop(controller) });
    }
}

pub fn toggle_notifications() {
    let effect = with_controller(|c| c.toggle(Dropdown::Notifications));
    if effect.is_some_and(|e| e.loads_notifications(Dropdown::Notifications)) {
        load_notifications();
    }
}

pub fn toggle_user_menu() {
    with_controller(|c| c.toggle(Dropdown::UserMenu));
}

/// Fetch the list and render it into the notification dropdown.
pub fn load_notifications() {
    let Some((ticket, endpoint, csrf)) = with_controller(|c| {
        c.notif.as_ref()?;
        Some((c.loads.begin(), c.config.notifications_endpoint.clone(), csrf_token(&c.document)))
    })
    .flatten() else {
        return;
    };
    spawn_local(async move {
        let result = api::fetch_notifications(&endpoint, &csrf).await;
        with_controller(|c| c.finish_load(ticket, result));
    });
}

/// Explicit "mark read" action. Stops the click so the document handler
/// does not see it.
pub fn mark_notifications_read(event: &Event) {
    event.stop_propagation();
    with_controller(|c| c.spawn_mark_read(MarkReadScope::BadgeAndItems));
}

pub fn mark_read_status() -> &'static str {
    with_controller(PageController::mark_read_status).unwrap_or("idle")
}
