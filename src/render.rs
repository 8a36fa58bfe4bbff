//! Markup for the notification dropdown.
//!
//! Built with `maud` and assigned to the panel's `innerHTML`. Payload values
//! are spliced as text, so `maud` escapes them; only the fixed wording below
//! is trusted.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use maud::{Markup, html};

use crate::net::types::{Notification, NotificationKind, ProjectRef};

pub const ITEM_CLASS: &str = "notif-item";
pub const UNREAD_CLASS: &str = "unread";
pub const EMPTY_CLASS: &str = "notif-empty";
pub const MARK_READ_CLASS: &str = "notif-mark-read";

pub const EMPTY_TEXT: &str = "Нет уведомлений";
pub const ERROR_TEXT: &str = "Ошибка загрузки";
pub const MARK_READ_TEXT: &str = "Отметить прочитанными";
const FALLBACK_RESPONDER: &str = "Кто-то";
const FALLBACK_PROJECT: &str = "проект";

/// What the loader should put into the dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub html: String,
    /// Entries were rendered, so the list should be marked read.
    pub has_entries: bool,
}

/// Render a fetched list; an empty list yields the empty placeholder.
pub fn notification_panel(list: &[Notification]) -> Panel {
    if list.is_empty() {
        return Panel {
            html: placeholder(EMPTY_TEXT).into_string(),
            has_entries: false,
        };
    }
    let markup = html! {
        @for n in list {
            (notification_item(n))
        }
        button class=(MARK_READ_CLASS) { (MARK_READ_TEXT) }
    };
    Panel {
        html: markup.into_string(),
        has_entries: true,
    }
}

/// Placeholder shown when the fetch fails.
pub fn error_panel() -> String {
    placeholder(ERROR_TEXT).into_string()
}

fn placeholder(text: &str) -> Markup {
    html! {
        div class=(EMPTY_CLASS) { (text) }
    }
}

/// One `<a class="notif-item">` entry.
pub fn notification_item(n: &Notification) -> Markup {
    let class = if n.read {
        ITEM_CLASS.to_owned()
    } else {
        format!("{ITEM_CLASS} {UNREAD_CLASS}")
    };
    match &n.kind {
        NotificationKind::NewResponse { responder, project } => html! {
            a href=(project_link(project)) class=(class) {
                "Новый отклик от "
                strong { (responder.as_deref().unwrap_or(FALLBACK_RESPONDER)) }
                " на «" (project_title(project)) "»"
            }
        },
        NotificationKind::ResponseAccepted { project } => html! {
            a href=(project_link(project)) class=(class) {
                "Ваш отклик на «" (project_title(project)) "» принят"
            }
        },
        NotificationKind::Unknown(_) => html! {
            a href="/" class=(class) {}
        },
    }
}

fn project_title(project: &ProjectRef) -> &str {
    project.title.as_deref().unwrap_or(FALLBACK_PROJECT)
}

/// `/project/{id}`; a missing id leaves the segment empty.
pub fn project_link(project: &ProjectRef) -> String {
    format!("/project/{}", project.id.as_deref().unwrap_or_default())
}
