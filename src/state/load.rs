//! Sequencing for notification loads and what a finished load does.
//!
//! Reopening the dropdown quickly can leave an older fetch in flight. Each
//! load takes a ticket; only the newest ticket may write the panel.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use crate::net::api::ApiError;
use crate::net::types::Notification;
use crate::render;

/// Identifies one notification fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct LoadGate {
    latest: u64,
}

impl LoadGate {
    /// Start a new load, superseding any earlier ticket.
    pub fn begin(&mut self) -> LoadTicket {
        self.latest = self.latest.wrapping_add(1);
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Decide what a finished fetch does to the panel.
    pub fn settle(&self, ticket: LoadTicket, result: Result<Vec<Notification>, ApiError>) -> LoadOutcome {
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(list) => {
                let panel = render::notification_panel(&list);
                LoadOutcome::Loaded {
                    html: panel.html,
                    mark_read: panel.has_entries.then_some(MarkReadScope::Badge),
                }
            }
            Err(error) => LoadOutcome::Failed {
                html: render::error_panel(),
                error,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A newer load was started; leave the panel alone.
    Stale,
    Loaded {
        html: String,
        mark_read: Option<MarkReadScope>,
    },
    Failed {
        html: String,
        error: ApiError,
    },
}

/// What a mark-read request should clean up once it succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkReadScope {
    /// Side effect of opening the dropdown: only the badge goes.
    Badge,
    /// Explicit button press: badge and unread markers go.
    BadgeAndItems,
}

/// DOM cleanup after a mark-read request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cleanup {
    pub remove_badge: bool,
    pub clear_unread: bool,
}

impl MarkReadScope {
    /// Failed requests change nothing.
    pub fn cleanup(self, result: &Result<(), ApiError>) -> Cleanup {
        if result.is_err() {
            return Cleanup::default();
        }
        Cleanup {
            remove_badge: true,
            clear_unread: self == Self::BadgeAndItems,
        }
    }
}
