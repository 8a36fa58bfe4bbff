//! Header dropdown state.
//!
//! DESIGN
//! ======
//! The two dropdowns share one `Option<Dropdown>` slot, so "at most one open"
//! holds by construction. The DOM layer mirrors this state into the `open`
//! class and never toggles the class directly.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

/// The header dropdowns managed by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dropdown {
    Notifications,
    UserMenu,
}

impl Dropdown {
    pub const ALL: [Dropdown; 2] = [Dropdown::Notifications, Dropdown::UserMenu];

    pub fn other(self) -> Self {
        match self {
            Self::Notifications => Self::UserMenu,
            Self::UserMenu => Self::Notifications,
        }
    }

    /// Selector of the wrapper that contains the toggle button and the panel.
    /// Clicks inside it never dismiss this dropdown.
    pub fn wrap_selector(self) -> &'static str {
        match self {
            Self::Notifications => ".notif-wrap",
            Self::UserMenu => ".user-menu-wrap",
        }
    }
}

/// Which wrappers a document click landed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickHit {
    pub in_notif_wrap: bool,
    pub in_user_wrap: bool,
}

impl ClickHit {
    pub fn inside(self, dropdown: Dropdown) -> bool {
        match dropdown {
            Dropdown::Notifications => self.in_notif_wrap,
            Dropdown::UserMenu => self.in_user_wrap,
        }
    }
}

/// Result of a toggle request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleEffect {
    Opened,
    Closed,
    /// The dropdown is not on the page; only the other one was closed.
    Missing,
}

impl ToggleEffect {
    /// Opening the notification dropdown fetches the list.
    pub fn loads_notifications(self, dropdown: Dropdown) -> bool {
        self == Self::Opened && dropdown == Dropdown::Notifications
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: Option<Dropdown>,
}

impl DropdownState {
    /// Seed from the classes found in server-rendered markup.
    /// Notifications win when both are marked open.
    pub fn from_flags(notif_open: bool, user_open: bool) -> Self {
        let open = if notif_open {
            Some(Dropdown::Notifications)
        } else if user_open {
            Some(Dropdown::UserMenu)
        } else {
            None
        };
        Self { open }
    }

    pub fn is_open(&self, dropdown: Dropdown) -> bool {
        self.open == Some(dropdown)
    }

    /// Close every other dropdown, then flip `dropdown`. Returns whether it is
    /// now open.
    pub fn toggle(&mut self, dropdown: Dropdown) -> bool {
        if self.is_open(dropdown) {
            self.open = None;
            false
        } else {
            self.open = Some(dropdown);
            true
        }
    }

    /// Close the other dropdown unconditionally, then flip `dropdown` if its
    /// element is `present`.
    pub fn request_toggle(&mut self, dropdown: Dropdown, present: bool) -> ToggleEffect {
        self.close(dropdown.other());
        if !present {
            return ToggleEffect::Missing;
        }
        if self.toggle(dropdown) {
            ToggleEffect::Opened
        } else {
            ToggleEffect::Closed
        }
    }

    pub fn close(&mut self, dropdown: Dropdown) {
        if self.is_open(dropdown) {
            self.open = None;
        }
    }

    /// Apply a document click. Returns `true` when something closed.
    pub fn dismiss_outside(&mut self, hit: ClickHit) -> bool {
        match self.open {
            Some(dropdown) if !hit.inside(dropdown) => {
                self.open = None;
                true
            }
            _ => false,
        }
    }
}
