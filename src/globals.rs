//! Functions published on `window` for inline handlers in the page markup,
//! e.g. `onclick="toggleRole(this)"`.

#[cfg(test)]
#[path = "globals_test.rs"]
mod globals_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageFunction {
    ToggleNotifications,
    ToggleUserMenu,
    LoadNotifications,
    MarkNotificationsRead,
    MarkReadStatus,
    ToggleRole,
    StepCount,
}

impl PageFunction {
    pub const ALL: [PageFunction; 7] = [
        PageFunction::ToggleNotifications,
        PageFunction::ToggleUserMenu,
        PageFunction::LoadNotifications,
        PageFunction::MarkNotificationsRead,
        PageFunction::MarkReadStatus,
        PageFunction::ToggleRole,
        PageFunction::StepCount,
    ];

    /// Property name on `window`.
    pub fn js_name(self) -> &'static str {
        match self {
            Self::ToggleNotifications => "toggleNotifications",
            Self::ToggleUserMenu => "toggleUserMenu",
            Self::LoadNotifications => "loadNotifications",
            Self::MarkNotificationsRead => "markNotificationsRead",
            Self::MarkReadStatus => "markReadStatus",
            Self::ToggleRole => "toggleRole",
            Self::StepCount => "stepCount",
        }
    }
}
