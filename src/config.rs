//! Controller configuration with serde defaults.
//!
//! The server may embed a `<script type="application/json" id="svyaz-ui-config">`
//! block to override endpoints or element ids. Omitted fields keep their
//! defaults, so an empty object is a valid config.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional JSON config block.
pub const CONFIG_SCRIPT_ID: &str = "svyaz-ui-config";

pub const DEFAULT_NOTIFICATIONS_ENDPOINT: &str = "/api/notifications";
pub const DEFAULT_MARK_READ_ENDPOINT: &str = "/api/notifications/read";
pub const DEFAULT_NOTIF_DROPDOWN_ID: &str = "notifDropdown";
pub const DEFAULT_USER_DROPDOWN_ID: &str = "userDropdown";

/// Runtime settings for the page controller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub notifications_endpoint: String,
    pub mark_read_endpoint: String,
    pub notif_dropdown_id: String,
    pub user_dropdown_id: String,
    /// `log` level name: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            notifications_endpoint: DEFAULT_NOTIFICATIONS_ENDPOINT.to_owned(),
            mark_read_endpoint: DEFAULT_MARK_READ_ENDPOINT.to_owned(),
            notif_dropdown_id: DEFAULT_NOTIF_DROPDOWN_ID.to_owned(),
            user_dropdown_id: DEFAULT_USER_DROPDOWN_ID.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl ControllerConfig {
    /// Parse a JSON override block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the text is not a JSON object of the
    /// expected shape.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text)
    }

    /// Resolved log level; unknown names fall back to `Info`.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
