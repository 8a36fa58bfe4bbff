//! Notification DTOs for the `/api/notifications` boundary.
//!
//! DESIGN
//! ======
//! The backend serializes a loosely typed `Payload` map next to a `Type`
//! string. Decoding goes through a private wire struct and lands in
//! `NotificationKind`, so each rendering branch only sees the fields it uses.
//! Values the backend may emit as falsy (empty strings, `0`, `null`) decode to
//! `None` and the renderer applies its fallbacks.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::Value;

/// Type string for "someone responded to your project".
pub const TYPE_NEW_RESPONSE: &str = "new_response";
/// Type string for "your response was accepted".
pub const TYPE_RESPONSE_ACCEPTED: &str = "response_accepted";

/// A notification as shown in the dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "NotificationWire")]
pub struct Notification {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub read: bool,
    /// RFC 3339 timestamp as sent by the server.
    pub created_at: Option<String>,
    pub kind: NotificationKind,
}

/// Notification variants keyed by the wire `Type` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    NewResponse {
        responder: Option<String>,
        project: ProjectRef,
    },
    ResponseAccepted {
        project: ProjectRef,
    },
    /// A type this client does not know how to describe.
    Unknown(String),
}

/// Project referenced by a notification payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectRef {
    /// Path segment for `/project/{id}`.
    pub id: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NotificationWire {
    #[serde(rename = "ID", default)]
    id: Option<i64>,
    #[serde(rename = "UserID", default)]
    user_id: Option<i64>,
    #[serde(rename = "Type", default)]
    kind: String,
    #[serde(rename = "Payload", default)]
    payload: Option<PayloadWire>,
    #[serde(rename = "Read", default)]
    read: bool,
    #[serde(rename = "CreatedAt", default)]
    created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PayloadWire {
    #[serde(default)]
    user_name: Option<Value>,
    #[serde(default)]
    project_title: Option<Value>,
    #[serde(default)]
    project_id: Option<Value>,
}

impl From<NotificationWire> for Notification {
    fn from(wire: NotificationWire) -> Self {
        let payload = wire.payload.unwrap_or_default();
        let project = ProjectRef {
            id: payload.project_id.as_ref().and_then(truthy_text),
            title: payload.project_title.as_ref().and_then(truthy_text),
        };
        let kind = match wire.kind.as_str() {
            TYPE_NEW_RESPONSE => NotificationKind::NewResponse {
                responder: payload.user_name.as_ref().and_then(truthy_text),
                project,
            },
            TYPE_RESPONSE_ACCEPTED => NotificationKind::ResponseAccepted { project },
            _ => NotificationKind::Unknown(wire.kind),
        };
        Self {
            id: wire.id,
            user_id: wire.user_id,
            read: wire.read,
            created_at: wire.created_at,
            kind,
        }
    }
}

/// String or number as text; falsy values (`""`, `0`, `null`, bools) are `None`.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Decode a `/api/notifications` response body. `null` means no notifications.
///
/// # Errors
///
/// Returns the serde error when the body is not `null` or an array of
/// notification objects.
pub fn decode_notifications(body: &str) -> Result<Vec<Notification>, serde_json::Error> {
    let list: Option<Vec<Notification>> = serde_json::from_str(body)?;
    Ok(list.unwrap_or_default())
}
