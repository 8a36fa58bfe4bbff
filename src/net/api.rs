//! REST helpers for the notification endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps onto `ApiError` so the controller can choose between
//! the inline error placeholder and a log line without inspecting transport
//! details.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Notification;
#[cfg(feature = "hydrate")]
use super::types::decode_notifications;

/// Header carrying the anti-forgery token on every request.
pub const CSRF_HEADER: &str = "X-CSRF-Token";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("invalid notification payload: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Map an HTTP status onto `Ok(())` or `ApiError::Status`.
///
/// # Errors
///
/// Returns `ApiError::Status` for anything outside `200..=299`.
pub fn check_status(endpoint: &str, status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status {
            endpoint: endpoint.to_owned(),
            status,
        })
    }
}

/// Fetch the current user's notifications via `GET {endpoint}`.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a non-OK
/// status, or the body is not a notification list.
pub async fn fetch_notifications(endpoint: &str, csrf: &str) -> Result<Vec<Notification>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .header(CSRF_HEADER, csrf)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(endpoint, resp.status())?;
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(decode_notifications(&body)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, csrf);
        Err(ApiError::Unavailable)
    }
}

/// Mark every notification read via `POST {endpoint}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers with a
/// non-OK status.
pub async fn mark_notifications_read(endpoint: &str, csrf: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .header(CSRF_HEADER, csrf)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(endpoint, resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, csrf);
        Err(ApiError::Unavailable)
    }
}
