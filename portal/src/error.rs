//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every view catches these at the call site and turns them into an inline
//! message with [`ApiError::user_message`]. Only the route guard treats an
//! identity-fetch failure differently: it redirects instead of displaying.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// Missing or expired credentials (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,
    /// The backend refused the request: validation, business rule, or a
    /// role check (403).
    #[error("request rejected ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// Classify a non-success HTTP status and its raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            _ => Self::Rejected { status, detail: detail_from_body(body) },
        }
    }

    /// Backend-provided `detail` message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message a view displays inline: the backend detail when present,
    /// otherwise the view's own fallback.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_owned()
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Extract a display message from a `{"detail": ...}` error body.
///
/// String details are used verbatim. Structured validation details (a list
/// of `{"msg": ...}` entries) are joined with `"; "`.
fn detail_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(message) if !message.is_empty() => Some(message),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if messages.is_empty() { None } else { Some(messages.join("; ")) }
        }
        _ => None,
    }
}
