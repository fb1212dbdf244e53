//! API Errors
//!
//! Every failure surfaces as a user-facing message; the variant records
//! where it came from.

use serde::Deserialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{message}")]
    Status { status: u16, message: String },

    /// The server answered 2xx but the envelope said `success: false`
    /// or carried no data.
    #[error("{0}")]
    Rejected(String),

    /// No response at all; the transport's detail is kept for logs.
    #[error("Network error - no response received")]
    Network(String),

    #[error("Invalid request payload: {0}")]
    Encode(String),

    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

/// Error body shape; `message` is a string or, for validation failures,
/// a list of strings.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<ErrorMessage>,
    error: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ApiError {
    /// Build an error from a non-2xx response.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = body_message(body)
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        match status {
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            500..=599 => ApiError::Server { status, message },
            _ => ApiError::Status { status, message },
        }
    }

    /// HTTP status behind this error, if there was a response at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Server { status, .. } | ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn body_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.message {
        Some(ErrorMessage::One(message)) if !message.is_empty() => Some(message),
        Some(ErrorMessage::Many(messages)) if !messages.is_empty() => Some(messages.join(", ")),
        _ => parsed.error.filter(|e| !e.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_body() {
        let err = ApiError::from_response(400, br#"{"success":false,"message":"Email already taken"}"#);
        assert_eq!(err, ApiError::Status { status: 400, message: "Email already taken".into() });
        assert_eq!(err.to_string(), "Email already taken");
    }

    #[test]
    fn test_message_list_is_joined() {
        let err = ApiError::from_response(400, br#"{"message":["email must be an email","password too short"]}"#);
        assert_eq!(err.to_string(), "email must be an email, password too short");
    }

    #[test]
    fn test_status_fallback_message() {
        let err = ApiError::from_response(502, b"<html>bad gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status code 502");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(ApiError::from_response(401, b""), ApiError::Unauthorized(_)));
        assert!(matches!(ApiError::from_response(403, b""), ApiError::Forbidden(_)));
        assert!(matches!(ApiError::from_response(404, b""), ApiError::NotFound(_)));
        assert!(matches!(ApiError::from_response(500, b""), ApiError::Server { .. }));
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn test_error_field_used_when_message_missing() {
        let err = ApiError::from_response(403, br#"{"error":"Forbidden"}"#);
        assert_eq!(err.to_string(), "Forbidden");
    }
}
