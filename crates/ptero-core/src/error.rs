//! Error type for the panel client.
//!
//! `PanelError` covers the three places a call can fail: local validation
//! (before any request is sent), the transport, and the panel itself.
//! Panel failures are mapped from the HTTP status code in
//! [`PanelError::from_response`].

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, PanelError>;

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {message}")]
    Validation {
        status: u16,
        message: String,
        details: Vec<ApiErrorDetail>,
    },

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Panel error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// One entry of the panel's `{"errors": [...]}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl ApiErrorDetail {
    /// Request field the panel blamed, when it says so.
    pub fn source_field(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|m| m.get("source_field"))
            .and_then(|v| v.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

impl PanelError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PanelError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Map a non-success response to an error.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let details = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.errors)
            .unwrap_or_default();

        let message = if !details.is_empty() {
            details
                .iter()
                .map(|d| {
                    if d.detail.is_empty() {
                        d.code.clone()
                    } else {
                        d.detail.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join("; ")
        } else if !body.trim().is_empty() {
            body.trim().to_string()
        } else {
            status
                .canonical_reason()
                .unwrap_or("no response body")
                .to_string()
        };

        match status.as_u16() {
            code @ (400 | 422) => PanelError::Validation {
                status: code,
                message,
                details,
            },
            401 => PanelError::Unauthorized(message),
            403 => PanelError::Forbidden(message),
            404 => PanelError::NotFound(message),
            409 => PanelError::Conflict(message),
            429 => PanelError::RateLimited(message),
            code @ 500..=599 => PanelError::Server {
                status: code,
                message,
            },
            code => PanelError::UnexpectedStatus {
                status: code,
                message,
            },
        }
    }

    /// HTTP status this error was mapped from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            PanelError::Unauthorized(_) => Some(401),
            PanelError::Forbidden(_) => Some(403),
            PanelError::NotFound(_) => Some(404),
            PanelError::Conflict(_) => Some(409),
            PanelError::RateLimited(_) => Some(429),
            PanelError::Validation { status, .. }
            | PanelError::Server { status, .. }
            | PanelError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PanelError::NotFound(_))
    }
}

impl From<reqwest::Error> for PanelError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            PanelError::Decode(e.to_string())
        } else {
            PanelError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(e: serde_json::Error) -> Self {
        PanelError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_body_is_joined() {
        let body = r#"{"errors":[
            {"code":"ValidationException","status":"422","detail":"The email field is required.","meta":{"source_field":"email","rule":"required"}},
            {"code":"ValidationException","status":"422","detail":"The username has already been taken."}
        ]}"#;
        let err = PanelError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body);
        match &err {
            PanelError::Validation {
                message, details, ..
            } => {
                assert_eq!(
                    message,
                    "The email field is required.; The username has already been taken."
                );
                assert_eq!(details.len(), 2);
                assert_eq!(details[0].source_field(), Some("email"));
                assert_eq!(details[1].source_field(), None);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (StatusCode::UNAUTHORIZED, 401),
            (StatusCode::FORBIDDEN, 403),
            (StatusCode::NOT_FOUND, 404),
            (StatusCode::CONFLICT, 409),
            (StatusCode::TOO_MANY_REQUESTS, 429),
            (StatusCode::BAD_GATEWAY, 502),
            (StatusCode::IM_A_TEAPOT, 418),
        ];
        for (status, expected) in cases {
            let err = PanelError::from_response(status, "");
            assert_eq!(err.status(), Some(expected), "{:?}", err);
        }
        assert!(matches!(
            PanelError::from_response(StatusCode::BAD_GATEWAY, ""),
            PanelError::Server { status: 502, .. }
        ));
        assert!(matches!(
            PanelError::from_response(StatusCode::IM_A_TEAPOT, ""),
            PanelError::UnexpectedStatus { status: 418, .. }
        ));
    }

    #[test]
    fn test_plain_text_and_empty_bodies() {
        let err = PanelError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "  upstream died \n");
        assert_eq!(err.to_string(), "Panel error (500): upstream died");

        let err = PanelError::from_response(StatusCode::NOT_FOUND, "");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: Not Found");
    }

    #[test]
    fn test_bad_request_without_details_is_validation() {
        let err = PanelError::from_response(StatusCode::BAD_REQUEST, "{}");
        match err {
            PanelError::Validation {
                status,
                message,
                details,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "{}");
                assert!(details.is_empty());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
