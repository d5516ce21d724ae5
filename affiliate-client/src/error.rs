//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error reported by the affiliate service
    #[error("API error {code}: {message}")]
    Api {
        code: ErrorCode,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Fallback shown when the service gives nothing usable
const GENERIC_FAILURE: &str = "Failed to save affiliate. Please try again.";

impl ClientError {
    /// Error code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Http(_) => ErrorCode::NetworkError,
            Self::Api { code, .. } => *code,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidFormat,
            Self::Unauthorized => ErrorCode::NotAuthenticated,
            Self::Forbidden(_) => ErrorCode::PermissionDenied,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Message suitable for the user: the server's own text when there is
    /// one, a generic fallback otherwise
    pub fn user_message(&self) -> String {
        let server_text = match self {
            Self::Api { message, .. } => Some(message.as_str()),
            Self::Forbidden(m) | Self::NotFound(m) | Self::Validation(m) | Self::Internal(m) => {
                Some(m.as_str())
            }
            _ => None,
        };
        match server_text.map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let app = AppError::with_message(err.code(), err.user_message());
        match err {
            ClientError::Api {
                details: Some(details),
                ..
            } => app.with_detail("upstream", details),
            _ => app,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
