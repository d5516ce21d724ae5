//! Error value and the `{ code, message, data }` response envelope

use super::codes::ErrorCode;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Coded error with optional structured details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    /// Field-level context, e.g. `{"field": "discountPercentage"}`
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Response envelope used by the affiliate service.
///
/// A missing `code` counts as success.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self.code, None | Some(0))
    }

    /// Payload on success, otherwise the reported error.
    ///
    /// Unknown codes become [`ErrorCode::Unknown`]; an empty message takes
    /// the code's default text.
    pub fn into_result(self) -> AppResult<Option<T>> {
        if self.is_success() {
            return Ok(self.data);
        }
        let code = self
            .code
            .and_then(|c| ErrorCode::try_from(c).ok())
            .unwrap_or(ErrorCode::Unknown);
        let message = if self.message.trim().is_empty() {
            code.message().to_string()
        } else {
            self.message
        };
        Err(AppError {
            code,
            message,
            details: self.details,
        })
    }
}
