//! Error code for responses without a structured body

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Best-effort code for a bare HTTP status
    pub fn from_http_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationFailed,
            StatusCode::UNAUTHORIZED => Self::NotAuthenticated,
            StatusCode::FORBIDDEN => Self::PermissionDenied,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::AlreadyExists,
            StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT => Self::NetworkError,
            StatusCode::SERVICE_UNAVAILABLE => Self::ServiceUnavailable,
            s if s.is_success() => Self::Success,
            _ => Self::InternalError,
        }
    }
}
