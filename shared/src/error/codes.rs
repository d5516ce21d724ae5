//! Error codes reported by the affiliate service
//!
//! Ranges: 0xxx general, 1xxx auth, 2xxx permission, 3xxx affiliate,
//! 4xxx pricing, 9xxx system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried in `{ code, message }` bodies.
///
/// Serialized as the bare `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    Success = 0,
    Unknown = 1,
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    /// Body could not be decoded
    InvalidFormat = 6,
    RequiredField = 7,

    NotAuthenticated = 1001,
    PermissionDenied = 2001,

    AffiliateNotFound = 3001,
    /// `affiliateCode` is fixed at creation
    AffiliateCodeImmutable = 3002,
    AffiliateEmailExists = 3004,

    /// Discount outside the allowed range
    InvalidDiscount = 4001,
    /// Commission outside the allowed range
    InvalidCommission = 4002,

    InternalError = 9001,
    ServiceUnavailable = 9003,
    /// Request never got an answer
    NetworkError = 9004,
}

impl ErrorCode {
    /// Every known code, used to decode wire values
    const ALL: [ErrorCode; 17] = [
        Self::Success,
        Self::Unknown,
        Self::ValidationFailed,
        Self::NotFound,
        Self::AlreadyExists,
        Self::InvalidFormat,
        Self::RequiredField,
        Self::NotAuthenticated,
        Self::PermissionDenied,
        Self::AffiliateNotFound,
        Self::AffiliateCodeImmutable,
        Self::AffiliateEmailExists,
        Self::InvalidDiscount,
        Self::InvalidCommission,
        Self::InternalError,
        Self::ServiceUnavailable,
        Self::NetworkError,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default text when the service sends an empty message
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Unknown => "An unknown error occurred",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field is missing",
            Self::NotAuthenticated => "Not authenticated",
            Self::PermissionDenied => "Permission denied",
            Self::AffiliateNotFound => "Affiliate not found",
            Self::AffiliateCodeImmutable => "Affiliate code cannot be changed",
            Self::AffiliateEmailExists => "Affiliate email already exists",
            Self::InvalidDiscount => "Invalid discount configuration",
            Self::InvalidCommission => "Invalid commission configuration",
            Self::InternalError => "Internal server error",
            Self::ServiceUnavailable => "Service unavailable",
            Self::NetworkError => "Network error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A `u16` that is not a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
