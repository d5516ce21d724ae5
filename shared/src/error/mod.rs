//! Error vocabulary shared by the client and the console
//!
//! - [`ErrorCode`]: numeric codes the affiliate service reports
//! - [`AppError`]: coded error with optional details
//! - [`ApiResponse`]: `{ code, message, data, details }` envelope
//!
//! ```
//! use shared::error::{ApiResponse, ErrorCode};
//!
//! let body = r#"{"code":4001,"message":"Discount too high"}"#;
//! let response: ApiResponse<()> = serde_json::from_str(body).unwrap();
//! let err = response.into_result().unwrap_err();
//! assert_eq!(err.code, ErrorCode::InvalidDiscount);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
