//! Shared types for the affiliate console
//!
//! Domain models exchanged with the affiliate service and the unified
//! error vocabulary used by the client and console crates.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{
    Affiliate, AffiliateConfig, AffiliateStats, AffiliateUpdate, Commission, CommissionStatus,
    CommissionType, DiscountType,
};
