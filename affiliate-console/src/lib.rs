//! Affiliate Console - pricing and configuration for affiliate partners
//!
//! - [`pricing`]: discount/commission engine and save-time validation
//! - [`editor`]: edit session state machine with live preview
//! - [`presenter`]: read-only stats summary
//! - [`money`]: Decimal conversion and currency display
//! - [`config`]: environment-driven console settings

pub mod config;
pub mod editor;
pub mod money;
pub mod presenter;
pub mod pricing;
pub mod utils;

pub use config::{ConfigError, ConsoleConfig};
pub use editor::{ConfigEditor, EditorError, EditorState};
pub use presenter::{StatsSummary, present_stats};
pub use pricing::{
    PricingLimits, PricingResult, ValidationError, compute_pricing, validate_affiliate,
    validate_affiliate_all,
};
