//! Affiliate Client - HTTP client for the affiliate service
//!
//! Provides the two calls the console makes against the affiliate REST
//! service: fetching historical stats and persisting a configuration.

pub mod affiliate;
pub mod config;
pub mod error;
pub mod http;

pub use affiliate::{AffiliateApi, AffiliateService};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export shared types for convenience
pub use shared::models::{Affiliate, AffiliateStats, AffiliateUpdate};
