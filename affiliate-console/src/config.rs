//! Console configuration
//!
//! Read from environment variables (a `.env` file is loaded by the binary
//! before this runs).

use crate::pricing::{MAX_FIXED_COMMISSION, PricingLimits};
use affiliate_client::ClientConfig;
use thiserror::Error;

/// Product price used when `AFFILIATE_REFERENCE_PRICE` is unset
pub const DEFAULT_REFERENCE_PRICE: f64 = 2999.99;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{var} must be a positive amount, got {value}")]
    NotPositive { var: &'static str, value: f64 },
}

/// Console configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Affiliate service base URL
    pub api_url: String,
    /// Bearer token for the affiliate service
    pub api_token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Current product price (previews and fixed-discount bound)
    pub reference_price: f64,
    /// Exclusive upper bound for flat commissions
    pub max_fixed_commission: f64,
    /// trace | debug | info | warn | error
    pub log_level: String,
    /// Daily rolling log files go here when set
    pub log_dir: Option<String>,
}

impl ConsoleConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|s| !s.trim().is_empty());

        let reference_price = parse_amount(
            "AFFILIATE_REFERENCE_PRICE",
            var("AFFILIATE_REFERENCE_PRICE"),
            DEFAULT_REFERENCE_PRICE,
        )?;
        let max_fixed_commission = parse_amount(
            "AFFILIATE_MAX_FIXED_COMMISSION",
            var("AFFILIATE_MAX_FIXED_COMMISSION"),
            MAX_FIXED_COMMISSION,
        )?;
        let timeout_secs = match var("AFFILIATE_API_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: "AFFILIATE_API_TIMEOUT_SECS",
                value: raw,
            })?,
            None => 30,
        };

        Ok(Self {
            api_url: var("AFFILIATE_API_URL").unwrap_or_else(|| "http://localhost:8080/api".into()),
            api_token: var("AFFILIATE_API_TOKEN"),
            timeout_secs,
            reference_price,
            max_fixed_commission,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
        })
    }

    /// HTTP client configuration for the affiliate service
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.clone()).with_timeout(self.timeout_secs);
        match &self.api_token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }

    /// Validation bounds with the configured reference price
    pub fn pricing_limits(&self) -> PricingLimits {
        PricingLimits::new(self.reference_price).with_max_fixed_commission(self.max_fixed_commission)
    }
}

fn parse_amount(var: &'static str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw.clone() })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NotPositive { var, value });
    }
    Ok(value)
}
