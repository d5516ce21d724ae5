//! Affiliate configuration validation
//!
//! Runs locally before a configuration is sent to the affiliate service.
//! Bounds are stricter than the engine: the engine clamps a fixed discount
//! to the price, saving requires it to be strictly below the price.

use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::{AffiliateConfig, AffiliateUpdate, CommissionType, DiscountType};
use thiserror::Error;

/// Maximum discount / commission percentage
pub const MAX_PERCENTAGE: f64 = 50.0;
/// Upper bound (exclusive) for a flat commission
pub const MAX_FIXED_COMMISSION: f64 = 1000.0;

/// Bounds a configuration must satisfy before it may be saved
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingLimits {
    /// Current product price; fixed discounts must stay below it
    pub reference_price: f64,
    pub max_discount_percentage: f64,
    pub max_commission_percentage: f64,
    /// Exclusive
    pub max_fixed_commission: f64,
}

impl PricingLimits {
    pub fn new(reference_price: f64) -> Self {
        Self {
            reference_price,
            max_discount_percentage: MAX_PERCENTAGE,
            max_commission_percentage: MAX_PERCENTAGE,
            max_fixed_commission: MAX_FIXED_COMMISSION,
        }
    }

    pub fn with_max_fixed_commission(mut self, max: f64) -> Self {
        self.max_fixed_commission = max;
        self
    }
}

/// Why a configuration cannot be saved
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Affiliate {field} is required")]
    MissingRequiredField { field: &'static str },

    #[error("Discount percentage must be between 0 and {max}% (got {value})")]
    InvalidDiscountPercentage { value: f64, max: f64 },

    #[error(
        "Fixed discount must be greater than 0 and less than the product price of {reference_price} (got {value})"
    )]
    InvalidFixedDiscount { value: f64, reference_price: f64 },

    #[error("Commission rate must be between 0 and {max}% (got {value})")]
    InvalidCommissionPercentage { value: f64, max: f64 },

    #[error("Fixed commission must be greater than 0 and less than {max} (got {value})")]
    InvalidFixedCommission { value: f64, max: f64 },
}

impl ValidationError {
    /// Form field the error belongs to (wire name)
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { field } => *field,
            Self::InvalidDiscountPercentage { .. } => "discountPercentage",
            Self::InvalidFixedDiscount { .. } => "discountFixedAmount",
            Self::InvalidCommissionPercentage { .. } => "commissionRate",
            Self::InvalidFixedCommission { .. } => "commissionFixedAmount",
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingRequiredField { .. } => ErrorCode::RequiredField,
            Self::InvalidDiscountPercentage { .. } | Self::InvalidFixedDiscount { .. } => {
                ErrorCode::InvalidDiscount
            }
            Self::InvalidCommissionPercentage { .. } | Self::InvalidFixedCommission { .. } => {
                ErrorCode::InvalidCommission
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let app =
            AppError::with_message(err.code(), err.to_string()).with_detail("field", err.field());
        match err {
            ValidationError::MissingRequiredField { .. } => app,
            ValidationError::InvalidDiscountPercentage { value, .. }
            | ValidationError::InvalidFixedDiscount { value, .. }
            | ValidationError::InvalidCommissionPercentage { value, .. }
            | ValidationError::InvalidFixedCommission { value, .. } => {
                app.with_detail("value", value)
            }
        }
    }
}

fn check_required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingRequiredField { field });
    }
    Ok(())
}

/// Discount rule for whichever discount field is authoritative
fn check_discount(
    config: &AffiliateConfig,
    limits: &PricingLimits,
) -> Result<(), ValidationError> {
    match config.discount_type {
        DiscountType::Percentage => {
            let value = config.discount_percentage.unwrap_or(0.0);
            if !(0.0..=limits.max_discount_percentage).contains(&value) {
                return Err(ValidationError::InvalidDiscountPercentage {
                    value,
                    max: limits.max_discount_percentage,
                });
            }
        }
        DiscountType::Fixed => {
            let value = config.discount_fixed_amount.unwrap_or(0.0);
            if !(value > 0.0 && value < limits.reference_price) {
                return Err(ValidationError::InvalidFixedDiscount {
                    value,
                    reference_price: limits.reference_price,
                });
            }
        }
    }
    Ok(())
}

/// Commission rule for whichever commission field is authoritative
fn check_commission(
    config: &AffiliateConfig,
    limits: &PricingLimits,
) -> Result<(), ValidationError> {
    match config.commission_type {
        CommissionType::Percentage => {
            let value = config.commission_rate.unwrap_or(0.0);
            if !(0.0..=limits.max_commission_percentage).contains(&value) {
                return Err(ValidationError::InvalidCommissionPercentage {
                    value,
                    max: limits.max_commission_percentage,
                });
            }
        }
        CommissionType::Fixed => {
            let value = config.commission_fixed_amount.unwrap_or(0.0);
            if !(value > 0.0 && value < limits.max_fixed_commission) {
                return Err(ValidationError::InvalidFixedCommission {
                    value,
                    max: limits.max_fixed_commission,
                });
            }
        }
    }
    Ok(())
}

/// Validate an update before saving; the first failing rule wins.
///
/// Order: name, email, discount, commission.
pub fn validate_affiliate(
    form: &AffiliateUpdate,
    limits: &PricingLimits,
) -> Result<(), ValidationError> {
    check_required(&form.name, "name")?;
    check_required(&form.email, "email")?;
    check_discount(&form.config, limits)?;
    check_commission(&form.config, limits)?;
    Ok(())
}

/// Same rules as [`validate_affiliate`], reporting every failure
pub fn validate_affiliate_all(
    form: &AffiliateUpdate,
    limits: &PricingLimits,
) -> Vec<ValidationError> {
    [
        check_required(&form.name, "name"),
        check_required(&form.email, "email"),
        check_discount(&form.config, limits),
        check_commission(&form.config, limits),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}
