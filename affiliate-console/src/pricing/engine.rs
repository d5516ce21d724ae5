//! Affiliate pricing engine
//!
//! One sale under one affiliate configuration: the customer discount, the
//! price the customer pays and the seller commission. Both the stats view
//! and the editor preview go through [`compute_pricing`].

use crate::money::{MAX_AMOUNT, MAX_RATE, bounded_decimal};
use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::{AffiliateConfig, CommissionType, DiscountType};

/// Result of pricing a single sale
///
/// Full precision; round with [`crate::money::round_for_display`] when
/// showing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub original_price: Decimal,
    pub discount_amount: Decimal,
    pub final_price: Decimal,
    pub commission_amount: Decimal,
}

/// Compute discount, final price and commission for one sale.
///
/// - Percentage discount: `price * pct / 100`
/// - Fixed discount: `min(fixed, price)`, so the final price never goes
///   negative. Out-of-policy values are not rejected here; that is
///   [`super::validate_affiliate`]'s job.
/// - Percentage commission is taken on the final (discounted) price.
/// - Fixed commission is flat, whatever the discount.
///
/// Missing or non-finite numbers count as zero. Amounts are clamped to
/// +/-[`MAX_AMOUNT`] and percentages to +/-[`MAX_RATE`] first, so any
/// numeric input prices without overflowing.
pub fn compute_pricing(config: &AffiliateConfig, original_price: f64) -> PricingResult {
    let original = bounded_decimal(Some(original_price), MAX_AMOUNT);

    let discount_amount = match config.discount_type {
        DiscountType::Percentage => {
            let pct = bounded_decimal(config.discount_percentage, MAX_RATE);
            original * pct / Decimal::ONE_HUNDRED
        }
        DiscountType::Fixed => {
            bounded_decimal(config.discount_fixed_amount, MAX_AMOUNT).min(original)
        }
    };

    let final_price = original - discount_amount;

    let commission_amount = match config.commission_type {
        CommissionType::Percentage => {
            let rate = bounded_decimal(config.commission_rate, MAX_RATE);
            final_price * rate / Decimal::ONE_HUNDRED
        }
        CommissionType::Fixed => bounded_decimal(config.commission_fixed_amount, MAX_AMOUNT),
    };

    PricingResult {
        original_price: original,
        discount_amount,
        final_price,
        commission_amount,
    }
}
