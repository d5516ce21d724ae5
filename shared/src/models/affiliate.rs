//! Affiliate Model

use super::serde_helpers::null_as_default;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// How the customer discount of an affiliate code is expressed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

/// How the seller commission of an affiliate code is expressed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CommissionType {
    #[default]
    Percentage,
    Fixed,
}

/// Discount/commission configuration of an affiliate code
///
/// Only the field selected by `discount_type` (resp. `commission_type`) is
/// authoritative. Numeric fields the service omits stay `None` and are read
/// as 0 by the pricing engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AffiliateConfig {
    pub discount_type: DiscountType,
    /// Percentage value (10 = 10%)
    pub discount_percentage: Option<f64>,
    /// Currency amount
    pub discount_fixed_amount: Option<f64>,
    pub commission_type: CommissionType,
    /// Percentage of the final (discounted) price
    pub commission_rate: Option<f64>,
    /// Flat currency amount per sale
    pub commission_fixed_amount: Option<f64>,
    /// Whether the code is currently redeemable
    pub is_active: bool,
}

impl AffiliateConfig {
    /// Percentage discount configuration
    pub fn percentage_discount(percentage: f64) -> Self {
        Self {
            discount_type: DiscountType::Percentage,
            discount_percentage: Some(percentage),
            is_active: true,
            ..Default::default()
        }
    }

    /// Fixed discount configuration
    pub fn fixed_discount(amount: f64) -> Self {
        Self {
            discount_type: DiscountType::Fixed,
            discount_fixed_amount: Some(amount),
            is_active: true,
            ..Default::default()
        }
    }

    /// Set a percentage commission
    pub fn with_commission_rate(mut self, rate: f64) -> Self {
        self.commission_type = CommissionType::Percentage;
        self.commission_rate = Some(rate);
        self
    }

    /// Set a flat commission
    pub fn with_commission_fixed(mut self, amount: f64) -> Self {
        self.commission_type = CommissionType::Fixed;
        self.commission_fixed_amount = Some(amount);
        self
    }
}

/// Affiliate entity as returned by the affiliate service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affiliate {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Redemption code, fixed at creation
    pub affiliate_code: String,
    #[serde(flatten)]
    pub config: AffiliateConfig,
    /// Unix millis
    #[serde(default)]
    pub created_at: i64,
}

/// Update affiliate payload (PUT body)
///
/// `affiliate_code` is immutable and therefore not part of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateUpdate {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub config: AffiliateConfig,
}

impl From<&Affiliate> for AffiliateUpdate {
    fn from(affiliate: &Affiliate) -> Self {
        Self {
            name: affiliate.name.clone(),
            email: affiliate.email.clone(),
            config: affiliate.config.clone(),
        }
    }
}

/// Commission lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CommissionStatus {
    Pending,
    Approved,
    Paid,
    Cancelled,
}

impl CommissionStatus {
    /// Label shown in the commission history
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Paid => "Paid",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Historical commission record (computed server-side)
///
/// Numbers the service leaves out or sends as `null` read as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub customer_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount_amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub final_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commission_amount: f64,
    pub status: CommissionStatus,
    /// Unix millis
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
}

impl Commission {
    /// `created_at` as a UTC timestamp (None when out of range)
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_at).single()
    }
}

/// Aggregate affiliate statistics from `GET /affiliates/:id/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AffiliateStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_sales: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_revenue: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_commission: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_sale_value: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub commissions: Vec<Commission>,
}
