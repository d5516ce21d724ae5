//! Affiliate stats summary
//!
//! Read-only view combining the server's aggregates and commission history
//! with an example sale priced under the affiliate's current configuration.
//! Server figures are shown as-is, never recomputed.

use crate::money::{format_amount, format_currency};
use crate::pricing::{PricingResult, compute_pricing};
use serde::Serialize;
use shared::models::{
    Affiliate, AffiliateConfig, AffiliateStats, Commission, CommissionType, DiscountType,
};

/// Example sale, formatted for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSale {
    pub original_price: String,
    pub discount_amount: String,
    pub final_price: String,
    pub commission_amount: String,
    /// Unrounded figures
    pub raw: PricingResult,
}

impl From<PricingResult> for ExampleSale {
    fn from(result: PricingResult) -> Self {
        Self {
            original_price: format_currency(result.original_price),
            discount_amount: format_currency(result.discount_amount),
            final_price: format_currency(result.final_price),
            commission_amount: format_currency(result.commission_amount),
            raw: result,
        }
    }
}

/// One commission history row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRow {
    pub customer_email: String,
    pub original_price: String,
    pub discount_amount: String,
    pub final_price: String,
    pub commission_amount: String,
    pub status: &'static str,
    /// `YYYY-MM-DD HH:MM` (UTC), `-` when the timestamp is unusable
    pub created_at: String,
}

impl From<&Commission> for CommissionRow {
    fn from(c: &Commission) -> Self {
        Self {
            customer_email: c.customer_email.clone(),
            original_price: format_amount(c.original_price),
            discount_amount: format_amount(c.discount_amount),
            final_price: format_amount(c.final_price),
            commission_amount: format_amount(c.commission_amount),
            status: c.status.label(),
            created_at: c
                .created_at_utc()
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub affiliate_code: String,
    pub name: String,
    pub is_active: bool,
    pub discount_label: String,
    pub commission_label: String,
    pub example: ExampleSale,
    pub total_sales: u64,
    pub total_revenue: String,
    pub total_commission: String,
    pub average_sale_value: String,
    pub commissions: Vec<CommissionRow>,
}

/// "10% off" / "$250.00 off"
pub fn discount_label(config: &AffiliateConfig) -> String {
    match config.discount_type {
        DiscountType::Percentage => {
            format!("{}% off", config.discount_percentage.unwrap_or(0.0))
        }
        DiscountType::Fixed => {
            format!("{} off", format_amount(config.discount_fixed_amount.unwrap_or(0.0)))
        }
    }
}

/// "5% of final price" / "$100.00 per sale"
pub fn commission_label(config: &AffiliateConfig) -> String {
    match config.commission_type {
        CommissionType::Percentage => format!(
            "{}% of final price",
            config.commission_rate.unwrap_or(0.0)
        ),
        CommissionType::Fixed => format!(
            "{} per sale",
            format_amount(config.commission_fixed_amount.unwrap_or(0.0))
        ),
    }
}

/// Build the stats summary for an affiliate.
///
/// `reference_price` is the product price the example sale is priced at.
pub fn present_stats(
    affiliate: &Affiliate,
    stats: &AffiliateStats,
    reference_price: f64,
) -> StatsSummary {
    let example = compute_pricing(&affiliate.config, reference_price);
    tracing::debug!(
        affiliate_id = affiliate.id,
        final_price = %example.final_price,
        commission = %example.commission_amount,
        "Priced example sale"
    );

    StatsSummary {
        affiliate_code: affiliate.affiliate_code.clone(),
        name: affiliate.name.clone(),
        is_active: affiliate.config.is_active,
        discount_label: discount_label(&affiliate.config),
        commission_label: commission_label(&affiliate.config),
        example: example.into(),
        total_sales: stats.total_sales,
        total_revenue: format_amount(stats.total_revenue),
        total_commission: format_amount(stats.total_commission),
        average_sale_value: format_amount(stats.average_sale_value),
        commissions: stats.commissions.iter().map(CommissionRow::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CommissionStatus;

    fn affiliate(config: AffiliateConfig) -> Affiliate {
        Affiliate {
            id: 1,
            name: "Jane Trader".to_string(),
            email: "jane@example.com".to_string(),
            affiliate_code: "JANE10".to_string(),
            config,
            created_at: 0,
        }
    }

    #[test]
    fn test_labels() {
        let config = AffiliateConfig::percentage_discount(10.0).with_commission_rate(5.0);
        assert_eq!(discount_label(&config), "10% off");
        assert_eq!(commission_label(&config), "5% of final price");

        let config = AffiliateConfig::fixed_discount(250.0).with_commission_fixed(100.0);
        assert_eq!(discount_label(&config), "$250.00 off");
        assert_eq!(commission_label(&config), "$100.00 per sale");

        let config = AffiliateConfig::percentage_discount(12.5);
        assert_eq!(discount_label(&config), "12.5% off");
    }

    #[test]
    fn test_example_sale_is_rounded_for_display_only() {
        let a = affiliate(AffiliateConfig::percentage_discount(10.0).with_commission_rate(5.0));
        let summary = present_stats(&a, &AffiliateStats::default(), 2999.99);

        assert_eq!(summary.example.original_price, "$2,999.99");
        assert_eq!(summary.example.discount_amount, "$300.00");
        assert_eq!(summary.example.final_price, "$2,699.99");
        assert_eq!(summary.example.commission_amount, "$135.00");
        assert_eq!(
            summary.example.raw.commission_amount,
            "134.99955".parse::<rust_decimal::Decimal>().unwrap()
        );
    }

    #[test]
    fn test_server_figures_passed_through() {
        let a = affiliate(AffiliateConfig::fixed_discount(500.0).with_commission_fixed(100.0));
        let stats = AffiliateStats {
            total_sales: 2,
            total_revenue: 4999.98,
            total_commission: 200.0,
            average_sale_value: 2499.99,
            commissions: vec![Commission {
                customer_email: "buyer@example.com".to_string(),
                original_price: 2999.99,
                discount_amount: 500.0,
                final_price: 2499.99,
                commission_amount: 100.0,
                status: CommissionStatus::Approved,
                created_at: 1_700_000_000_000,
            }],
        };

        let summary = present_stats(&a, &stats, 2999.99);
        assert_eq!(summary.total_sales, 2);
        assert_eq!(summary.total_revenue, "$4,999.98");
        assert_eq!(summary.average_sale_value, "$2,499.99");

        let row = &summary.commissions[0];
        assert_eq!(row.final_price, "$2,499.99");
        assert_eq!(row.status, "Approved");
        assert_eq!(row.created_at, "2023-11-14 22:13");
    }

    #[test]
    fn test_unusable_timestamp() {
        let c = Commission {
            customer_email: "x@example.com".to_string(),
            original_price: 0.0,
            discount_amount: 0.0,
            final_price: 0.0,
            commission_amount: 0.0,
            status: CommissionStatus::Cancelled,
            created_at: i64::MAX,
        };
        assert_eq!(CommissionRow::from(&c).created_at, "-");
    }
}
