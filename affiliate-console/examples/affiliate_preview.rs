//! Affiliate preview
//!
//! Fetches an affiliate and its stats, prints the stats summary as JSON and
//! the live editor preview for the current configuration.
//!
//! ```text
//! cargo run -p affiliate-console --example affiliate_preview -- <affiliate-id>
//! ```

use affiliate_client::{AffiliateApi, AffiliateService};
use affiliate_console::money::format_currency;
use affiliate_console::utils::init_logger_with_file;
use affiliate_console::{ConfigEditor, ConsoleConfig, present_stats};
use anyhow::Context;
use shared::error::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = ConsoleConfig::from_env()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref())?;

    let affiliate_id: i64 = std::env::args()
        .nth(1)
        .context("usage: affiliate_preview <affiliate-id>")?
        .parse()
        .context("affiliate id must be an integer")?;

    tracing::info!(api_url = %config.api_url, affiliate_id, "Loading affiliate");

    let service = AffiliateService::from_config(&config.client_config())?;
    let affiliate = service
        .get_affiliate(affiliate_id)
        .await
        .map_err(AppError::from)?;
    let stats = service
        .get_stats(affiliate_id)
        .await
        .map_err(AppError::from)?;

    let summary = present_stats(&affiliate, &stats, config.reference_price);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let editor = ConfigEditor::open(&affiliate, config.pricing_limits());
    let preview = editor.preview();
    tracing::info!(
        code = editor.affiliate_code(),
        final_price = %format_currency(preview.final_price),
        commission = %format_currency(preview.commission_amount),
        "Editor preview"
    );
    if let Err(err) = editor.validate() {
        let err = AppError::from(err);
        tracing::warn!(
            code = %err.code,
            details = ?err.details,
            "Stored configuration would be rejected: {}",
            err
        );
    }

    Ok(())
}
