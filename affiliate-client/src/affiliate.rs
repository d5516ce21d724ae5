//! Affiliate service API
//!
//! `GET /affiliates/:id`, `GET /affiliates/:id/stats` and
//! `PUT /affiliates/:id`. All calls are single-shot: no retry, no
//! cancellation. Callers decide what to do with a failure.

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};
use async_trait::async_trait;
use shared::models::{Affiliate, AffiliateStats, AffiliateUpdate};

/// Affiliate persistence and statistics
#[async_trait]
pub trait AffiliateApi: Send + Sync {
    /// Current affiliate record
    async fn get_affiliate(&self, affiliate_id: i64) -> ClientResult<Affiliate>;

    /// Historical aggregate stats and commission records
    async fn get_stats(&self, affiliate_id: i64) -> ClientResult<AffiliateStats>;

    /// Persist a validated configuration
    async fn update_affiliate(
        &self,
        affiliate_id: i64,
        update: &AffiliateUpdate,
    ) -> ClientResult<Affiliate>;
}

/// [`AffiliateApi`] backed by an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct AffiliateService<C = NetworkHttpClient> {
    http: C,
}

impl AffiliateService<NetworkHttpClient> {
    /// Build a service talking to the network
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?))
    }
}

impl<C: HttpClient> AffiliateService<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Underlying HTTP client
    pub fn http(&self) -> &C {
        &self.http
    }
}

fn stats_path(affiliate_id: i64) -> String {
    format!("affiliates/{}/stats", affiliate_id)
}

fn affiliate_path(affiliate_id: i64) -> String {
    format!("affiliates/{}", affiliate_id)
}

#[async_trait]
impl<C: HttpClient> AffiliateApi for AffiliateService<C> {
    async fn get_affiliate(&self, affiliate_id: i64) -> ClientResult<Affiliate> {
        self.http.get(&affiliate_path(affiliate_id)).await
    }

    async fn get_stats(&self, affiliate_id: i64) -> ClientResult<AffiliateStats> {
        let stats: AffiliateStats = self.http.get(&stats_path(affiliate_id)).await?;
        tracing::debug!(
            affiliate_id,
            total_sales = stats.total_sales,
            commissions = stats.commissions.len(),
            "Fetched affiliate stats"
        );
        Ok(stats)
    }

    async fn update_affiliate(
        &self,
        affiliate_id: i64,
        update: &AffiliateUpdate,
    ) -> ClientResult<Affiliate> {
        let affiliate: Affiliate = self.http.put(&affiliate_path(affiliate_id), update).await?;
        tracing::info!(affiliate_id, code = %affiliate.affiliate_code, "Affiliate updated");
        Ok(affiliate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(stats_path(12), "affiliates/12/stats");
        assert_eq!(affiliate_path(12), "affiliates/12");
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig::new("http://localhost:9000/api").with_token("t");
        let service = AffiliateService::from_config(&config).unwrap();
        assert_eq!(service.http().base_url(), "http://localhost:9000/api");
        assert_eq!(service.http().auth_header().as_deref(), Some("Bearer t"));
    }
}
