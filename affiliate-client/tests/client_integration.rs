// affiliate-client/tests/client_integration.rs
// Service-level tests against an in-memory HTTP client

use affiliate_client::{
    AffiliateApi, AffiliateService, ClientError, ClientResult, HttpClient,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use shared::error::ErrorCode;
use shared::models::{AffiliateConfig, AffiliateUpdate, CommissionStatus};
use std::sync::Mutex;

/// Records each call and answers with a canned JSON value
struct RecordingClient {
    response: Result<Value, (ErrorCode, String)>,
    calls: Mutex<Vec<(String, String, Option<Value>)>>,
}

impl RecordingClient {
    fn ok(response: Value) -> Self {
        Self {
            response: Ok(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(code: ErrorCode, message: &str) -> Self {
        Self {
            response: Err((code, message.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn answer<T: DeserializeOwned>(&self) -> ClientResult<T> {
        match &self.response {
            Ok(value) => Ok(serde_json::from_value(value.clone())?),
            Err((code, message)) => Err(ClientError::Api {
                code: *code,
                message: message.clone(),
                details: None,
            }),
        }
    }
}

#[async_trait]
impl HttpClient for RecordingClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.calls
            .lock()
            .unwrap()
            .push(("GET".to_string(), path.to_string(), None));
        self.answer()
    }

    async fn put<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.calls
            .lock()
            .unwrap()
            .push(("PUT".to_string(), path.to_string(), Some(body)));
        self.answer()
    }
}

#[tokio::test]
async fn test_get_stats_hits_stats_endpoint() {
    let client = RecordingClient::ok(json!({
        "totalSales": 1,
        "totalRevenue": 2699.99,
        "totalCommission": 135.0,
        "averageSaleValue": 2699.99,
        "commissions": [{
            "customerEmail": "buyer@example.com",
            "originalPrice": 2999.99,
            "discountAmount": 300.0,
            "finalPrice": 2699.99,
            "commissionAmount": 135.0,
            "status": "pending",
            "createdAt": 1700000000000i64
        }]
    }));
    let service = AffiliateService::new(client);

    let stats = service.get_stats(42).await.unwrap();
    assert_eq!(stats.total_sales, 1);
    assert_eq!(stats.commissions[0].status, CommissionStatus::Pending);

    let calls = service.http().calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "GET");
    assert_eq!(calls[0].1, "affiliates/42/stats");
}

#[tokio::test]
async fn test_update_sends_body_without_code() {
    let client = RecordingClient::ok(json!({
        "id": 42,
        "name": "Jane",
        "email": "jane@example.com",
        "affiliateCode": "JANE10",
        "discountType": "percentage",
        "discountPercentage": 10.0,
        "commissionType": "percentage",
        "commissionRate": 5.0,
        "isActive": true
    }));
    let service = AffiliateService::new(client);
    let update = AffiliateUpdate {
        name: "Jane".to_string(),
        email: "jane@example.com".to_string(),
        config: AffiliateConfig::percentage_discount(10.0).with_commission_rate(5.0),
    };

    let saved = service.update_affiliate(42, &update).await.unwrap();
    assert_eq!(saved.affiliate_code, "JANE10");

    let calls = service.http().calls.lock().unwrap();
    let (method, path, body) = &calls[0];
    assert_eq!(method, "PUT");
    assert_eq!(path, "affiliates/42");
    let body = body.as_ref().unwrap();
    assert!(body.get("affiliateCode").is_none());
    assert_eq!(body["commissionRate"], 5.0);
}

#[tokio::test]
async fn test_update_failure_is_reported_once() {
    let service = AffiliateService::new(RecordingClient::failing(
        ErrorCode::AffiliateEmailExists,
        "Email already in use",
    ));
    let update = AffiliateUpdate {
        name: "Jane".to_string(),
        email: "taken@example.com".to_string(),
        config: AffiliateConfig::default(),
    };

    let err = service.update_affiliate(1, &update).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::AffiliateEmailExists);
    assert_eq!(err.user_message(), "Email already in use");
    // No retry
    assert_eq!(service.http().calls.lock().unwrap().len(), 1);
}
