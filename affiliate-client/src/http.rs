//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::error::{ApiResponse, ErrorCode};

/// Error body returned by the affiliate service
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn put<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(error_from_body(status, text));
        }
        decode_body(&text)
    }
}

/// Map a non-success response to a [`ClientError`]
///
/// Structured `{code, message}` bodies become [`ClientError::Api`]; anything
/// else falls back to the status code.
pub fn error_from_body(status: StatusCode, text: String) -> ClientError {
    if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
        let code = ErrorCode::try_from(api_err.code)
            .unwrap_or_else(|_| ErrorCode::from_http_status(status));
        return ClientError::Api {
            code,
            message: api_err.message,
            details: api_err.details,
        };
    }
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(text),
        StatusCode::NOT_FOUND => ClientError::NotFound(text),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(text),
        _ => ClientError::Internal(text),
    }
}

/// Decode a success body, accepting either the `{code, message, data}`
/// envelope or the bare payload
pub fn decode_body<T: DeserializeOwned>(text: &str) -> ClientResult<T> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let is_envelope = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("data") || obj.contains_key("code"));
    if !is_envelope {
        return Ok(serde_json::from_value(value)?);
    }

    let envelope: ApiResponse<T> = serde_json::from_value(value)?;
    match envelope.into_result() {
        Ok(Some(data)) => Ok(data),
        // `()`-like payloads come back without data
        Ok(None) => serde_json::from_value(serde_json::Value::Null)
            .map_err(|_| ClientError::InvalidResponse("Missing response data".to_string())),
        Err(err) => Err(ClientError::Api {
            code: err.code,
            message: err.message,
            details: err
                .details
                .map(|d| serde_json::Value::Object(d.into_iter().collect())),
        }),
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let mut req = self.client.get(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }

    async fn put<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");
        let mut req = self.client.put(&url).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = req.send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::AffiliateStats;

    #[test]
    fn test_url_join() {
        let client =
            NetworkHttpClient::new(&ClientConfig::new("http://localhost:8080/api/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(
            client.url("/affiliates/4/stats"),
            "http://localhost:8080/api/affiliates/4/stats"
        );
        assert_eq!(client.url("affiliates/4"), "http://localhost:8080/api/affiliates/4");
    }

    #[test]
    fn test_bearer_header_from_config() {
        let config = ClientConfig::new("http://localhost").with_token("abc");
        let client = NetworkHttpClient::new(&config).unwrap();
        assert_eq!(client.auth_header().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn test_error_from_structured_body() {
        let body = r#"{"code":3002,"message":"Affiliate code cannot be changed"}"#;
        match error_from_body(StatusCode::UNPROCESSABLE_ENTITY, body.to_string()) {
            ClientError::Api { code, message, .. } => {
                assert_eq!(code, ErrorCode::AffiliateCodeImmutable);
                assert_eq!(message, "Affiliate code cannot be changed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_unknown_code_uses_status() {
        let body = r#"{"code":65000,"message":"nope"}"#;
        match error_from_body(StatusCode::FORBIDDEN, body.to_string()) {
            ClientError::Api { code, .. } => assert_eq!(code, ErrorCode::PermissionDenied),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_from_plain_body() {
        assert!(matches!(
            error_from_body(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            error_from_body(StatusCode::NOT_FOUND, "missing".to_string()),
            ClientError::NotFound(m) if m == "missing"
        ));
        assert!(matches!(
            error_from_body(StatusCode::BAD_GATEWAY, "upstream down".to_string()),
            ClientError::Internal(_)
        ));
    }

    #[test]
    fn test_decode_bare_payload() {
        let stats: AffiliateStats =
            decode_body(r#"{"totalSales":3,"totalRevenue":100.5}"#).unwrap();
        assert_eq!(stats.total_sales, 3);
        assert_eq!(stats.total_revenue, 100.5);
    }

    #[test]
    fn test_decode_envelope_payload() {
        let stats: AffiliateStats =
            decode_body(r#"{"code":0,"message":"OK","data":{"totalSales":5}}"#).unwrap();
        assert_eq!(stats.total_sales, 5);
    }

    #[test]
    fn test_decode_envelope_error() {
        let result: ClientResult<AffiliateStats> =
            decode_body(r#"{"code":3001,"message":"Affiliate not found"}"#);
        match result {
            Err(ClientError::Api { code, .. }) => assert_eq!(code, ErrorCode::AffiliateNotFound),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_decode_envelope_without_data() {
        let result: ClientResult<AffiliateStats> = decode_body(r#"{"code":0,"message":"OK"}"#);
        assert!(matches!(result, Err(ClientError::InvalidResponse(_))));

        let unit: ClientResult<()> = decode_body(r#"{"code":0,"message":"OK"}"#);
        assert!(unit.is_ok());
    }
}
