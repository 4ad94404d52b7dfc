//! Trading Economics market search provider implementation.
//!
//! Uses the `/markets/search/{term}` endpoint, which returns every security
//! listed on the markets matching the term (e.g., all Swedish stocks for
//! "sweden").
//!
//! The API key, when configured, is sent verbatim in the `Authorization`
//! header. API documentation: https://docs.tradingeconomics.com

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::Security;
use crate::provider::SecuritySearchProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.tradingeconomics.com";
const PROVIDER_ID: &str = "TRADING_ECONOMICS";
const SEARCH_PATH: &str = "/markets/search";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`TradingEconomicsProvider`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TradingEconomicsConfig {
    /// API root, without a trailing path (e.g., "https://api.tradingeconomics.com")
    pub base_url: String,

    /// API key sent as the `Authorization` header; omitted when `None`
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Per-request timeout enforced by the HTTP client
    #[serde(with = "timeout_millis")]
    pub timeout: Duration,
}

impl Default for TradingEconomicsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

mod timeout_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

// ============================================================================
// TradingEconomicsProvider
// ============================================================================

/// Trading Economics securities search provider.
pub struct TradingEconomicsProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl TradingEconomicsProvider {
    /// Create a new provider from connection settings.
    pub fn new(config: TradingEconomicsConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        let api_key = config
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Build the search URL for a query, percent-encoding it as one path segment.
    fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            SEARCH_PATH,
            urlencoding::encode(query)
        )
    }

    /// Make a GET request and return the body of a successful response.
    async fn fetch(&self, url: &str) -> Result<String, MarketDataError> {
        let mut request = self.client.get(url);

        if let Some(api_key) = &self.api_key {
            request = request.header(AUTHORIZATION, api_key);
        }

        debug!("Trading Economics request: {}", url);

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(MarketDataError::Unauthorized {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body.trim()),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })
    }
}

/// Decode a `/markets/search` body. A `null` body is an empty result.
fn parse_search_response(body: &str) -> Result<Vec<Security>, MarketDataError> {
    let parsed: Option<Vec<Security>> =
        serde_json::from_str(body).map_err(|e| MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;

    Ok(parsed.unwrap_or_default())
}

#[async_trait]
impl SecuritySearchProvider for TradingEconomicsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn search(&self, query: &str) -> Result<Vec<Security>, MarketDataError> {
        let url = self.search_url(query);
        let body = self.fetch(&url).await?;
        let securities = parse_search_response(&body)?;

        debug!(
            "Trading Economics returned {} record(s) for '{}'",
            securities.len(),
            query
        );

        Ok(securities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with(base_url: &str, api_key: Option<&str>) -> TradingEconomicsProvider {
        TradingEconomicsProvider::new(TradingEconomicsConfig {
            base_url: base_url.to_string(),
            api_key: api_key.map(str::to_string),
            timeout: Duration::from_secs(1),
        })
    }

    #[test]
    fn test_provider_id() {
        let provider = TradingEconomicsProvider::new(TradingEconomicsConfig::default());
        assert_eq!(provider.id(), "TRADING_ECONOMICS");
    }

    #[test]
    fn test_search_url() {
        let provider = provider_with("https://api.example.com", None);
        assert_eq!(
            provider.search_url("sweden"),
            "https://api.example.com/markets/search/sweden"
        );
    }

    #[test]
    fn test_search_url_strips_trailing_slash() {
        let provider = provider_with("https://api.example.com/ ", None);
        assert_eq!(
            provider.search_url("norway"),
            "https://api.example.com/markets/search/norway"
        );
    }

    #[test]
    fn test_search_url_encodes_query_as_single_segment() {
        let provider = provider_with("https://api.example.com", None);
        assert_eq!(
            provider.search_url("united states/x"),
            "https://api.example.com/markets/search/united%20states%2Fx"
        );
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let provider = provider_with("https://api.example.com", Some("   "));
        assert!(provider.api_key.is_none());

        let provider = provider_with("https://api.example.com", Some(" guest:guest "));
        assert_eq!(provider.api_key.as_deref(), Some("guest:guest"));
    }

    #[test]
    fn test_parse_search_response_keeps_order() {
        let body = r#"[
            {"Name": "Volvo", "Symbol": "VOLVB:SS"},
            {"Name": "Ericsson", "Symbol": "ERICB:SS"},
            {"Name": "Sweden Stock Market", "Symbol": "OMX:IND"}
        ]"#;

        let securities = parse_search_response(body).unwrap();
        let symbols: Vec<_> = securities
            .iter()
            .map(|s| s.symbol.as_deref().unwrap())
            .collect();
        assert_eq!(symbols, vec!["VOLVB:SS", "ERICB:SS", "OMX:IND"]);
    }

    #[test]
    fn test_parse_search_response_null_is_empty() {
        assert!(parse_search_response("null").unwrap().is_empty());
    }

    #[test]
    fn test_parse_search_response_rejects_garbage() {
        let err = parse_search_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidResponse { .. }));
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: TradingEconomicsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
    }

    #[tokio::test]
    async fn test_search_against_closed_port_rejects() {
        let provider = provider_with("http://127.0.0.1:9", None);
        let result = provider.search("sweden").await;
        assert!(result.is_err());
    }
}
