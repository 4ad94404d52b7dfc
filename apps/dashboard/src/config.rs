use std::time::Duration;

use market_search_core::{SearchConfig, SearchError};
use market_search_data::TradingEconomicsConfig;
use market_search_data::provider::trading_economics::DEFAULT_BASE_URL;

const DEFAULT_QUERY: &str = "sweden";
const DEFAULT_PLACEHOLDER: &str = "Search countries...";
const DEFAULT_DEBOUNCE_MS: i64 = 300;
const DEFAULT_TIMEOUT_MS: u64 = 30000;

pub struct Config {
    pub provider: TradingEconomicsConfig,
    pub search: SearchConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, SearchError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    ///
    /// Only `MS_DEBOUNCE_MS` is validated; a malformed timeout falls back to
    /// the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SearchError> {
        let base_url = lookup("MS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = lookup("MS_API_KEY").filter(|key| !key.trim().is_empty());
        let timeout_ms: u64 = lookup("MS_REQUEST_TIMEOUT_MS")
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let debounce_ms = match lookup("MS_DEBOUNCE_MS") {
            Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
                SearchError::InvalidConfig(format!("MS_DEBOUNCE_MS is not a number: '{}'", raw))
            })?,
            None => DEFAULT_DEBOUNCE_MS,
        };

        // An explicitly empty MS_DEFAULT_QUERY starts with an empty panel.
        let default_query = lookup("MS_DEFAULT_QUERY").unwrap_or_else(|| DEFAULT_QUERY.into());
        let placeholder =
            lookup("MS_PLACEHOLDER").unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

        let mut search = SearchConfig::default()
            .with_debounce_millis(debounce_ms)?
            .with_placeholder(placeholder);
        if !default_query.is_empty() {
            search = search.with_default_query(default_query);
        }

        Ok(Self {
            provider: TradingEconomicsConfig {
                base_url,
                api_key,
                timeout: Duration::from_millis(timeout_ms),
            },
            search,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key: &str| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.provider.base_url, DEFAULT_BASE_URL);
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.provider.timeout, Duration::from_secs(30));
        assert_eq!(config.search.debounce_delay, Duration::from_millis(300));
        assert_eq!(config.search.default_query.as_deref(), Some("sweden"));
        assert_eq!(config.search.placeholder, "Search countries...");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("MS_BASE_URL", "http://localhost:8080"),
            ("MS_API_KEY", "guest:guest"),
            ("MS_DEBOUNCE_MS", "0"),
            ("MS_DEFAULT_QUERY", ""),
            ("MS_REQUEST_TIMEOUT_MS", "1500"),
        ]))
        .unwrap();
        assert_eq!(config.provider.base_url, "http://localhost:8080");
        assert_eq!(config.provider.api_key.as_deref(), Some("guest:guest"));
        assert_eq!(config.provider.timeout, Duration::from_millis(1500));
        assert_eq!(config.search.debounce_delay, Duration::ZERO);
        assert!(config.search.default_query.is_none());
    }

    #[test]
    fn test_negative_debounce_rejected() {
        let result = Config::from_lookup(lookup(&[("MS_DEBOUNCE_MS", "-5")]));
        assert!(matches!(result, Err(SearchError::InvalidDebounceDelay(-5))));
    }

    #[test]
    fn test_malformed_debounce_rejected() {
        let result = Config::from_lookup(lookup(&[("MS_DEBOUNCE_MS", "soon")]));
        assert!(matches!(result, Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn test_blank_api_key_ignored() {
        let config = Config::from_lookup(lookup(&[("MS_API_KEY", "  ")])).unwrap();
        assert!(config.provider.api_key.is_none());
    }
}
