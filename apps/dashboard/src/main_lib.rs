use std::sync::Arc;

use market_search_core::{SearchHandle, SearchRuntime, TracingErrorSink};
use market_search_data::{SecuritySearchProvider, TradingEconomicsProvider};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub fn init_tracing() {
    let log_format = std::env::var("MS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr so they do not interleave with the rendered panel.
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn start_search(config: &Config) -> SearchHandle {
    let provider: Arc<dyn SecuritySearchProvider> =
        Arc::new(TradingEconomicsProvider::new(config.provider.clone()));
    tracing::info!("Search provider: {}", config.provider.base_url);
    SearchRuntime::spawn(provider, Arc::new(TracingErrorSink), &config.search)
}
