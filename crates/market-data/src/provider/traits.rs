//! Search provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Security;

/// Trait for securities search providers.
///
/// Implement this trait to plug a new data source into the search
/// coordinator. Implementations must reject with a [`MarketDataError`] on any
/// failure rather than resolving with an error payload.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use market_search_data::{MarketDataError, Security, SecuritySearchProvider};
///
/// struct FixedProvider(Vec<Security>);
///
/// #[async_trait]
/// impl SecuritySearchProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn search(&self, _query: &str) -> Result<Vec<Security>, MarketDataError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait SecuritySearchProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "TRADING_ECONOMICS".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Search for the securities listed on the market matching `query`.
    ///
    /// # Arguments
    ///
    /// * `query` - A non-empty search term (e.g., "sweden")
    ///
    /// # Returns
    ///
    /// The raw, ordered payload of the provider. Callers apply their own
    /// post-processing; implementations must not trim or reorder it.
    async fn search(&self, query: &str) -> Result<Vec<Security>, MarketDataError>;
}
