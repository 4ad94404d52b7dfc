//! Error types for the market search data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum for every fetch made by a search provider
//! - [`FailureKind`]: A coarse classification used when reporting failures

mod kind;

pub use kind::FailureKind;

use thiserror::Error;

/// Errors that can occur while searching for securities.
///
/// Providers must reject with one of these variants instead of resolving with an
/// error payload; callers treat every variant as "no results".
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider rejected the credentials (HTTP 401 / 403).
    #[error("Unauthorized: {provider}")]
    Unauthorized {
        /// The provider that rejected the request
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered with a body that could not be decoded.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that returned the body
        provider: String,
        /// Decoder message
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use market_search_data::errors::{FailureKind, MarketDataError};
    ///
    /// let error = MarketDataError::RateLimited { provider: "TRADING_ECONOMICS".to_string() };
    /// assert_eq!(error.kind(), FailureKind::Transient);
    ///
    /// let error = MarketDataError::Unauthorized { provider: "TRADING_ECONOMICS".to_string() };
    /// assert_eq!(error.kind(), FailureKind::Configuration);
    /// ```
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::RateLimited { .. } | Self::Timeout { .. } | Self::Network(_) => {
                FailureKind::Transient
            }
            Self::Unauthorized { .. } => FailureKind::Configuration,
            Self::ProviderError { .. } | Self::InvalidResponse { .. } => FailureKind::Upstream,
        }
    }
}
