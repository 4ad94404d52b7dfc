//! Search provider abstractions and implementations.
//!
//! This module contains:
//! - The `SecuritySearchProvider` trait that all providers implement
//! - The Trading Economics provider, configured through `TradingEconomicsConfig`

mod traits;

pub mod trading_economics;

// Re-exports
pub use traits::SecuritySearchProvider;
