//! Market Search Data Crate
//!
//! This crate provides the securities search collaborator used by the
//! dashboard's search coordinator.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +---------------------------+     +------------+
//! | search term      | --> |  SecuritySearchProvider   | --> | Security[] |
//! | ("sweden")       |     |  (Trading Economics, ...) |     |            |
//! +------------------+     +---------------------------+     +------------+
//! ```
//!
//! # Core Types
//!
//! - [`Security`] - One listed security with price, changes and market cap
//! - [`MarketState`] - Trading state of a security's market
//! - [`SecuritySearchProvider`] - Async search abstraction
//! - [`TradingEconomicsProvider`] - HTTP implementation against Trading Economics
//! - [`MarketDataError`] - Rejection reasons for a search

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{FailureKind, MarketDataError};
pub use models::{MarketState, Security};
pub use provider::trading_economics::{TradingEconomicsConfig, TradingEconomicsProvider};
pub use provider::SecuritySearchProvider;
