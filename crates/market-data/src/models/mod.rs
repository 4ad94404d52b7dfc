//! Market search models
//!
//! - `security` - One listed security as returned by a market search (Security)
//! - `market_state` - Trading state label of a security's market (MarketState)

mod market_state;
mod security;

pub use market_state::MarketState;
pub use security::Security;
