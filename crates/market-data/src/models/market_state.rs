use std::fmt;

use serde::{Deserialize, Serialize};

/// Trading state reported for a security's market.
///
/// Upstream sends free-form labels; `OPEN` and `CLOSED` are recognised in any
/// case and everything else is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MarketState {
    Open,
    Closed,
    Other(String),
}

impl MarketState {
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for MarketState {
    fn from(label: String) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("open") {
            Self::Open
        } else if trimmed.eq_ignore_ascii_case("closed") {
            Self::Closed
        } else {
            Self::Other(label)
        }
    }
}

impl From<MarketState> for String {
    fn from(state: MarketState) -> Self {
        match state {
            MarketState::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MarketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
