//! Security record returned by a market search.

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::market_state::MarketState;

/// One listed security from a market search.
///
/// Field names follow the upstream payload. Every field is optional: the
/// search pipeline never validates payload shape, and renderers show whatever
/// is present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Security {
    /// Company name (e.g., "Volvo")
    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    /// Provider symbol (e.g., "VOLVB:SS")
    #[serde(rename = "Symbol", default)]
    pub symbol: Option<String>,

    /// Trading state of the listing market
    #[serde(rename = "state", default)]
    pub state: Option<MarketState>,

    /// Last traded price
    #[serde(rename = "Last", default)]
    pub last: Option<Decimal>,

    /// Price currency (e.g., "SEK")
    #[serde(rename = "unit", default)]
    pub unit: Option<String>,

    /// Absolute daily change
    #[serde(rename = "DailyChange", default)]
    pub daily_change: Option<f64>,

    #[serde(rename = "DailyPercentualChange", default)]
    pub daily_percent_change: Option<f64>,

    #[serde(rename = "WeeklyPercentualChange", default)]
    pub weekly_percent_change: Option<f64>,

    #[serde(rename = "MonthlyPercentualChange", default)]
    pub monthly_percent_change: Option<f64>,

    #[serde(rename = "YearlyPercentualChange", default)]
    pub yearly_percent_change: Option<f64>,

    /// Market capitalization in price currency
    #[serde(rename = "MarketCap", default)]
    pub market_cap: Option<Decimal>,

    #[serde(rename = "day_low", default)]
    pub day_low: Option<Decimal>,

    #[serde(rename = "day_high", default)]
    pub day_high: Option<Decimal>,

    /// Time of the last upstream update (exchange local, no offset)
    #[serde(
        rename = "LastUpdate",
        default,
        deserialize_with = "deserialize_last_update"
    )]
    pub last_update: Option<NaiveDateTime>,

    /// Listing country (e.g., "Sweden")
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
}

impl Security {
    /// Create a record with a name and symbol; everything else is empty.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            symbol: Some(symbol.into()),
            ..Self::default()
        }
    }

    /// Set the listing country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the last price and its currency.
    pub fn with_last(mut self, last: Decimal, unit: impl Into<String>) -> Self {
        self.last = Some(last);
        self.unit = Some(unit.into());
        self
    }

    /// Set the market capitalization.
    pub fn with_market_cap(mut self, market_cap: Decimal) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    /// Set the yearly percent change.
    pub fn with_yearly_percent_change(mut self, change: f64) -> Self {
        self.yearly_percent_change = Some(change);
        self
    }
}

const LAST_UPDATE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses `LastUpdate` leniently; unparseable timestamps become `None`.
fn deserialize_last_update<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_last_update))
}

pub(crate) fn parse_last_update(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    LAST_UPDATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|parsed| parsed.naive_utc())
        })
}
