//! Read-only view model derived from a [`SearchSnapshot`].
//!
//! The presentation layer renders these; it never reaches into the
//! coordinator directly.

use std::sync::Arc;

use chrono::NaiveDateTime;
use market_search_data::Security;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::SearchConfig;
use crate::snapshot::SearchSnapshot;

/// The three states of the results panel.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelView {
    /// A current request is outstanding. Takes precedence over stale results.
    Loading,
    Empty,
    Populated {
        securities: Arc<[Security]>,
        summary: PanelSummary,
    },
}

impl PanelView {
    pub fn from_snapshot(snapshot: &SearchSnapshot) -> Self {
        if snapshot.is_loading {
            PanelView::Loading
        } else if snapshot.results.is_empty() {
            PanelView::Empty
        } else {
            PanelView::Populated {
                summary: PanelSummary::from_securities(&snapshot.results),
                securities: Arc::clone(&snapshot.results),
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PanelView::Loading)
    }
}

/// Headline figures shown above the result list.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSummary {
    pub count: usize,
    /// Sum of the market caps that were reported; missing values count as zero
    pub total_market_cap: Decimal,
    pub average_yearly_change: Option<f64>,
    pub country: Option<String>,
    pub last_update: Option<NaiveDateTime>,
}

impl PanelSummary {
    pub fn from_securities(securities: &[Security]) -> Self {
        let total_market_cap = securities
            .iter()
            .filter_map(|s| s.market_cap)
            .sum::<Decimal>();

        let yearly: Vec<f64> = securities
            .iter()
            .filter_map(|s| s.yearly_percent_change)
            .collect();
        let average_yearly_change = if yearly.is_empty() {
            None
        } else {
            Some(yearly.iter().sum::<f64>() / yearly.len() as f64)
        };

        let headline = securities.first();

        Self {
            count: securities.len(),
            total_market_cap,
            average_yearly_change,
            country: headline.and_then(|s| s.country.clone()),
            last_update: headline.and_then(|s| s.last_update),
        }
    }
}

/// Direction marker for a percentage change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

/// State of the search input control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputView {
    pub value: String,
    pub placeholder: String,
    pub show_spinner: bool,
    pub show_clear_button: bool,
    pub auto_focus: bool,
    pub disabled: bool,
}

impl InputView {
    pub fn new(config: &SearchConfig, snapshot: &SearchSnapshot) -> Self {
        Self {
            value: snapshot.query.clone(),
            placeholder: config.placeholder.clone(),
            show_spinner: snapshot.is_loading,
            show_clear_button: config.show_clear_button
                && !snapshot.query.is_empty()
                && !snapshot.is_loading,
            auto_focus: config.auto_focus,
            disabled: config.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn snapshot(query: &str, is_loading: bool, results: Vec<Security>) -> SearchSnapshot {
        SearchSnapshot {
            query: query.to_string(),
            is_loading,
            results: Arc::from(results),
        }
    }

    fn securities() -> Vec<Security> {
        vec![
            Security::new("Volvo", "VOLVB:SS")
                .with_country("Sweden")
                .with_market_cap(dec!(40000000000))
                .with_yearly_percent_change(12.5),
            Security::new("SEB", "SEBA:SS")
                .with_country("Sweden")
                .with_market_cap(dec!(25000000000))
                .with_yearly_percent_change(-2.5),
            Security::new("Unknown", "UNK:SS"),
        ]
    }

    #[test]
    fn test_loading_takes_precedence_over_results() {
        let view = PanelView::from_snapshot(&snapshot("sweden", true, securities()));
        assert!(view.is_loading());
    }

    #[test]
    fn test_empty_when_idle_without_results() {
        let view = PanelView::from_snapshot(&snapshot("", false, Vec::new()));
        assert_eq!(view, PanelView::Empty);
    }

    #[test]
    fn test_populated_carries_results_and_summary() {
        let view = PanelView::from_snapshot(&snapshot("sweden", false, securities()));
        match view {
            PanelView::Populated { securities, summary } => {
                assert_eq!(securities.len(), 3);
                assert_eq!(summary.count, 3);
            }
            other => panic!("Expected populated panel, got {:?}", other),
        }
    }

    #[test]
    fn test_summary_statistics() {
        let summary = PanelSummary::from_securities(&securities());
        assert_eq!(summary.total_market_cap, dec!(65000000000));
        assert_eq!(summary.average_yearly_change, Some(5.0));
        assert_eq!(summary.country.as_deref(), Some("Sweden"));
        assert!(summary.last_update.is_none());
    }

    #[test]
    fn test_summary_of_empty_set() {
        let summary = PanelSummary::from_securities(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_market_cap, Decimal::ZERO);
        assert!(summary.average_yearly_change.is_none());
        assert!(summary.country.is_none());
    }

    #[test]
    fn test_trend() {
        assert_eq!(Trend::of(0.0), Trend::Up);
        assert_eq!(Trend::of(1.3), Trend::Up);
        assert_eq!(Trend::of(-0.01), Trend::Down);
    }

    #[test]
    fn test_input_view_clear_button_visibility() {
        let config = SearchConfig::default();

        let typing = InputView::new(&config, &snapshot("swe", false, Vec::new()));
        assert!(typing.show_clear_button);
        assert!(!typing.show_spinner);

        let loading = InputView::new(&config, &snapshot("swe", true, Vec::new()));
        assert!(!loading.show_clear_button);
        assert!(loading.show_spinner);

        let empty = InputView::new(&config, &snapshot("", false, Vec::new()));
        assert!(!empty.show_clear_button);

        let mut hidden = config.clone();
        hidden.show_clear_button = false;
        let disabled = InputView::new(&hidden, &snapshot("swe", false, Vec::new()));
        assert!(!disabled.show_clear_button);
    }

    #[test]
    fn test_input_view_passes_flags_through() {
        let mut config = SearchConfig::default()
            .with_placeholder("Search countries...")
            .with_auto_focus(true);
        config.disabled = true;

        let view = InputView::new(&config, &SearchSnapshot::empty());
        assert_eq!(view.placeholder, "Search countries...");
        assert!(view.auto_focus);
        assert!(view.disabled);
    }
}
