//! Plain-text rendering of the search input and results panel.

use market_search_core::{InputView, PanelSummary, PanelView, Trend};
use market_search_data::{MarketState, Security};
use rust_decimal::{Decimal, RoundingStrategy};

const BILLION: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);
const SKELETON_ROWS: usize = 3;

pub fn render_input(view: &InputView) -> String {
    let text = if view.value.is_empty() {
        format!("[{}]", view.placeholder)
    } else {
        format!("[{}]", view.value)
    };

    let mut line = format!("🔍 {}", text);
    if view.show_spinner {
        line.push_str(" …");
    }
    if view.show_clear_button {
        line.push_str(" (:clear)");
    }
    if view.disabled {
        line.push_str(" (disabled)");
    }
    line
}

pub fn render_panel(view: &PanelView) -> String {
    match view {
        PanelView::Loading => std::iter::repeat("  ░░░░░░░░░░  ░░░░░  ░░░░░░")
            .take(SKELETON_ROWS)
            .collect::<Vec<_>>()
            .join("\n"),
        PanelView::Empty => "  No results found".to_string(),
        PanelView::Populated {
            securities,
            summary,
        } => {
            let mut lines = vec![render_summary(summary)];
            lines.extend(securities.iter().map(render_card));
            lines.join("\n")
        }
    }
}

fn render_summary(summary: &PanelSummary) -> String {
    let mut line = format!(
        "  {} securities | market cap {}",
        summary.count,
        format_market_cap(summary.total_market_cap)
    );
    if let Some(change) = summary.average_yearly_change {
        line.push_str(&format!(" | avg yearly {}", format_change(change)));
    }
    if let Some(country) = &summary.country {
        line.push_str(&format!(" | {}", country));
    }
    if let Some(updated) = summary.last_update {
        line.push_str(&format!(" | updated {}", updated.format("%Y-%m-%d %H:%M")));
    }
    line
}

/// One card per security: header, price line, key figures, period changes.
fn render_card(security: &Security) -> String {
    let name = security.name.as_deref().unwrap_or("-");
    let symbol = security.symbol.as_deref().unwrap_or("-");
    let unit = security.unit.as_deref();

    let mut header = format!("  {} ({})", name, symbol);
    if let Some(state) = &security.state {
        header.push(' ');
        header.push_str(&state_badge(state));
    }

    let last = security
        .last
        .map(|last| format_price(last, unit))
        .unwrap_or_else(|| "-".to_string());
    let price = match security.daily_percent_change {
        Some(percent) => {
            // Direction follows the daily price change when reported.
            let trend = Trend::of(security.daily_change.unwrap_or(percent));
            format!("    {}  {} {:.2}%", last, trend.arrow(), percent.abs())
        }
        None => format!("    {}", last),
    };

    let market_cap = security
        .market_cap
        .map(format_market_cap)
        .unwrap_or_else(|| "-".to_string());
    let day_range = match (security.day_low, security.day_high) {
        (Some(low), Some(high)) => {
            format!("{} - {}", format_price(low, unit), format_price(high, unit))
        }
        _ => "-".to_string(),
    };
    let figures = format!("    Market cap {} | Day range {}", market_cap, day_range);

    let periods = format!(
        "    Weekly {} | Monthly {} | Yearly {}",
        format_optional_change(security.weekly_percent_change),
        format_optional_change(security.monthly_percent_change),
        format_optional_change(security.yearly_percent_change),
    );

    [header, price, figures, periods].join("\n")
}

/// Closed markets get a muted badge.
fn state_badge(state: &MarketState) -> String {
    if state.is_closed() {
        format!("({})", state)
    } else {
        format!("[{}]", state)
    }
}

fn format_optional_change(change: Option<f64>) -> String {
    change.map(format_change).unwrap_or_else(|| "-".to_string())
}

pub fn format_price(value: Decimal, unit: Option<&str>) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    match unit {
        Some(unit) if !unit.is_empty() => format!("{:.2} {}", rounded, unit),
        _ => format!("{:.2}", rounded),
    }
}

/// Market caps are shown in billions.
pub fn format_market_cap(value: Decimal) -> String {
    let billions =
        (value / BILLION).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}B", billions)
}

pub fn format_change(change: f64) -> String {
    format!("{} {:.2}%", Trend::of(change).arrow(), change.abs())
}
