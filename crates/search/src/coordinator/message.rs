use market_search_data::{MarketDataError, Security};
use tokio::time::Instant;

use super::token::RequestToken;

/// Inputs consumed by [`SearchCoordinator::update`](super::SearchCoordinator::update).
#[derive(Debug)]
pub enum SearchMessage {
    /// Raw text of the input control after a keystroke.
    InputChanged { value: String, at: Instant },
    /// The armed debounce timer fired.
    DebounceElapsed { at: Instant },
    /// Clear button or Escape key.
    Cleared,
    /// The fetch for `token` has been handed to the provider.
    RequestIssued(RequestToken),
    /// The fetch for `token` completed.
    RequestResolved {
        token: RequestToken,
        outcome: Result<Vec<Security>, MarketDataError>,
    },
    /// The owning component is going away.
    Teardown,
}

/// Side effects requested by the coordinator. The driver executes them in order.
#[derive(Debug)]
pub enum Command {
    /// (Re)arm the single debounce timer for this deadline.
    ArmTimer(Instant),
    DisarmTimer,
    Fetch(FetchRequest),
    /// Forward a failed current fetch to the diagnostics sink.
    ReportError(FetchFailure),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub query: String,
}

#[derive(Debug)]
pub struct FetchFailure {
    pub token: RequestToken,
    pub query: String,
    pub error: MarketDataError,
}
