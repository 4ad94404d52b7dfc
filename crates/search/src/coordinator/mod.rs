//! Search coordinator.
//!
//! Owns the query text, the debounce window, the request token counter, the
//! accepted result set and the loading flag. Every transition goes through
//! [`SearchCoordinator::update`], which returns the [`Command`]s the driver must
//! execute; the coordinator itself never sleeps, spawns or performs I/O.
//!
//! Ordering is last-write-wins by token: a response is applied only while its
//! token is current, regardless of the order in which responses arrive.

mod message;
mod token;


use std::collections::BTreeSet;
use std::sync::Arc;

use market_search_data::{MarketDataError, Security};
use tokio::time::Instant;
use tracing::debug;

use crate::config::SearchConfig;
use crate::debounce::{Debounced, Debouncer};
use crate::snapshot::SearchSnapshot;

pub use message::{Command, FetchFailure, FetchRequest, SearchMessage};
pub use token::RequestToken;

use token::TokenCounter;

#[derive(Debug)]
pub struct SearchCoordinator {
    query: String,
    default_query: Option<String>,
    debouncer: Debouncer,
    /// Last value emitted by the debouncer (or forced by a clear)
    settled: Option<String>,
    tokens: TokenCounter,
    current: Option<RequestToken>,
    in_flight: BTreeSet<RequestToken>,
    results: Arc<[Security]>,
    is_loading: bool,
    torn_down: bool,
}

impl SearchCoordinator {
    pub fn new(config: &SearchConfig) -> Self {
        let default_query = config.default_query.clone();
        Self {
            query: default_query.clone().unwrap_or_default(),
            default_query,
            debouncer: Debouncer::new(config.debounce_delay),
            settled: None,
            tokens: TokenCounter::default(),
            current: None,
            in_flight: BTreeSet::new(),
            results: Arc::from(Vec::new()),
            is_loading: false,
            torn_down: false,
        }
    }

    /// Settle the initial query immediately, bypassing the debounce window.
    ///
    /// Call once when the component mounts.
    pub fn start(&mut self) -> Vec<Command> {
        let initial = self.default_query.clone().unwrap_or_default();
        self.query = initial.clone();
        self.on_query_change(initial)
    }

    /// Message-passing entry point.
    pub fn update(&mut self, message: SearchMessage) -> Vec<Command> {
        match message {
            SearchMessage::InputChanged { value, at } => self.on_input_changed(value, at),
            SearchMessage::DebounceElapsed { at } => self.on_debounce_elapsed(at),
            SearchMessage::Cleared => self.on_clear(),
            SearchMessage::RequestIssued(token) => {
                self.on_request_issued(token);
                Vec::new()
            }
            SearchMessage::RequestResolved { token, outcome } => {
                self.on_fetch_resolved(token, outcome)
            }
            SearchMessage::Teardown => self.teardown(),
        }
    }

    /// Record a keystroke and feed it to the debounce window.
    ///
    /// A keystroke while a request is loading preempts it: its token is
    /// retired so the late response is ignored, and the settled value is
    /// forgotten so settling the same text again issues a fresh fetch.
    pub fn on_input_changed(&mut self, value: String, at: Instant) -> Vec<Command> {
        if self.torn_down {
            return Vec::new();
        }

        if self.is_loading {
            if let Some(token) = self.current.take() {
                debug!("Keystroke preempts in-flight search {}", token);
            }
            self.settled = None;
            self.is_loading = false;
        }

        self.query = value.clone();
        match self.debouncer.push(value, at) {
            Debounced::Settled(settled) => self.on_query_change(settled),
            Debounced::Scheduled(deadline) => vec![Command::ArmTimer(deadline)],
        }
    }

    /// The debounce timer fired; settle the pending value if its window elapsed.
    pub fn on_debounce_elapsed(&mut self, at: Instant) -> Vec<Command> {
        if self.torn_down {
            return Vec::new();
        }

        match self.debouncer.poll(at) {
            Some(settled) => self.on_query_change(settled),
            None => self
                .debouncer
                .deadline()
                .map(Command::ArmTimer)
                .into_iter()
                .collect(),
        }
    }

    /// Handle a settled query.
    ///
    /// Every change of the settled value mints a new token, retiring whatever
    /// request was in flight. Blank queries clear the results without a fetch.
    pub fn on_query_change(&mut self, settled: String) -> Vec<Command> {
        if self.torn_down {
            return Vec::new();
        }

        if self.settled.as_deref() == Some(settled.as_str()) {
            debug!("Settled query unchanged ('{}'), nothing to do", settled);
            return Vec::new();
        }

        let token = self.tokens.mint();
        self.current = Some(token);
        self.settled = Some(settled.clone());

        if settled.trim().is_empty() {
            debug!("Blank query settled, clearing results ({})", token);
            self.results = Arc::from(Vec::new());
            self.is_loading = false;
            return Vec::new();
        }

        debug!("Issuing search {} for '{}'", token, settled);
        self.is_loading = true;
        vec![Command::Fetch(FetchRequest {
            token,
            query: settled,
        })]
    }

    /// Clear button or Escape: empty the query and results synchronously.
    ///
    /// Discards any pending debounce window so the previous text never settles.
    pub fn on_clear(&mut self) -> Vec<Command> {
        if self.torn_down {
            return Vec::new();
        }

        self.query.clear();
        let had_pending = self.debouncer.reset();

        let token = self.tokens.mint();
        self.current = Some(token);
        self.settled = Some(String::new());
        self.results = Arc::from(Vec::new());
        self.is_loading = false;
        debug!("Search cleared ({})", token);

        if had_pending {
            vec![Command::DisarmTimer]
        } else {
            Vec::new()
        }
    }

    pub fn on_request_issued(&mut self, token: RequestToken) {
        if !self.torn_down {
            self.in_flight.insert(token);
        }
    }

    /// Reconcile a completed fetch.
    ///
    /// Stale tokens are dropped without touching the loading flag, since a
    /// newer request already owns it.
    pub fn on_fetch_resolved(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<Security>, MarketDataError>,
    ) -> Vec<Command> {
        self.in_flight.remove(&token);

        if self.torn_down || self.current != Some(token) {
            debug!("Dropping stale search response {}", token);
            return Vec::new();
        }

        self.is_loading = false;
        match outcome {
            Ok(payload) => {
                self.results = Arc::from(without_trailing_record(payload));
                debug!(
                    "Search {} accepted with {} result(s)",
                    token,
                    self.results.len()
                );
                Vec::new()
            }
            Err(error) => {
                self.results = Arc::from(Vec::new());
                vec![Command::ReportError(FetchFailure {
                    token,
                    query: self.settled.clone().unwrap_or_default(),
                    error,
                })]
            }
        }
    }

    /// Release the timer and make every outstanding token permanently stale.
    pub fn teardown(&mut self) -> Vec<Command> {
        if self.torn_down {
            return Vec::new();
        }

        self.torn_down = true;
        self.current = None;
        self.in_flight.clear();
        self.is_loading = false;
        self.debouncer.reset();
        vec![Command::DisarmTimer]
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            query: self.query.clone(),
            is_loading: self.is_loading,
            results: Arc::clone(&self.results),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn results(&self) -> &[Security] {
        &self.results
    }

    pub fn current_token(&self) -> Option<RequestToken> {
        self.current
    }

    /// Fetches handed to the provider that have not resolved yet, stale ones included.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_debouncing(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

/// The search endpoint always appends one trailing record that is not a
/// listed security; it is dropped before results are stored.
fn without_trailing_record(mut payload: Vec<Security>) -> Vec<Security> {
    payload.pop();
    payload
}
