//! Diagnostics collaborator for failed searches.
//!
//! Failed fetches are never propagated to the presentation layer. The
//! coordinator resolves them to an empty result set and hands the failure to
//! an [`ErrorSink`].

use market_search_data::FailureKind;
use tracing::{error, warn};

use crate::coordinator::FetchFailure;

pub trait ErrorSink: Send + Sync {
    fn report(&self, failure: &FetchFailure);
}

/// Logs failures through `tracing`.
///
/// Configuration failures (rejected API key) are logged at `error` since every
/// later search will fail the same way; everything else is a `warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn report(&self, failure: &FetchFailure) {
        match failure.error.kind() {
            FailureKind::Configuration => error!(
                "Search {} for '{}' failed: {}",
                failure.token, failure.query, failure.error
            ),
            FailureKind::Transient | FailureKind::Upstream => warn!(
                "Search {} for '{}' failed: {}",
                failure.token, failure.query, failure.error
            ),
        }
    }
}
