use std::sync::Arc;

use market_search_data::Security;

/// State published to the presentation layer after every coordinator update.
///
/// Read-only from the outside; the presentation layer only emits events.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSnapshot {
    /// Raw text currently in the input control
    pub query: String,
    pub is_loading: bool,
    /// Results of the last accepted response
    pub results: Arc<[Security]>,
}

impl SearchSnapshot {
    pub fn empty() -> Self {
        Self {
            query: String::new(),
            is_loading: false,
            results: Arc::from(Vec::new()),
        }
    }
}
