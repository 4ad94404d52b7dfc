//! Error types for the search core.
//!
//! Fetch failures never surface here: they are resolved to an empty result
//! set and handed to an [`ErrorSink`](crate::ErrorSink). Only configuration
//! problems are reported to callers.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Debounce delays are measured from the last keystroke and cannot be negative.
    #[error("Invalid debounce delay: {0}ms (must be >= 0)")]
    InvalidDebounceDelay(i64),

    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
