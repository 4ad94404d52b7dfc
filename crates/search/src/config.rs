//! Search input configuration.
//!
//! Everything except the debounce delay is passed straight through to the
//! presentation layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SearchError};

/// Default quiet period before a keystroke burst settles.
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Default input placeholder.
pub const DEFAULT_PLACEHOLDER: &str = "Search...";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Quiet period after the last keystroke; zero settles every keystroke
    #[serde(rename = "debounceMs", with = "delay_millis")]
    pub debounce_delay: Duration,

    pub placeholder: String,

    /// Query settled immediately at startup, bypassing the debounce once
    pub default_query: Option<String>,

    pub show_clear_button: bool,
    pub auto_focus: bool,
    pub disabled: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            default_query: None,
            show_clear_button: true,
            auto_focus: false,
            disabled: false,
        }
    }
}

impl SearchConfig {
    /// Set the debounce delay from a signed millisecond count.
    ///
    /// Rejects negative values; this is the only validation the search core
    /// performs on its configuration.
    pub fn with_debounce_millis(mut self, millis: i64) -> Result<Self> {
        self.debounce_delay = delay_from_millis(millis)?;
        Ok(self)
    }

    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    pub fn with_default_query(mut self, query: impl Into<String>) -> Self {
        self.default_query = Some(query.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }
}

pub(crate) fn delay_from_millis(millis: i64) -> Result<Duration> {
    u64::try_from(millis)
        .map(Duration::from_millis)
        .map_err(|_| SearchError::InvalidDebounceDelay(millis))
}

mod delay_millis {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        super::delay_from_millis(millis).map_err(de::Error::custom)
    }
}
