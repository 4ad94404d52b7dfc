//! Market Search Core
//!
//! Turns raw keystrokes from a search box into a single, race-free search
//! request and reconciles the response with the results panel.
//!
//! # Architecture
//!
//! ```text
//! presentation ──SearchEvent──► SearchRuntime ──update()──► SearchCoordinator
//!      ▲                             │                         │
//!      │                             │◄────── Vec<Command> ─────┘
//!      │                             ├── ArmTimer/DisarmTimer → debounce sleep
//!      │                             ├── Fetch → SecuritySearchProvider (JoinSet)
//!      │                             └── ReportError → ErrorSink
//!      └──────── watch<SearchSnapshot> ◄─ publish after every update
//! ```
//!
//! The [`SearchCoordinator`] is a plain state object: it is driven by explicit
//! messages carrying explicit instants, which keeps it deterministic under
//! test. [`SearchRuntime`] is the tokio driver that executes its commands.

pub mod config;
pub mod coordinator;
pub mod debounce;
pub mod diagnostics;
pub mod errors;
pub mod runtime;
pub mod snapshot;
pub mod view;

pub use config::{SearchConfig, DEFAULT_DEBOUNCE_DELAY, DEFAULT_PLACEHOLDER};
pub use coordinator::{
    Command, FetchFailure, FetchRequest, RequestToken, SearchCoordinator, SearchMessage,
};
pub use debounce::{Debounced, Debouncer};
pub use diagnostics::{ErrorSink, TracingErrorSink};
pub use errors::{Result, SearchError};
pub use runtime::{SearchEvent, SearchHandle, SearchRuntime};
pub use snapshot::SearchSnapshot;
pub use view::{InputView, PanelSummary, PanelView, Trend};
