//! Async driver for a [`SearchCoordinator`].
//!
//! One tokio task owns the coordinator. It waits on three sources at once:
//! presentation events, the single debounce timer and completed fetches.
//! Every coordinator update is followed by publishing a [`SearchSnapshot`] on
//! a watch channel, so the presentation layer only ever reads state.
//!
//! Dropping the [`SearchHandle`] aborts the task. The fetch `JoinSet` and the
//! timer are owned by the task, so no callback outlives the coordinator.

use std::collections::{HashMap, VecDeque};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use market_search_data::{MarketDataError, Security, SecuritySearchProvider};
use tokio::sync::{mpsc, watch};
use tokio::task::{self, JoinError, JoinHandle, JoinSet};
use tokio::time::{self, Instant, Sleep};
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::coordinator::{Command, RequestToken, SearchCoordinator, SearchMessage};
use crate::diagnostics::ErrorSink;
use crate::snapshot::SearchSnapshot;

/// Events emitted by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// New raw text of the input control.
    Changed(String),
    /// Clear button.
    Clear,
    /// Escape key; same effect as `Clear`.
    Escape,
    Shutdown,
}

type FetchOutcome = Result<Vec<Security>, MarketDataError>;

/// The single debounce timer. Re-armed in place instead of spawning one task
/// per keystroke.
struct DebounceTimer {
    sleep: Pin<Box<Sleep>>,
    armed: bool,
}

impl DebounceTimer {
    fn new() -> Self {
        Self {
            sleep: Box::pin(time::sleep(Duration::ZERO)),
            armed: false,
        }
    }

    fn arm(&mut self, deadline: Instant) {
        self.sleep.as_mut().reset(deadline);
        self.armed = true;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

pub struct SearchRuntime {
    coordinator: SearchCoordinator,
    provider: Arc<dyn SecuritySearchProvider>,
    sink: Arc<dyn ErrorSink>,
    fetches: JoinSet<FetchOutcome>,
    /// Token of every fetch task still in `fetches`
    tokens: HashMap<task::Id, RequestToken>,
    timer: DebounceTimer,
    publisher: watch::Sender<SearchSnapshot>,
}

impl SearchRuntime {
    /// Start a coordinator task on the current tokio runtime.
    ///
    /// The default query, if any, is settled before this returns, so the first
    /// published snapshot already shows it loading.
    pub fn spawn(
        provider: Arc<dyn SecuritySearchProvider>,
        sink: Arc<dyn ErrorSink>,
        config: &SearchConfig,
    ) -> SearchHandle {
        let mut coordinator = SearchCoordinator::new(config);
        let initial = coordinator.start();

        let (publisher, snapshots) = watch::channel(coordinator.snapshot());
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        info!(
            "Starting search runtime with provider {} (debounce {:?})",
            provider.id(),
            config.debounce_delay
        );

        let runtime = Self {
            coordinator,
            provider,
            sink,
            fetches: JoinSet::new(),
            tokens: HashMap::new(),
            timer: DebounceTimer::new(),
            publisher,
        };
        let task = tokio::spawn(runtime.run(events_rx, initial));

        SearchHandle {
            events: events_tx,
            snapshots,
            task: Some(task),
        }
    }

    async fn run(
        mut self,
        mut events: mpsc::UnboundedReceiver<SearchEvent>,
        initial: Vec<Command>,
    ) {
        self.execute(initial);
        self.publish();

        loop {
            let commands = tokio::select! {
                event = events.recv() => match event {
                    Some(SearchEvent::Changed(value)) => self.coordinator.update(
                        SearchMessage::InputChanged { value, at: Instant::now() },
                    ),
                    Some(SearchEvent::Clear) | Some(SearchEvent::Escape) => {
                        self.coordinator.update(SearchMessage::Cleared)
                    }
                    Some(SearchEvent::Shutdown) | None => break,
                },
                () = &mut self.timer.sleep, if self.timer.armed => {
                    self.timer.armed = false;
                    self.coordinator
                        .update(SearchMessage::DebounceElapsed { at: Instant::now() })
                }
                Some(joined) = self.fetches.join_next_with_id(),
                    if !self.fetches.is_empty() =>
                {
                    self.on_fetch_joined(joined)
                }
            };

            self.execute(commands);
            self.publish();
        }

        let commands = self.coordinator.update(SearchMessage::Teardown);
        self.execute(commands);
        self.fetches.abort_all();
        self.tokens.clear();
        self.publish();
        info!("Search runtime stopped");
    }

    fn execute(&mut self, commands: Vec<Command>) {
        let mut queue: VecDeque<Command> = commands.into();

        while let Some(command) = queue.pop_front() {
            match command {
                Command::ArmTimer(deadline) => self.timer.arm(deadline),
                Command::DisarmTimer => self.timer.disarm(),
                Command::Fetch(request) => {
                    let token = request.token;
                    let provider = Arc::clone(&self.provider);
                    let handle = self
                        .fetches
                        .spawn(async move { provider.search(&request.query).await });
                    self.tokens.insert(handle.id(), token);
                    queue.extend(self.coordinator.update(SearchMessage::RequestIssued(token)));
                }
                Command::ReportError(failure) => self.sink.report(&failure),
            }
        }
    }

    /// Resolve a finished fetch task. A task that panicked resolves its token
    /// as a failed search.
    fn on_fetch_joined(
        &mut self,
        joined: Result<(task::Id, FetchOutcome), JoinError>,
    ) -> Vec<Command> {
        let (id, outcome) = match joined {
            Ok((id, outcome)) => (id, outcome),
            Err(e) => {
                warn!("Search task failed: {}", e);
                let error = MarketDataError::ProviderError {
                    provider: self.provider.id().to_string(),
                    message: format!("search task failed: {}", e),
                };
                (e.id(), Err(error))
            }
        };

        match self.tokens.remove(&id) {
            Some(token) => self
                .coordinator
                .update(SearchMessage::RequestResolved { token, outcome }),
            None => {
                debug!("Finished search task {} has no token", id);
                Vec::new()
            }
        }
    }

    fn publish(&self) {
        let next = self.coordinator.snapshot();
        self.publisher.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

/// Presentation-side handle to a running [`SearchRuntime`].
pub struct SearchHandle {
    events: mpsc::UnboundedSender<SearchEvent>,
    snapshots: watch::Receiver<SearchSnapshot>,
    task: Option<JoinHandle<()>>,
}

impl SearchHandle {
    pub fn change(&self, raw: impl Into<String>) {
        self.send(SearchEvent::Changed(raw.into()));
    }

    pub fn clear(&self) {
        self.send(SearchEvent::Clear);
    }

    pub fn escape(&self) {
        self.send(SearchEvent::Escape);
    }

    pub fn send(&self, event: SearchEvent) {
        if self.events.send(event).is_err() {
            debug!("Search runtime already stopped, dropping event");
        }
    }

    /// Latest published state.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.snapshots.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the runtime and wait for it to release its timer and fetches.
    pub async fn shutdown(mut self) {
        self.send(SearchEvent::Shutdown);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("Search runtime ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
