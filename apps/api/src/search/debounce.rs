#![allow(dead_code)]

//! Suggestion debounce as an explicit cancellable scheduled task.
//!
//! Each `schedule` aborts whatever is still pending and arms a new task that
//! runs after `delay`. Only the last task scheduled within a quiet period runs.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::search::client::{CandidateSource, SearchError};
use crate::search::filters::FilterCategory;
use crate::search::models::FilterSuggestion;

/// Quiet period after the last keystroke before a suggestion fetch is issued.
pub const SUGGESTION_DEBOUNCE: Duration = Duration::from_millis(500);

pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Runs `task` after the quiet period unless superseded by a later call.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });

        let previous = self.lock().replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Aborts the pending task, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.lock().take() {
            handle.abort();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        // The slot only holds a JoinHandle, so a poisoned lock is still usable.
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Outcome of one debounced suggestion query.
#[derive(Debug)]
pub struct SuggestionUpdate {
    pub query: String,
    pub category: FilterCategory,
    pub result: Result<Vec<FilterSuggestion>, SearchError>,
}

/// Debounced typeahead over a `CandidateSource`. Updates arrive on the receiver
/// returned by `new`.
pub struct SuggestionDebouncer {
    source: Arc<dyn CandidateSource>,
    debouncer: Debouncer,
    updates: mpsc::UnboundedSender<SuggestionUpdate>,
}

impl SuggestionDebouncer {
    pub fn new(
        source: Arc<dyn CandidateSource>,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SuggestionUpdate>) {
        let (updates, rx) = mpsc::unbounded_channel();
        (
            Self {
                source,
                debouncer: Debouncer::new(delay),
                updates,
            },
            rx,
        )
    }

    /// Records a new query. Blank queries clear suggestions immediately.
    pub fn request(&self, query: &str, category: FilterCategory) {
        let query = query.trim().to_string();

        if query.is_empty() {
            self.debouncer.cancel();
            let _ = self.updates.send(SuggestionUpdate {
                query,
                category,
                result: Ok(Vec::new()),
            });
            return;
        }

        let source = self.source.clone();
        let updates = self.updates.clone();
        self.debouncer.schedule(async move {
            debug!(query = %query, category = category.token(), "debounced suggestion fetch");
            let result = source.suggestions(&query, category).await;
            // Receiver gone means nobody is listening any more.
            let _ = updates.send(SuggestionUpdate {
                query,
                category,
                result,
            });
        });
    }
}
