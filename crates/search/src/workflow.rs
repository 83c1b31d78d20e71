//! Search workflow state machine.
//!
//! Orchestrates the transition from a drawn sketch to a displayed result set:
//! snapshot capture, one network submission, and the
//! idle / loading / succeeded / failed lifecycle. At most one request is in
//! flight at a time; the state tag makes "loading and succeeded at once"
//! unrepresentable.

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use sketch::{SketchSurface, Stroke};

use crate::SearchError;
use crate::client::SearchBackend;
use crate::types::{Match, SearchResult};

/// Lifecycle of the current search cycle. Exactly one state is active.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No request in flight, no results held
    Idle,
    /// A single request is outstanding
    Loading,
    /// The last request resolved; holds the ranked matches
    Succeeded(SearchResult),
    /// The last request failed; holds a user-facing reason
    Failed(String),
}

impl SearchState {
    /// True while a request is outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading)
    }

    /// Matches held by a succeeded state, empty otherwise
    pub fn matches(&self) -> &[Match] {
        match self {
            SearchState::Succeeded(result) => &result.matches,
            _ => &[],
        }
    }
}

/// Hook invoked after each successful search with the submitted snapshot
/// (base64 PNG) and the decoded result. Lets a history store persist the
/// pair without the workflow writing to storage directly.
pub type SearchCompletedCallback = Box<dyn Fn(&str, &SearchResult) + Send + Sync>;

/// Drives the sketch-to-results cycle against a [`SearchBackend`].
///
/// State transitions happen only here; stroke capture never touches them.
/// Results are applied atomically - matches and the terminal state change
/// land together, and no partial state is observable.
pub struct SearchWorkflow<B: SearchBackend> {
    backend: B,
    state: Mutex<SearchState>,
    on_completed: Option<SearchCompletedCallback>,
}

impl<B: SearchBackend> SearchWorkflow<B> {
    /// Create an idle workflow over the given backend
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(SearchState::Idle),
            on_completed: None,
        }
    }

    /// Register the completion hook. Call before sharing the workflow.
    pub fn on_completed(&mut self, callback: SearchCompletedCallback) {
        self.on_completed = Some(callback);
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> SearchState {
        self.state.lock().await.clone()
    }

    /// True while a request is outstanding
    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.is_loading()
    }

    /// Run one search cycle: validate, snapshot, submit, apply the outcome.
    ///
    /// Fails fast with [`SearchError::EmptyCanvas`] when nothing was drawn
    /// (no state transition) and with [`SearchError::RequestInProgress`] when
    /// a request is already outstanding (the in-flight request is unaffected
    /// and still lands). A failed snapshot returns the workflow to idle; a
    /// failed submission lands in [`SearchState::Failed`]. Nothing is retried
    /// automatically - retry is a new `search` call.
    pub async fn search(
        &self,
        strokes: &[Stroke],
        surface: &dyn SketchSurface,
    ) -> Result<SearchResult, SearchError> {
        if strokes.is_empty() {
            debug!("search requested with an empty canvas");
            return Err(SearchError::EmptyCanvas);
        }

        // Claim the single flight or bail out
        {
            let mut state = self.state.lock().await;
            if state.is_loading() {
                warn!("search requested while another is in flight");
                return Err(SearchError::RequestInProgress);
            }
            *state = SearchState::Loading;
        }

        let Some(snapshot) = surface.capture_snapshot() else {
            warn!("surface could not produce a snapshot");
            *self.state.lock().await = SearchState::Idle;
            return Err(SearchError::SnapshotUnavailable);
        };

        debug!(
            strokes = strokes.len(),
            encoded_len = snapshot.len(),
            "snapshot captured, submitting"
        );

        match self.backend.submit(&snapshot).await {
            Ok(result) => {
                info!(
                    matches = result.matches.len(),
                    search_time_ms = result.search_time_ms,
                    "search succeeded"
                );
                *self.state.lock().await = SearchState::Succeeded(result.clone());
                if let Some(callback) = &self.on_completed {
                    callback(&snapshot, &result);
                }
                Ok(result)
            }
            Err(failure) => {
                error!(error = %failure, "search failed");
                *self.state.lock().await = SearchState::Failed(failure.to_string());
                Err(failure)
            }
        }
    }

    /// Discard held matches or failure reason and return to idle.
    ///
    /// No-op from idle or loading; an in-flight request is allowed to
    /// complete and apply its result.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        if matches!(*state, SearchState::Succeeded(_) | SearchState::Failed(_)) {
            debug!("search state reset");
            *state = SearchState::Idle;
        }
    }
}
