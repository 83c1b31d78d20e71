//! Doodleseek search orchestration
//!
//! Drives the sketch-to-results cycle: snapshot the drawn strokes, submit
//! them to the remote matching service, and track the request lifecycle
//! (idle / loading / succeeded / failed) with a single-flight guarantee.

pub mod client;
pub mod types;
pub mod workflow;

pub use client::{HttpSearchClient, SearchBackend};
pub use types::{Match, SearchRequest, SearchResult};
pub use workflow::{SearchCompletedCallback, SearchState, SearchWorkflow};

use thiserror::Error;

/// Failures of one search invocation.
///
/// Every variant is terminal for that invocation and recoverable by the user:
/// retry with another `search` call, or `reset` out of a failed state. None
/// of these are fatal to the process.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Search requested with no completed strokes; surfaced as a prompt,
    /// never a state transition
    #[error("nothing on canvas - draw something before searching")]
    EmptyCanvas,

    /// The rendering surface could not produce a snapshot
    #[error("drawing surface is not ready for capture")]
    SnapshotUnavailable,

    /// A search is already in flight; the duplicate attempt is dropped
    #[error("a search is already in progress")]
    RequestInProgress,

    /// Transport failure or non-2xx response from the matching service
    #[error("search request failed: {0}")]
    Network(String),

    /// Response body was not parseable as the expected shape
    #[error("invalid search response: {0}")]
    Decode(String),
}
