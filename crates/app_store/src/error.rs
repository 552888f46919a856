//! Application store error types.

use niche_search::SearchError;
use thiserror::Error;

/// Errors that can occur when reading the application store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation requires a signed-in user.
    #[error("Not signed in")]
    NotSignedIn,
}

/// Result type for application store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when running a search from the dashboard.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The profession is blank.
    #[error("Enter a profession or skill to explore")]
    EmptyProfession,

    /// The free plan's per-session search limit has been used up.
    #[error("Free plan search limit reached ({limit} searches per session)")]
    LimitReached { limit: u32 },

    /// Another search from this session is still running.
    #[error("A search is already in progress")]
    SearchPending,

    /// The search itself failed.
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),
}

/// Result type for search session operations.
pub type SessionResult<T> = Result<T, SessionError>;
