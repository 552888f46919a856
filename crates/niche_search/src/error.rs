//! Search error types.

use thiserror::Error;

/// Errors that can occur while running a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No request identifier could be generated.
    #[error("Failed to generate request id: {0}")]
    IdGeneration(String),
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
