//! Request identifier generation.

use rand::{TryRngCore, rngs::OsRng};

use crate::{SearchError, SearchResult};

/// Source of fresh request identifiers.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier, or an error when no randomness is available.
    fn generate(&self) -> SearchResult<String>;
}

/// Random UUID v4 identifiers drawn from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> SearchResult<String> {
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| SearchError::IdGeneration(e.to_string()))?;
        Ok(uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string())
    }
}
