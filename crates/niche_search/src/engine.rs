//! Search engine over the idea catalog.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use entities::{NicheSearchRequest, NicheSearchResult};

use crate::{
    base_ideas, IdGenerator, Latency, NoLatency, RandomIdGenerator, SearchResult,
    SimulatedLatency, DEFAULT_SEARCH_LATENCY_MS,
};

/// Trait for niche search backends.
#[async_trait]
pub trait NicheSearch: Send + Sync {
    /// Runs a search and returns the filtered ideas.
    async fn search(&self, request: NicheSearchRequest) -> SearchResult<NicheSearchResult>;
}

/// Simulated search engine backed by the static catalog.
///
/// The engine holds no mutable state, so any number of searches may be in
/// flight at once; each resolves independently after its own delay.
pub struct NicheSearchEngine {
    latency: Arc<dyn Latency>,
    ids: Arc<dyn IdGenerator>,
}

impl NicheSearchEngine {
    /// Creates an engine with the default simulated latency and random ids.
    pub fn new() -> Self {
        Self {
            latency: Arc::new(SimulatedLatency::from_millis(DEFAULT_SEARCH_LATENCY_MS)),
            ids: Arc::new(RandomIdGenerator),
        }
    }

    /// Creates an engine that answers immediately.
    pub fn instant() -> Self {
        Self::new().with_latency(Arc::new(NoLatency))
    }

    /// Sets the latency awaited before each search completes.
    pub fn with_latency(mut self, latency: Arc<dyn Latency>) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the request id generator.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }
}

impl Default for NicheSearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NicheSearch for NicheSearchEngine {
    async fn search(&self, request: NicheSearchRequest) -> SearchResult<NicheSearchResult> {
        self.latency.wait().await;

        let ideas: Vec<_> = base_ideas(&request.profession)
            .into_iter()
            .filter(|idea| request.filters.accepts(idea))
            .collect();

        let request_id = self.ids.generate()?;

        tracing::debug!(
            request_id = %request_id,
            profession = %request.profession,
            category = %request.filters.category,
            results = ideas.len(),
            "Niche search completed"
        );

        Ok(NicheSearchResult {
            request_id,
            query: request,
            ideas,
            created_at: Utc::now(),
        })
    }
}
