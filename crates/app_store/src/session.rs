//! Dashboard search session.

use std::sync::{
    atomic::{AtomicBool, AtomicU32, Ordering},
    Arc,
};

use entities::{NicheSearchRequest, NicheSearchResult, SearchHistoryItem};
use niche_search::NicheSearch;

use crate::{AppStore, SessionError, SessionResult};

/// Searches a free-plan user may run per session.
pub const FREE_SEARCH_LIMIT: u32 = 3;

/// Runs searches for one dashboard session and records them in the store.
///
/// Free-plan users are limited to [`FREE_SEARCH_LIMIT`] completed searches
/// per session. The counter lives in the session, not the store, so it
/// resets with every new session.
pub struct SearchSession {
    store: Arc<AppStore>,
    engine: Arc<dyn NicheSearch>,
    searches: AtomicU32,
    pending: AtomicBool,
}

impl SearchSession {
    /// Creates a session with no searches used.
    pub fn new(store: Arc<AppStore>, engine: Arc<dyn NicheSearch>) -> Self {
        Self {
            store,
            engine,
            searches: AtomicU32::new(0),
            pending: AtomicBool::new(false),
        }
    }

    /// Returns the number of completed searches in this session.
    pub fn searches_used(&self) -> u32 {
        self.searches.load(Ordering::SeqCst)
    }

    /// Returns the remaining free searches, or `None` when unlimited.
    pub fn remaining(&self) -> Option<u32> {
        self.is_limited()
            .then(|| FREE_SEARCH_LIMIT.saturating_sub(self.searches_used()))
    }

    /// Checks if the free search limit has been used up.
    pub fn limit_reached(&self) -> bool {
        self.remaining() == Some(0)
    }

    /// Checks if a search for the given profession may start now.
    pub fn can_search(&self, profession: &str) -> bool {
        !profession.trim().is_empty()
            && !self.pending.load(Ordering::SeqCst)
            && !self.limit_reached()
    }

    /// Runs a search and records it in the search history.
    ///
    /// The profession is trimmed before searching.
    pub async fn hunt(&self, request: NicheSearchRequest) -> SessionResult<NicheSearchResult> {
        let profession = request.profession.trim();
        if profession.is_empty() {
            return Err(SessionError::EmptyProfession);
        }
        if self.limit_reached() {
            return Err(SessionError::LimitReached {
                limit: FREE_SEARCH_LIMIT,
            });
        }
        if self.pending.swap(true, Ordering::SeqCst) {
            return Err(SessionError::SearchPending);
        }
        let _pending = PendingGuard(&self.pending);

        let request = NicheSearchRequest {
            profession: profession.to_string(),
            filters: request.filters,
        };
        let result = self.engine.search(request).await?;

        let used = self.searches.fetch_add(1, Ordering::SeqCst) + 1;
        self.store
            .add_search_history(SearchHistoryItem::from_result(&result));

        tracing::info!(
            request_id = %result.request_id,
            profession = %result.query.profession,
            results = result.ideas.len(),
            searches_used = used,
            "Hunt completed"
        );

        Ok(result)
    }

    fn is_limited(&self) -> bool {
        self.store
            .current_user()
            .is_some_and(|user| user.plan.is_free())
    }
}

/// Clears the pending flag when a search finishes or is dropped.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
