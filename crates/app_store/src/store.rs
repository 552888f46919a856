//! The application store.

use std::{
    num::NonZeroUsize,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use auth::UserPersistence;
use entities::{NicheIdea, SearchHistoryItem, SubscriptionPlan, User};
use tokio::sync::broadcast;

use crate::{AppState, StoreAction, StoreError, StoreEvent, StoreResult};

/// Capacity of the change notification channel.
const CHANNEL_CAPACITY: usize = 64;

/// Tunables of the application store.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreSettings {
    /// Maximum number of history entries kept; unbounded when `None`.
    pub history_limit: Option<NonZeroUsize>,
}

/// Holder of session-wide application state.
///
/// Every mutation runs the pure transition under the state lock, then saves
/// the user through the persistence hook when the user changed, then
/// publishes the resulting [`StoreEvent`] to subscribers. Mutations that do
/// not change anything publish nothing.
pub struct AppStore {
    state: RwLock<AppState>,
    persistence: Arc<dyn UserPersistence>,
    events: broadcast::Sender<StoreEvent>,
    settings: StoreSettings,
}

impl AppStore {
    /// Creates a store, restoring the previously persisted user.
    pub fn new(persistence: Arc<dyn UserPersistence>) -> Self {
        Self::with_settings(persistence, StoreSettings::default())
    }

    /// Creates a store with explicit settings.
    pub fn with_settings(persistence: Arc<dyn UserPersistence>, settings: StoreSettings) -> Self {
        let user = persistence.load();
        if let Some(user) = &user {
            tracing::debug!(user_id = %user.id, "Restored signed-in user");
        }

        Self {
            state: RwLock::new(AppState::with_user(user)),
            persistence,
            events: broadcast::channel(CHANNEL_CAPACITY).0,
            settings,
        }
    }

    /// Subscribes to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Applies an action and runs its side effects.
    pub fn dispatch(&self, action: StoreAction) -> Option<StoreEvent> {
        let event = self
            .write_state()
            .apply(action, self.settings.history_limit)?;

        if let StoreEvent::UserChanged(user) = &event {
            self.persistence.save(user.as_ref());
        }

        tracing::debug!(event = ?event, "Store updated");

        // No subscribers is fine
        let _ = self.events.send(event.clone());
        Some(event)
    }

    /// Replaces the signed-in user; `None` signs out.
    pub fn set_user(&self, user: Option<User>) {
        self.dispatch(StoreAction::SetUser(user));
    }

    /// Changes the signed-in user's plan. No-op when signed out.
    pub fn set_plan(&self, plan: SubscriptionPlan) {
        self.dispatch(StoreAction::SetPlan(plan));
    }

    /// Changes the signed-in user's display name. A blank name is ignored.
    pub fn rename_user(&self, name: impl Into<String>) {
        self.dispatch(StoreAction::RenameUser(name.into()));
    }

    /// Records a completed search at the front of the history.
    pub fn add_search_history(&self, item: SearchHistoryItem) {
        self.dispatch(StoreAction::AddSearchHistory(item));
    }

    /// Saves an idea unless one with the same id is already saved.
    pub fn save_niche(&self, idea: NicheIdea) {
        self.dispatch(StoreAction::SaveNiche(idea));
    }

    /// Removes a saved idea by id.
    pub fn remove_saved_niche(&self, id: &str) {
        self.dispatch(StoreAction::RemoveSavedNiche(id.to_string()));
    }

    /// Returns the signed-in user.
    pub fn current_user(&self) -> Option<User> {
        self.read_state().user.clone()
    }

    /// Returns the signed-in user, or an error when signed out.
    pub fn require_user(&self) -> StoreResult<User> {
        self.current_user().ok_or(StoreError::NotSignedIn)
    }

    /// Returns the search history, newest first.
    pub fn search_history(&self) -> Vec<SearchHistoryItem> {
        self.read_state().search_history.clone()
    }

    /// Returns the saved ideas.
    pub fn saved_niches(&self) -> Vec<NicheIdea> {
        self.read_state().saved_niches.clone()
    }

    // Transitions never panic while holding the lock, so a poisoned lock
    // still holds consistent state.
    fn read_state(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, AppState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
