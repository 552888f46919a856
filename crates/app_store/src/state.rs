//! Application state and its pure transitions.

use std::num::NonZeroUsize;

use entities::{NicheIdea, SearchHistoryItem, SubscriptionPlan, User};

/// Session-wide application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Signed-in user.
    pub user: Option<User>,
    /// Completed searches, newest first.
    pub search_history: Vec<SearchHistoryItem>,
    /// Saved ideas in the order they were saved.
    pub saved_niches: Vec<NicheIdea>,
}

/// A mutation of the application state.
#[derive(Debug, Clone)]
pub enum StoreAction {
    /// Replaces the signed-in user (`None` signs out).
    SetUser(Option<User>),
    /// Changes the signed-in user's plan.
    SetPlan(SubscriptionPlan),
    /// Changes the signed-in user's display name.
    RenameUser(String),
    /// Records a completed search.
    AddSearchHistory(SearchHistoryItem),
    /// Saves an idea.
    SaveNiche(NicheIdea),
    /// Removes a saved idea by id.
    RemoveSavedNiche(String),
}

/// Notification published after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The signed-in user was replaced or edited.
    UserChanged(Option<User>),
    /// The search history changed.
    HistoryChanged { len: usize },
    /// The saved ideas changed.
    SavedNichesChanged { len: usize },
}

impl AppState {
    /// Creates a state with the given user and empty collections.
    pub fn with_user(user: Option<User>) -> Self {
        Self {
            user,
            ..Default::default()
        }
    }

    /// Applies an action, returning the resulting event.
    ///
    /// Returns `None` when the action left the state untouched. When
    /// `history_limit` is set, the oldest history entries beyond it are
    /// dropped.
    pub fn apply(
        &mut self,
        action: StoreAction,
        history_limit: Option<NonZeroUsize>,
    ) -> Option<StoreEvent> {
        match action {
            StoreAction::SetUser(user) => {
                self.user = user;
                Some(StoreEvent::UserChanged(self.user.clone()))
            }
            StoreAction::SetPlan(plan) => {
                let user = self.user.as_mut()?;
                user.plan = plan;
                Some(StoreEvent::UserChanged(self.user.clone()))
            }
            StoreAction::RenameUser(name) => {
                let user = self.user.as_mut()?;
                let name = name.trim();
                if !name.is_empty() {
                    user.name = name.to_string();
                }
                Some(StoreEvent::UserChanged(self.user.clone()))
            }
            StoreAction::AddSearchHistory(item) => {
                self.search_history.insert(0, item);
                if let Some(limit) = history_limit {
                    self.search_history.truncate(limit.get());
                }
                Some(StoreEvent::HistoryChanged {
                    len: self.search_history.len(),
                })
            }
            StoreAction::SaveNiche(idea) => {
                if self.saved_niches.iter().any(|n| n.id == idea.id) {
                    return None;
                }
                self.saved_niches.push(idea);
                Some(StoreEvent::SavedNichesChanged {
                    len: self.saved_niches.len(),
                })
            }
            StoreAction::RemoveSavedNiche(id) => {
                let before = self.saved_niches.len();
                self.saved_niches.retain(|n| n.id != id);
                if self.saved_niches.len() == before {
                    return None;
                }
                Some(StoreEvent::SavedNichesChanged {
                    len: self.saved_niches.len(),
                })
            }
        }
    }
}
