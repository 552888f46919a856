//! Persistence of the signed-in user.

use std::sync::Arc;

use entities::User;
use serde::{Deserialize, Serialize};

use crate::{KeyValueStorage, MemoryStorage, STORAGE_KEY};

/// Trait for loading and saving the signed-in user.
///
/// Both operations are infallible from the caller's point of view: a record
/// that cannot be read is treated as "no user", and a failed write is logged
/// and dropped.
pub trait UserPersistence: Send + Sync {
    /// Loads the previously saved user, if any.
    fn load(&self) -> Option<User>;

    /// Saves the given user, or a `null` user when `None`.
    fn save(&self, user: Option<&User>);
}

/// Stored record layout: `{ "user": {...} | null }`.
#[derive(Debug, Serialize, Deserialize)]
struct AuthStoragePayload {
    #[serde(default)]
    user: Option<User>,
}

/// User persistence on top of a [`KeyValueStorage`].
pub struct LocalUserPersistence {
    storage: Arc<dyn KeyValueStorage>,
}

impl LocalUserPersistence {
    /// Creates a persistence adapter storing the user under [`STORAGE_KEY`].
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Creates a persistence adapter backed by fresh in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }
}

impl UserPersistence for LocalUserPersistence {
    fn load(&self) -> Option<User> {
        let raw = match self.storage.get(STORAGE_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!(key = STORAGE_KEY, error = %e, "Failed to read stored user");
                return None;
            }
        };

        match serde_json::from_str::<AuthStoragePayload>(&raw) {
            Ok(payload) => payload.user,
            Err(e) => {
                tracing::debug!(key = STORAGE_KEY, error = %e, "Ignoring malformed stored user");
                None
            }
        }
    }

    fn save(&self, user: Option<&User>) {
        let payload = AuthStoragePayload {
            user: user.cloned(),
        };
        let raw = match serde_json::to_string(&payload) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize user");
                return;
            }
        };

        if let Err(e) = self.storage.set(STORAGE_KEY, &raw) {
            tracing::warn!(key = STORAGE_KEY, error = %e, "Failed to persist user");
        }
    }
}
