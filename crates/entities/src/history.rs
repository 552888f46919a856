//! Search history entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::NicheSearchResult;

/// A completed search, recorded for the current session only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryItem {
    /// Identifier of the search that produced this entry.
    pub id: String,
    /// Profession that was searched for.
    pub profession: String,
    /// When the search completed.
    pub created_at: DateTime<Utc>,
    /// Number of ideas returned.
    pub result_count: usize,
}

impl SearchHistoryItem {
    /// Creates a history entry summarizing a search result.
    pub fn from_result(result: &NicheSearchResult) -> Self {
        Self {
            id: result.request_id.clone(),
            profession: result.query.profession.clone(),
            created_at: result.created_at,
            result_count: result.ideas.len(),
        }
    }
}
