//! Persisted state domain model.

use serde::{Deserialize, Serialize};

/// Small key-value facts that survive process restarts.
///
/// # Fields
///
/// * `saved_movie_ids` - Ids of the movies the user saved, kept sorted.
/// * `last_user_id` - Id of the last signed-in user (the restore key). Only the
///   id is stored; the account itself is re-fetched on startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub saved_movie_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_user_id: Option<String>,
}

impl PersistedState {
    /// Flips membership of `movie_id`, keeping the ids sorted and unique.
    ///
    /// Returns whether the movie is saved afterwards.
    pub fn toggle_saved(&mut self, movie_id: &str) -> bool {
        if self.saved_movie_ids.iter().any(|id| id == movie_id) {
            self.saved_movie_ids.retain(|id| id != movie_id);
            false
        } else {
            self.saved_movie_ids.push(movie_id.to_string());
            self.saved_movie_ids.sort();
            true
        }
    }
}
