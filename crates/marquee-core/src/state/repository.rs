//! State repository trait.

use async_trait::async_trait;

use crate::error::Result;

/// Repository for the durable key-value state.
#[async_trait]
pub trait StateRepository: Send + Sync {
    async fn saved_movie_ids(&self) -> Vec<String>;

    /// Adds `movie_id` to the saved set, or removes it when already present.
    ///
    /// The flip is applied to the currently persisted set, not to a copy held
    /// by the caller. Returns the saved ids as written.
    async fn toggle_saved_movie_id(&self, movie_id: &str) -> Result<Vec<String>>;

    async fn last_user_id(&self) -> Option<String>;

    async fn set_last_user_id(&self, user_id: String) -> Result<()>;

    async fn clear_last_user_id(&self) -> Result<()>;
}
