//! File-backed state repository.
//!
//! Persists saved movie ids and the session restore key in `state.toml`.

use crate::paths::{MarqueePaths, ServiceType};
use crate::storage::AtomicTomlFile;
use marquee_core::error::{MarqueeError, Result};
use marquee_core::state::{PersistedState, StateRepository};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// State repository backed by a TOML file.
///
/// The state is loaded once at construction and cached in memory. Every change
/// is written through to disk before the call returns.
#[derive(Clone)]
pub struct StateRepositoryImpl {
    state: Arc<Mutex<PersistedState>>,
    file: Arc<AtomicTomlFile<PersistedState>>,
}

impl StateRepositoryImpl {
    /// Opens the state file under the given paths.
    pub async fn new(paths: &MarqueePaths) -> Result<Self> {
        let path = paths.get_path(ServiceType::State)?;
        Self::with_path(path).await
    }

    /// Opens the state file at a custom path (for testing).
    pub async fn with_path(path: PathBuf) -> Result<Self> {
        let file = Arc::new(AtomicTomlFile::<PersistedState>::new(path));

        let loader = file.clone();
        let initial_state = tokio::task::spawn_blocking(move || loader.load())
            .await
            .map_err(|e| MarqueeError::internal(format!("Failed to join task: {}", e)))??
            .unwrap_or_default();

        tracing::debug!(
            "Loaded state from {}: {} saved movies, restore key {}",
            file.path().display(),
            initial_state.saved_movie_ids.len(),
            if initial_state.last_user_id.is_some() { "present" } else { "absent" }
        );

        Ok(Self {
            state: Arc::new(Mutex::new(initial_state)),
            file,
        })
    }

    /// Applies `change` to the state on disk and refreshes the cache from the
    /// written result.
    ///
    /// The file is re-read under its lock, so a change made by another process
    /// since startup is kept. The cache lock is held until the write finishes.
    async fn modify<F>(&self, change: F) -> Result<PersistedState>
    where
        F: FnOnce(&mut PersistedState) + Send + 'static,
    {
        let mut state = self.state.lock().await;

        let file = self.file.clone();
        let fallback = state.clone();
        let written = tokio::task::spawn_blocking(move || file.update(fallback, change))
            .await
            .map_err(|e| MarqueeError::internal(format!("Failed to join task: {}", e)))??;

        *state = written.clone();
        Ok(written)
    }
}

#[async_trait::async_trait]
impl StateRepository for StateRepositoryImpl {
    async fn saved_movie_ids(&self) -> Vec<String> {
        self.state.lock().await.saved_movie_ids.clone()
    }

    async fn toggle_saved_movie_id(&self, movie_id: &str) -> Result<Vec<String>> {
        let movie_id = movie_id.to_string();
        let written = self
            .modify(move |state| {
                state.toggle_saved(&movie_id);
            })
            .await?;
        Ok(written.saved_movie_ids)
    }

    async fn last_user_id(&self) -> Option<String> {
        self.state.lock().await.last_user_id.clone()
    }

    async fn set_last_user_id(&self, user_id: String) -> Result<()> {
        self.modify(move |state| state.last_user_id = Some(user_id))
            .await
            .map(|_| ())
    }

    async fn clear_last_user_id(&self) -> Result<()> {
        self.modify(|state| state.last_user_id = None).await.map(|_| ())
    }
}
