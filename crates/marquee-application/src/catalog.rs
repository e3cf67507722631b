//! Catalog view model: the movie list, its loading cycle and the search box.

use marquee_core::catalog::{CatalogView, GenreSection, LoadState};
use marquee_core::movie::{Movie, MovieRepository};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::session_store::SessionStore;

#[derive(Default)]
struct CatalogInner {
    movies: Vec<Movie>,
    load_state: LoadState,
    search_text: String,
    /// Ticket of the most recent refresh
    generation: u64,
}

/// Holds the fetched catalog and derives the lists the screens show.
///
/// Each [`refresh`](Self::refresh) takes a ticket; a response that arrives
/// after a newer refresh started is dropped, so a slow old fetch can never
/// replace newer data. A failed refresh keeps the movies from the last
/// successful one.
pub struct CatalogViewModel {
    repository: Arc<dyn MovieRepository>,
    inner: RwLock<CatalogInner>,
}

impl CatalogViewModel {
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self {
            repository,
            inner: RwLock::new(CatalogInner::default()),
        }
    }

    /// Fetches the movie list and returns the resulting load state.
    ///
    /// Starts over at `Loading` from any state, which also makes this the
    /// retry action after a failure.
    pub async fn refresh(&self) -> LoadState {
        let ticket = {
            let mut inner = self.inner.write().await;
            inner.generation += 1;
            inner.load_state = LoadState::Loading;
            inner.generation
        };

        let result = self.repository.list_movies().await;

        let mut inner = self.inner.write().await;
        if inner.generation != ticket {
            tracing::debug!(
                "Discarding catalog response {} (latest is {})",
                ticket,
                inner.generation
            );
            return inner.load_state.clone();
        }

        match result {
            Ok(movies) => {
                tracing::debug!("Catalog loaded with {} movies", movies.len());
                inner.movies = movies;
                inner.load_state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!("Failed to load catalog: {}", e);
                inner.load_state = LoadState::Failed(e.user_message());
            }
        }
        inner.load_state.clone()
    }

    pub async fn load_state(&self) -> LoadState {
        self.inner.read().await.load_state.clone()
    }

    pub async fn movies(&self) -> Vec<Movie> {
        self.inner.read().await.movies.clone()
    }

    pub async fn set_search_text(&self, text: impl Into<String>) {
        self.inner.write().await.search_text = text.into();
    }

    pub async fn search_text(&self) -> String {
        self.inner.read().await.search_text.clone()
    }

    async fn derive<R>(&self, f: impl FnOnce(CatalogView<'_>) -> R) -> R {
        let inner = self.inner.read().await;
        f(CatalogView::new(&inner.movies, &inner.search_text))
    }

    pub async fn filtered(&self) -> Vec<Movie> {
        self.derive(|view| view.filtered().into_iter().cloned().collect())
            .await
    }

    pub async fn top_picks(&self, limit: usize) -> Vec<Movie> {
        self.derive(|view| view.top_picks(limit).into_iter().cloned().collect())
            .await
    }

    pub async fn by_genre(&self, genre: &str) -> Vec<Movie> {
        self.derive(|view| view.by_genre(genre).into_iter().cloned().collect())
            .await
    }

    /// Filtered movies the session has saved.
    pub async fn saved_only(&self, session: &SessionStore) -> Vec<Movie> {
        let saved_ids = session.saved_movie_ids().await;
        self.derive(|view| view.saved_only(&saved_ids).into_iter().cloned().collect())
            .await
    }

    pub async fn genre_sections(&self, genres: &[&str], preview_len: usize) -> Vec<GenreSection> {
        self.derive(|view| view.genre_sections(genres, preview_len))
            .await
    }
}
