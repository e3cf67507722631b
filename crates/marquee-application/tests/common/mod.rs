//! In-memory repositories shared by the application tests.

#![allow(dead_code)]

use async_trait::async_trait;
use marquee_core::error::{MarqueeError, Result};
use marquee_core::movie::{Movie, MovieRepository};
use marquee_core::state::{PersistedState, StateRepository};
use marquee_core::user::{UserAccount, UserPatch, UserRepository};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{mpsc, oneshot};

pub fn user(id: &str, name: Option<&str>, email: &str, password: &str) -> UserAccount {
    UserAccount {
        name: name.map(str::to_string),
        email: Some(email.to_string()),
        password_plaintext: Some(password.to_string()),
        ..UserAccount::new(id)
    }
}

pub fn movie(id: &str, title: &str, genres: &[&str], rating: Option<f64>) -> Movie {
    Movie::from_parts(
        id,
        Some(title.to_string()),
        None,
        Some(genres.iter().map(|g| g.to_string()).collect()),
        rating,
        None,
    )
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<UserAccount>>,
    pub fail_list: AtomicBool,
    pub list_calls: AtomicUsize,
    pub updates: Mutex<Vec<(String, UserPatch)>>,
}

impl InMemoryUsers {
    pub fn with_users(users: Vec<UserAccount>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub fn remove(&self, id: &str) {
        self.users.lock().unwrap().retain(|user| user.id != id);
    }

    pub fn get(&self, id: &str) -> Option<UserAccount> {
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn list_users(&self) -> Result<Vec<UserAccount>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(MarqueeError::transport("connection refused"));
        }
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<()> {
        self.updates
            .lock()
            .unwrap()
            .push((id.to_string(), patch.clone()));

        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| MarqueeError::remote(404, "NOT_FOUND"))?;
        if let Some(name) = patch.name {
            user.name = Some(name);
        }
        if let Some(email) = patch.email {
            user.email = Some(email);
        }
        if let Some(url) = patch.profile_image_url {
            user.profile_image_url = Some(url);
        }
        if let Some(password) = patch.password {
            user.password_plaintext = Some(password);
        }
        Ok(())
    }
}

// ============================================================================
// Durable state
// ============================================================================

#[derive(Default)]
pub struct InMemoryState {
    state: Mutex<PersistedState>,
    pub fail_writes: AtomicBool,
}

impl InMemoryState {
    pub fn with_state(state: PersistedState) -> Self {
        Self {
            state: Mutex::new(state),
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> PersistedState {
        self.state.lock().unwrap().clone()
    }

    fn write(&self, change: impl FnOnce(&mut PersistedState)) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MarqueeError::io("disk full"));
        }
        change(&mut self.state.lock().unwrap());
        Ok(())
    }
}

#[async_trait]
impl StateRepository for InMemoryState {
    async fn saved_movie_ids(&self) -> Vec<String> {
        self.snapshot().saved_movie_ids
    }

    async fn toggle_saved_movie_id(&self, movie_id: &str) -> Result<Vec<String>> {
        self.write(|state| {
            state.toggle_saved(movie_id);
        })?;
        Ok(self.snapshot().saved_movie_ids)
    }

    async fn last_user_id(&self) -> Option<String> {
        self.snapshot().last_user_id
    }

    async fn set_last_user_id(&self, user_id: String) -> Result<()> {
        self.write(|state| state.last_user_id = Some(user_id))
    }

    async fn clear_last_user_id(&self) -> Result<()> {
        self.write(|state| state.last_user_id = None)
    }
}

// ============================================================================
// Movies
// ============================================================================

/// Answers every call with the same result.
pub struct StaticMovies {
    result: Mutex<Result<Vec<Movie>>>,
}

impl StaticMovies {
    pub fn ok(movies: Vec<Movie>) -> Self {
        Self {
            result: Mutex::new(Ok(movies)),
        }
    }

    pub fn set(&self, result: Result<Vec<Movie>>) {
        *self.result.lock().unwrap() = result;
    }
}

#[async_trait]
impl MovieRepository for StaticMovies {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.result.lock().unwrap().clone()
    }
}

/// Each call waits for the result sent on its own gate, in call order.
pub struct GatedMovies {
    gates: Mutex<VecDeque<oneshot::Receiver<Result<Vec<Movie>>>>>,
    started: mpsc::UnboundedSender<()>,
}

impl GatedMovies {
    /// Returns the repository, one sender per expected call and a channel
    /// that signals each call as it starts waiting.
    pub fn new(
        calls: usize,
    ) -> (
        Self,
        Vec<oneshot::Sender<Result<Vec<Movie>>>>,
        mpsc::UnboundedReceiver<()>,
    ) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..calls).map(|_| oneshot::channel()).unzip();
        let (started, started_rx) = mpsc::unbounded_channel();

        let repo = Self {
            gates: Mutex::new(receivers),
            started,
        };
        (repo, senders, started_rx)
    }
}

#[async_trait]
impl MovieRepository for GatedMovies {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        let gate = self
            .gates
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| MarqueeError::internal("unexpected call"))?;
        let _ = self.started.send(());

        gate.await
            .map_err(|_| MarqueeError::internal("gate dropped"))?
    }
}
