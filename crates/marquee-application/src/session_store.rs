//! Session store: who is signed in and which movies they saved.

use marquee_core::error::Result;
use marquee_core::session::SessionStatus;
use marquee_core::state::StateRepository;
use marquee_core::user::{ProfileUpdate, UserAccount, UserPatch, UserRepository};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::RwLock;

struct SessionInner {
    status: SessionStatus,
    saved_movie_ids: BTreeSet<String>,
}

/// Login state and saved movies of the running application.
///
/// One store is created at startup and shared by reference. The saved set is
/// device-wide: it is not tied to the signed-in user and survives logout.
///
/// # Thread Safety
///
/// State sits behind a single `RwLock`. Local persistence happens while the
/// write lock is held so the file sees changes in order; remote calls are
/// always made with the lock released.
pub struct SessionStore {
    users: Arc<dyn UserRepository>,
    state: Arc<dyn StateRepository>,
    inner: RwLock<SessionInner>,
}

impl SessionStore {
    /// Creates a logged-out store holding the persisted saved movies.
    pub async fn open(users: Arc<dyn UserRepository>, state: Arc<dyn StateRepository>) -> Self {
        let saved_movie_ids: BTreeSet<String> = state.saved_movie_ids().await.into_iter().collect();
        tracing::debug!("Session opened with {} saved movies", saved_movie_ids.len());

        Self {
            users,
            state,
            inner: RwLock::new(SessionInner {
                status: SessionStatus::LoggedOut,
                saved_movie_ids,
            }),
        }
    }

    pub async fn status(&self) -> SessionStatus {
        self.inner.read().await.status.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.inner.read().await.status.is_logged_in()
    }

    pub async fn current_user(&self) -> Option<UserAccount> {
        self.inner.read().await.status.current_user().cloned()
    }

    async fn current_user_id(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .status
            .current_user()
            .map(|user| user.id.clone())
    }

    /// Signs `user` in and records them as the account to restore on next start.
    ///
    /// Replaces any current user. Nothing changes if the restore key cannot be
    /// written.
    pub async fn login(&self, user: UserAccount) -> Result<()> {
        let mut inner = self.inner.write().await;
        self.state.set_last_user_id(user.id.clone()).await?;

        tracing::info!("Logged in as {}", user.id);
        inner.status = SessionStatus::LoggedIn(user);
        Ok(())
    }

    /// Signs out. Saved movies are kept.
    ///
    /// The in-memory session ends even when clearing the restore key fails;
    /// that failure is still returned.
    pub async fn logout(&self) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.status = SessionStatus::LoggedOut;
        tracing::info!("Logged out");

        self.state.clear_last_user_id().await
    }

    /// Signs the last user back in from the persisted restore key.
    ///
    /// Any failure leaves the store logged out and is only logged.
    pub async fn restore_session(&self) {
        let Some(user_id) = self.state.last_user_id().await else {
            tracing::debug!("No session to restore");
            return;
        };

        let users = match self.users.list_users().await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("Failed to restore session for {}: {}", user_id, e);
                return;
            }
        };

        match users.into_iter().find(|user| user.id == user_id) {
            Some(user) => {
                tracing::info!("Restored session for {}", user.id);
                self.inner.write().await.status = SessionStatus::LoggedIn(user);
            }
            None => tracing::warn!("Stored user {} no longer exists", user_id),
        }
    }

    /// Adds or removes `movie_id` from the saved set.
    ///
    /// The flip is applied to the persisted set, so saves made by another
    /// process since startup are kept, and the in-memory set is replaced with
    /// what was written. Returns whether the movie is saved afterwards. On a
    /// persistence failure the set is left as it was.
    pub async fn toggle_save(&self, movie_id: &str) -> Result<bool> {
        let mut inner = self.inner.write().await;

        let written = self.state.toggle_saved_movie_id(movie_id).await?;
        inner.saved_movie_ids = written.into_iter().collect();
        let saved = inner.saved_movie_ids.contains(movie_id);

        tracing::debug!("Movie {} saved: {}", movie_id, saved);
        Ok(saved)
    }

    pub async fn is_saved(&self, movie_id: &str) -> bool {
        self.inner.read().await.saved_movie_ids.contains(movie_id)
    }

    pub async fn saved_movie_ids(&self) -> BTreeSet<String> {
        self.inner.read().await.saved_movie_ids.clone()
    }

    /// Updates the signed-in user's profile, then reloads it from the server.
    ///
    /// Does nothing when logged out. The refreshed record only replaces the
    /// current user if the same account is still signed in.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<()> {
        let Some(user_id) = self.current_user_id().await else {
            tracing::debug!("Ignoring profile update while logged out");
            return Ok(());
        };

        self.users.update_user(&user_id, update.into()).await?;
        let users = self.users.list_users().await?;

        let Some(refreshed) = users.into_iter().find(|user| user.id == user_id) else {
            tracing::warn!("User {} missing after profile update", user_id);
            return Ok(());
        };

        let mut inner = self.inner.write().await;
        let still_current = inner
            .status
            .current_user()
            .is_some_and(|user| user.id == user_id);
        if still_current {
            inner.status = SessionStatus::LoggedIn(refreshed);
        }
        Ok(())
    }

    /// Replaces the signed-in user's password. Does nothing when logged out.
    pub async fn update_password(&self, new_password: &str) -> Result<()> {
        let Some(user_id) = self.current_user_id().await else {
            tracing::debug!("Ignoring password change while logged out");
            return Ok(());
        };

        self.users
            .update_user(&user_id, UserPatch::password(new_password))
            .await?;
        tracing::info!("Password updated for {}", user_id);
        Ok(())
    }
}
