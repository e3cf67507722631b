//! Email and password sign-in.

use crate::session_store::SessionStore;
use marquee_core::MarqueeError;
use marquee_core::user::{UserAccount, UserRepository};
use std::sync::Arc;
use thiserror::Error;

/// Why a sign-in attempt failed. The messages are shown to the user as-is.
#[derive(Debug, Error)]
pub enum SignInError {
    #[error("Email and password required.")]
    MissingCredentials,

    /// No account matched. Deliberately does not say which field was wrong.
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("{}", .0.user_message())]
    Backend(#[from] MarqueeError),
}

/// Checks credentials against the users table and starts a session.
pub struct SignInService {
    users: Arc<dyn UserRepository>,
}

impl SignInService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Signs in the account whose email (case-insensitive, trimmed) and
    /// password match, and logs it into `session`.
    pub async fn sign_in(
        &self,
        session: &SessionStore,
        email: &str,
        password: &str,
    ) -> Result<UserAccount, SignInError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(SignInError::MissingCredentials);
        }

        let users = self.users.list_users().await?;
        let Some(user) = users
            .into_iter()
            .find(|user| user.matches_credentials(email, password))
        else {
            tracing::info!("Sign-in rejected for {}", email.trim());
            return Err(SignInError::InvalidCredentials);
        };

        session.login(user.clone()).await?;
        Ok(user)
    }
}
