//! User repository trait.

use super::model::{UserAccount, UserPatch};
use crate::error::Result;

/// An abstract repository for user accounts.
///
/// Updates are not merged locally. After `update_user` the caller re-lists
/// users and looks the account up by id to observe the change.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists every user account.
    async fn list_users(&self) -> Result<Vec<UserAccount>>;

    /// Sends the populated fields of `patch` for the user `id`.
    ///
    /// # Arguments
    ///
    /// * `id` - Record id of the user
    /// * `patch` - Fields to change; `None` fields are not sent
    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<()>;
}
