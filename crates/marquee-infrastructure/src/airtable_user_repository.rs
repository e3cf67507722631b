//! Airtable-backed UserRepository implementation

use crate::airtable::dto::{UserFieldsPatch, user_from_record};
use marquee_core::error::Result;
use marquee_core::record::RecordClient;
use marquee_core::user::{UserAccount, UserPatch, UserRepository};
use std::sync::Arc;

/// User repository over the `users` table.
///
/// Updates are sent as partial patches and never merged into a local copy.
pub struct AirtableUserRepository {
    client: Arc<dyn RecordClient>,
    table: String,
}

impl AirtableUserRepository {
    pub fn new(client: Arc<dyn RecordClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for AirtableUserRepository {
    async fn list_users(&self) -> Result<Vec<UserAccount>> {
        let records = self.client.fetch(&self.table).await?;
        let users = records
            .into_iter()
            .map(user_from_record)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} users", users.len());
        Ok(users)
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<()> {
        if patch.is_empty() {
            tracing::debug!("Skipping empty update for user {}", id);
            return Ok(());
        }

        let fields = UserFieldsPatch::from(patch).into_fields()?;
        self.client.patch(&self.table, id, fields).await?;

        tracing::info!("Updated user {}", id);
        Ok(())
    }
}
