//! Secret management service trait.
//!
//! Defines the interface for loading the API token used by the records client.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Key under which the API token is stored, both in `secret.json` and in the
/// environment.
pub const API_KEY_NAME: &str = "AIRTABLE_API_KEY";

/// Secret configuration loaded from local storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(rename = "AIRTABLE_API_KEY", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl SecretConfig {
    /// Returns the token, treating an empty or blank value as missing.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Service for loading secret configuration.
///
/// # Security Note
///
/// Implementations must never log secrets or put them into error messages.
#[async_trait::async_trait]
pub trait SecretService: Send + Sync {
    /// Loads the secret configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(SecretConfig)`: Secrets loaded; the token itself may still be absent
    /// - `Err(MarqueeError)`: The secret source exists but could not be read
    async fn load_secrets(&self) -> Result<SecretConfig>;
}
