//! Secret service implementation.
//!
//! Resolves the API token from `secret.json`, falling back to the
//! `AIRTABLE_API_KEY` environment variable.

use crate::paths::MarqueePaths;
use crate::storage::SecretStorage;
use marquee_core::error::Result;
use marquee_core::secret::{API_KEY_NAME, SecretConfig, SecretService};
use std::sync::{Arc, RwLock};

/// Service for loading secret configuration.
///
/// Secrets are read once and cached; later calls return the cached value.
///
/// # Example
///
/// ```ignore
/// use marquee_infrastructure::SecretServiceImpl;
/// use marquee_core::secret::SecretService;
///
/// let service = SecretServiceImpl::from_environment(&paths)?;
/// let token = service.load_secrets().await?.api_key().map(str::to_string);
/// ```
#[derive(Clone)]
pub struct SecretServiceImpl {
    storage: Arc<SecretStorage>,
    /// Token taken from the environment, used when the file has none.
    env_api_key: Option<String>,
    secrets: Arc<RwLock<Option<SecretConfig>>>,
}

impl SecretServiceImpl {
    /// Creates a service for the secret file under `paths`, with the environment
    /// variable as fallback.
    pub fn from_environment(paths: &MarqueePaths) -> Result<Self> {
        let storage = SecretStorage::new(paths)?;
        Ok(Self::new(storage, std::env::var(API_KEY_NAME).ok()))
    }

    pub fn new(storage: SecretStorage, env_api_key: Option<String>) -> Self {
        Self {
            storage: Arc::new(storage),
            env_api_key,
            secrets: Arc::new(RwLock::new(None)),
        }
    }

    fn load_secrets_internal(&self) -> Result<SecretConfig> {
        if let Ok(cached) = self.secrets.read() {
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let mut loaded = match self.storage.load()? {
            Some(config) => {
                if self.storage.is_shared() {
                    tracing::warn!(
                        "{} is readable by other users; restrict it with chmod 600",
                        self.storage.path().display()
                    );
                }
                config
            }
            None => {
                tracing::debug!("No secret file at {}", self.storage.path().display());
                SecretConfig::default()
            }
        };

        if loaded.api_key().is_none() {
            if let Some(env_key) = self.env_api_key.as_deref() {
                tracing::debug!("Using {} from environment", API_KEY_NAME);
                loaded.api_key = Some(env_key.to_string());
            }
        }

        if loaded.api_key().is_none() {
            tracing::warn!(
                "{} not found in {} or environment; remote calls will fail",
                API_KEY_NAME,
                self.storage.path().display()
            );
        }

        if let Ok(mut cache) = self.secrets.write() {
            *cache = Some(loaded.clone());
        }

        Ok(loaded)
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        self.load_secrets_internal()
    }
}
