//! Loads `config.toml`.

use crate::paths::{MarqueePaths, ServiceType};
use crate::storage::AtomicTomlFile;
use marquee_core::config::AppConfig;
use marquee_core::error::Result;
use std::path::PathBuf;

/// Reads the application configuration.
///
/// A missing or empty file yields [`AppConfig::default`]; keys left out of the
/// file keep their defaults.
pub struct ConfigService {
    file: AtomicTomlFile<AppConfig>,
}

impl ConfigService {
    pub fn new(paths: &MarqueePaths) -> Result<Self> {
        let path = paths.get_path(ServiceType::Config)?;
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn load(&self) -> Result<AppConfig> {
        let config = self.file.load()?.unwrap_or_default();
        tracing::debug!(
            "Loaded config from {} (tables at {})",
            self.file.path().display(),
            config.remote.tables_url()
        );
        Ok(config)
    }
}
