//! Unified path management for marquee configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/marquee/           # Config directory (platform default via `dirs`)
//! ├── config.toml              # Remote API location, log level
//! ├── secret.json              # API token
//! ├── state.toml               # Saved movies and the session restore key
//! └── logs/                    # Application logs
//!     └── marquee.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "marquee";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for marquee_core::MarqueeError {
    fn from(err: PathError) -> Self {
        marquee_core::MarqueeError::configuration(err.to_string())
    }
}

/// Files and directories managed by marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Config,
    Secret,
    State,
    Logs,
}

impl ServiceType {
    fn relative_path(self) -> &'static str {
        match self {
            ServiceType::Config => "config.toml",
            ServiceType::Secret => "secret.json",
            ServiceType::State => "state.toml",
            ServiceType::Logs => "logs",
        }
    }
}

/// Path resolver rooted at the marquee config directory.
///
/// `base_path` replaces the platform config directory entirely, which keeps
/// tests and `--config-dir` runs away from the user's real files.
#[derive(Debug, Clone, Default)]
pub struct MarqueePaths {
    base_path: Option<PathBuf>,
}

impl MarqueePaths {
    pub fn new(base_path: Option<&Path>) -> Self {
        Self {
            base_path: base_path.map(Path::to_path_buf),
        }
    }

    /// Returns the marquee configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/marquee/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_path {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Returns the path of a managed file or directory.
    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(service.relative_path()))
    }
}
