//! Reads the API token file, `<config dir>/marquee/secret.json`.

use crate::paths::{MarqueePaths, PathError, ServiceType};
use marquee_core::MarqueeError;
use marquee_core::secret::SecretConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum SecretStorageError {
    /// The secret file location could not be resolved.
    Path(PathError),
    Read { path: PathBuf, source: io::Error },
    /// The file is not a JSON object of string values.
    Malformed { path: PathBuf, source: serde_json::Error },
}

impl std::fmt::Display for SecretStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(e) => write!(f, "{}", e),
            Self::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            // serde_json reports line and column only, never the offending value
            Self::Malformed { path, source } => {
                write!(f, "{} is not valid JSON: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SecretStorageError {}

impl From<PathError> for SecretStorageError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

impl From<SecretStorageError> for MarqueeError {
    fn from(err: SecretStorageError) -> Self {
        MarqueeError::configuration(err.to_string())
    }
}

/// Read-only access to `secret.json`.
///
/// Does NOT write the file, validate the token, or decrypt anything; the
/// file is plaintext JSON.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    pub fn new(paths: &MarqueePaths) -> Result<Self, SecretStorageError> {
        Ok(Self::with_path(paths.get_path(ServiceType::Secret)?))
    }

    /// Creates a storage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parses the secret file. `Ok(None)` means there is no file.
    pub fn load(&self) -> Result<Option<SecretConfig>, SecretStorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SecretStorageError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| SecretStorageError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether group or other users can read the file.
    ///
    /// Always `false` off Unix, or when the file is missing.
    pub fn is_shared(&self) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::metadata(&self.path)
                .map(|meta| meta.permissions().mode() & 0o077 != 0)
                .unwrap_or(false)
        }
        #[cfg(not(unix))]
        {
            false
        }
    }
}
