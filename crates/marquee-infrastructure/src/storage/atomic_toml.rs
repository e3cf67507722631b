//! Atomic TOML file access.
//!
//! Writes go to a sibling temp file which is fsynced and renamed over the
//! target, so readers only ever see a complete document. Read-modify-write
//! cycles hold an exclusive `fs2` lock on `<file>.lock`, which keeps two
//! `marquee` processes from losing each other's changes.

use marquee_core::MarqueeError;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Failure while reading or writing a TOML document, with the file involved.
#[derive(Debug)]
pub enum AtomicTomlError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
    Render(toml::ser::Error),
    Lock { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for AtomicTomlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Parse { path, source } => {
                write!(f, "{} is not valid TOML: {}", path.display(), source)
            }
            Self::Render(source) => write!(f, "Failed to render TOML: {}", source),
            Self::Lock { path, source } => {
                write!(f, "Failed to lock {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AtomicTomlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::Lock { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Render(source) => Some(source),
        }
    }
}

impl From<AtomicTomlError> for MarqueeError {
    fn from(err: AtomicTomlError) -> Self {
        match err {
            AtomicTomlError::Parse { .. } | AtomicTomlError::Render(_) => {
                MarqueeError::Serialization {
                    format: "TOML".to_string(),
                    message: err.to_string(),
                }
            }
            AtomicTomlError::Io { .. } | AtomicTomlError::Lock { .. } => {
                MarqueeError::io(err.to_string())
            }
        }
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> AtomicTomlError + '_ {
    move |source| AtomicTomlError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Typed handle to a TOML document on disk.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _document: PhantomData<fn() -> T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _document: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the document. A missing or blank file is `None`.
    pub fn load(&self) -> Result<Option<T>, AtomicTomlError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&self.path)(e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| AtomicTomlError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Replaces the document with `data`, creating parent directories.
    pub fn save(&self, data: &T) -> Result<(), AtomicTomlError> {
        let rendered = toml::to_string_pretty(data).map_err(AtomicTomlError::Render)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        let tmp_path = self.sibling(".tmp");
        let mut tmp = File::create(&tmp_path).map_err(io_error(&tmp_path))?;
        tmp.write_all(rendered.as_bytes())
            .and_then(|()| tmp.sync_all())
            .map_err(io_error(&tmp_path))?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).map_err(io_error(&self.path))
    }

    /// Loads the document (or `default_value` when there is none), applies
    /// `change` and writes the result, all under the file lock.
    ///
    /// Returns the document as written.
    pub fn update<F>(&self, default_value: T, change: F) -> Result<T, AtomicTomlError>
    where
        F: FnOnce(&mut T),
    {
        let _guard = LockGuard::acquire(&self.sibling(".lock"))?;

        let mut data = self.load()?.unwrap_or(default_value);
        change(&mut data);
        self.save(&data)?;

        Ok(data)
    }

    /// `.<file name><suffix>` next to the document.
    fn sibling(&self, suffix: &str) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.with_file_name(format!(".{}{}", name, suffix))
    }
}

/// Exclusive advisory lock, released when dropped.
struct LockGuard {
    file: File,
}

impl LockGuard {
    fn acquire(lock_path: &Path) -> Result<Self, AtomicTomlError> {
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(lock_path)
            .map_err(io_error(lock_path))?;

        fs2::FileExt::lock_exclusive(&file).map_err(|source| AtomicTomlError::Lock {
            path: lock_path.to_path_buf(),
            source,
        })?;

        Ok(Self { file })
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
