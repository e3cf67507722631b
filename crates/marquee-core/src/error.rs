//! Error types for the Marquee application.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for the entire Marquee application.
///
/// The first four variants cover the remote records API (credentials, network,
/// HTTP status, payload shape). The rest are raised by local storage.
#[derive(Error, Debug, Clone, Serialize)]
pub enum MarqueeError {
    /// Missing or invalid configuration, most often the API token.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network-level failure (connect, DNS, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote service answered with a non-2xx status
    #[error("Remote error: status {status}: {body}")]
    Remote { status: u16, body: String },

    /// The response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error of local files
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MarqueeError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Remote error from an HTTP status and the raw response body
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            body: body.into(),
        }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns the HTTP status for remote errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text shown to the user when an operation fails.
    ///
    /// Decode failures collapse into a generic message; the details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration(message) | Self::Transport(message) => message.clone(),
            Self::Remote { status, body } => {
                format!("Server returned status {}: {}", status, body)
            }
            Self::Decode(_) => "Unexpected response from server".to_string(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for MarqueeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for MarqueeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for MarqueeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for MarqueeError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, MarqueeError>`.
pub type Result<T> = std::result::Result<T, MarqueeError>;
