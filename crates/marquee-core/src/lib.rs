pub mod catalog;
pub mod config;
pub mod error;
pub mod movie;
pub mod record;
pub mod secret;
pub mod session;
pub mod state;
pub mod user;

// Re-export common error type
pub use error::MarqueeError;
