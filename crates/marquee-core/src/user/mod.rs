//! User domain module.
//!
//! This module contains user account models and the repository interface.
//!
//! # Module Structure
//!
//! - `model`: `UserAccount`, `UserPatch` and `ProfileUpdate`
//! - `repository`: repository trait for listing and updating users
//!
//! # Usage
//!
//! ```ignore
//! use marquee_core::user::{UserAccount, UserPatch, UserRepository};
//! ```

mod model;
mod repository;

// Re-export public API
pub use model::{DEFAULT_DISPLAY_NAME, ProfileUpdate, UserAccount, UserPatch};
pub use repository::UserRepository;
