//! Movie domain module.
//!
//! - `model`: the normalized [`Movie`] entity
//! - `repository`: repository trait for listing movies

mod model;
mod repository;

// Re-export public API
pub use model::{Movie, UNTITLED};
pub use repository::MovieRepository;
