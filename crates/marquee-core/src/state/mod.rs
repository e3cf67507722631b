//! Durable application state: saved movies and the session restore key.

pub mod model;
pub mod repository;

pub use model::PersistedState;
pub use repository::StateRepository;
