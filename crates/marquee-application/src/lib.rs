//! Application layer for Marquee.
//!
//! Stateful use cases on top of the domain repositories:
//! the signed-in session with its saved movies, sign-in, and the catalog
//! loading cycle.

pub mod catalog;
pub mod session_store;
pub mod sign_in;

pub use catalog::CatalogViewModel;
pub use session_store::SessionStore;
pub use sign_in::{SignInError, SignInService};
