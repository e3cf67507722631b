//! Session domain module.
//!
//! Holds the login state model. The mutable store built on top of it lives in
//! the application layer.

mod model;

pub use model::SessionStatus;
