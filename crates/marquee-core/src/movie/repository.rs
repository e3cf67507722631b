//! Movie repository trait.

use super::model::Movie;
use crate::error::Result;

/// Read access to the movie catalog.
///
/// There is no local caching: every call re-fetches and re-maps the remote
/// collection.
#[async_trait::async_trait]
pub trait MovieRepository: Send + Sync {
    /// Lists every movie in the catalog, in source order.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Movie>)`: The mapped movies
    /// - `Err(MarqueeError)`: Configuration, transport, remote or decode failure
    async fn list_movies(&self) -> Result<Vec<Movie>>;
}
