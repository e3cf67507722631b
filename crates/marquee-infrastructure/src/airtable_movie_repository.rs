//! Airtable-backed MovieRepository implementation

use crate::airtable::dto::movie_from_record;
use marquee_core::error::Result;
use marquee_core::movie::{Movie, MovieRepository};
use marquee_core::record::RecordClient;
use std::sync::Arc;

/// Movie repository reading the `movies` table.
///
/// Responsibilities:
/// - Fetch the raw records through a [`RecordClient`]
/// - Map them into [`Movie`] entities
///
/// Does NOT:
/// - Cache results (every call re-fetches)
/// - Retry failed requests
pub struct AirtableMovieRepository {
    client: Arc<dyn RecordClient>,
    table: String,
}

impl AirtableMovieRepository {
    pub fn new(client: Arc<dyn RecordClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait::async_trait]
impl MovieRepository for AirtableMovieRepository {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        let records = self.client.fetch(&self.table).await?;
        let movies = records
            .into_iter()
            .map(movie_from_record)
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Loaded {} movies", movies.len());
        Ok(movies)
    }
}
