//! Movie domain model.

use reqwest::Url;

/// Title used when a record carries no usable name.
pub const UNTITLED: &str = "Untitled";

/// A catalog entry, normalized from one remote movie record.
///
/// Movies are rebuilt from scratch on every fetch and never mutated.
/// `rating` stays `None` when the source has no rating; substituting a default
/// is left to sorting and display code.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Record id, copied verbatim
    pub id: String,
    /// Never empty
    pub title: String,
    pub poster_url: Option<Url>,
    pub genres: Vec<String>,
    pub rating: Option<f64>,
    /// Free-form runtime text such as "2h 35m"
    pub duration: Option<String>,
}

impl Movie {
    /// Builds a movie from optional source values, applying the defaults:
    /// blank or missing name becomes [`UNTITLED`], an unparsable poster is dropped
    /// and missing genres become an empty list.
    pub fn from_parts(
        id: impl Into<String>,
        name: Option<String>,
        poster: Option<&str>,
        genres: Option<Vec<String>>,
        rating: Option<f64>,
        duration: Option<String>,
    ) -> Self {
        let title = name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());

        Self {
            id: id.into(),
            title,
            poster_url: poster.and_then(|raw| Url::parse(raw.trim()).ok()),
            genres: genres.unwrap_or_default(),
            rating,
            duration,
        }
    }

    /// First listed genre, shown as the movie's tag line.
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres.first().map(String::as_str)
    }

    /// Rating used for ordering: an unknown rating sorts as zero.
    pub fn sort_rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}
