//! Plain-text rendering of catalog rows.

use marquee_core::movie::Movie;
use std::collections::BTreeSet;

/// One catalog row: saved marker, id, title, rating, genres, runtime.
pub fn movie_line(movie: &Movie, saved_ids: &BTreeSet<String>) -> String {
    let marker = if saved_ids.contains(&movie.id) { "*" } else { " " };
    let rating = movie
        .rating
        .map(|rating| format!("{:.1}", rating))
        .unwrap_or_else(|| "-".to_string());

    let mut line = format!("{} {:<18} {:<40} {:>4}", marker, movie.id, movie.title, rating);
    if !movie.genres.is_empty() {
        line.push_str("  ");
        line.push_str(&movie.genres.join(", "));
    }
    if let Some(duration) = &movie.duration {
        line.push_str("  (");
        line.push_str(duration);
        line.push(')');
    }
    line
}
