//! Derived catalog lists: search results, top picks, genre rails, saved movies.

use std::collections::BTreeSet;

use crate::movie::Movie;

/// Number of movies in the "top picks" rail.
pub const TOP_PICKS_LIMIT: usize = 5;

/// Genres shown as rails on the browse screen.
pub const FEATURED_GENRES: [&str; 2] = ["Drama", "Comedy"];

/// Number of movies previewed in a genre rail before "show more".
pub const GENRE_PREVIEW_LEN: usize = 3;

/// A genre rail: the first few matches plus the full match count.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreSection {
    pub genre: String,
    pub preview: Vec<Movie>,
    pub total: usize,
}

/// Read-only derivations over a fetched movie list and the live search text.
///
/// Every derivation starts from [`CatalogView::filtered`], so the search box
/// narrows all rails at once. Results keep the source order unless stated
/// otherwise.
#[derive(Debug, Clone, Copy)]
pub struct CatalogView<'a> {
    movies: &'a [Movie],
    search_text: &'a str,
}

impl<'a> CatalogView<'a> {
    pub fn new(movies: &'a [Movie], search_text: &'a str) -> Self {
        Self {
            movies,
            search_text,
        }
    }

    /// Movies whose title contains the trimmed search text, ignoring case.
    /// Blank search text returns the whole list.
    pub fn filtered(&self) -> Vec<&'a Movie> {
        let needle = self.search_text.trim();
        if needle.is_empty() {
            return self.movies.iter().collect();
        }

        let needle = needle.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Highest rated filtered movies, at most `limit` of them.
    ///
    /// Unknown ratings sort as zero. The sort is stable, so equal ratings keep
    /// their source order.
    pub fn top_picks(&self, limit: usize) -> Vec<&'a Movie> {
        let mut picks = self.filtered();
        picks.sort_by(|a, b| b.sort_rating().total_cmp(&a.sort_rating()));
        picks.truncate(limit);
        picks
    }

    /// Filtered movies with a genre containing `genre`, ignoring case.
    ///
    /// This is a substring match: "Drama" also selects "Dramatic".
    pub fn by_genre(&self, genre: &str) -> Vec<&'a Movie> {
        let needle = genre.to_lowercase();
        self.filtered()
            .into_iter()
            .filter(|movie| {
                movie
                    .genres
                    .iter()
                    .any(|candidate| candidate.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Filtered movies whose id is in `saved_ids`.
    pub fn saved_only(&self, saved_ids: &BTreeSet<String>) -> Vec<&'a Movie> {
        self.filtered()
            .into_iter()
            .filter(|movie| saved_ids.contains(&movie.id))
            .collect()
    }

    /// One rail per genre with the first `preview_len` matches.
    pub fn genre_sections(&self, genres: &[&str], preview_len: usize) -> Vec<GenreSection> {
        genres
            .iter()
            .map(|genre| {
                let matches = self.by_genre(genre);
                GenreSection {
                    genre: genre.to_string(),
                    total: matches.len(),
                    preview: matches.into_iter().take(preview_len).cloned().collect(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str, genres: &[&str], rating: Option<f64>) -> Movie {
        Movie::from_parts(
            id,
            Some(title.to_string()),
            None,
            Some(genres.iter().map(|g| g.to_string()).collect()),
            rating,
            None,
        )
    }

    fn sample() -> Vec<Movie> {
        vec![
            movie("m1", "Dune", &["Drama", "Sci-Fi"], Some(8.0)),
            movie("m2", "Dune: Part Two", &["Sci-Fi"], Some(8.6)),
            movie("m3", "The Mask", &["Comedy"], None),
            movie("m4", "Whiplash", &["Dramatic", "Music"], Some(8.5)),
            movie("m5", "Airplane!", &["Comedy"], Some(7.7)),
            movie("m6", "Paddington", &["Comedy", "Family"], Some(7.7)),
        ]
    }

    fn ids(movies: &[&Movie]) -> Vec<String> {
        movies.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn test_blank_search_returns_everything_in_order() {
        let movies = sample();
        for search in ["", "   ", "\t"] {
            let view = CatalogView::new(&movies, search);
            assert_eq!(ids(&view.filtered()), vec!["m1", "m2", "m3", "m4", "m5", "m6"]);
        }
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let movies = sample();
        let view = CatalogView::new(&movies, "  dUNE ");
        let results = view.filtered();
        assert_eq!(ids(&results), vec!["m1", "m2"]);
        assert!(results.iter().all(|m| m.title.to_lowercase().contains("dune")));
    }

    #[test]
    fn test_search_without_matches_is_empty() {
        let movies = sample();
        assert!(CatalogView::new(&movies, "zzz").filtered().is_empty());
    }

    #[test]
    fn test_top_picks_sorted_and_truncated() {
        let movies = sample();
        let view = CatalogView::new(&movies, "");
        let picks = view.top_picks(TOP_PICKS_LIMIT);

        assert_eq!(picks.len(), 5);
        assert_eq!(ids(&picks), vec!["m2", "m4", "m1", "m5", "m6"]);
        for pair in picks.windows(2) {
            assert!(pair[0].sort_rating() >= pair[1].sort_rating());
        }
    }

    #[test]
    fn test_top_picks_len_is_min_of_limit_and_filtered() {
        let movies = sample();
        let view = CatalogView::new(&movies, "dune");
        assert_eq!(view.top_picks(5).len(), 2);
        assert_eq!(view.top_picks(1).len(), 1);
        assert!(view.top_picks(0).is_empty());
    }

    #[test]
    fn test_top_picks_unknown_rating_sorts_as_zero() {
        let movies = vec![
            movie("a", "A", &[], None),
            movie("b", "B", &[], Some(0.0)),
            movie("c", "C", &[], Some(1.0)),
        ];
        let view = CatalogView::new(&movies, "");
        // "a" and "b" tie at zero and keep their original order.
        assert_eq!(ids(&view.top_picks(3)), vec!["c", "a", "b"]);
        assert_eq!(movies[0].rating, None);
    }

    #[test]
    fn test_by_genre_is_substring_match() {
        let movies = sample();
        let view = CatalogView::new(&movies, "");
        assert_eq!(ids(&view.by_genre("drama")), vec!["m1", "m4"]);
        assert_eq!(ids(&view.by_genre("COMEDY")), vec!["m3", "m5", "m6"]);
        assert!(view.by_genre("horror").is_empty());
    }

    #[test]
    fn test_by_genre_respects_search() {
        let movies = sample();
        let view = CatalogView::new(&movies, "whip");
        assert_eq!(ids(&view.by_genre("drama")), vec!["m4"]);
    }

    #[test]
    fn test_saved_only() {
        let movies = sample();
        let saved: BTreeSet<String> = ["m5", "m1", "missing"].iter().map(|s| s.to_string()).collect();

        let view = CatalogView::new(&movies, "");
        assert_eq!(ids(&view.saved_only(&saved)), vec!["m1", "m5"]);

        let view = CatalogView::new(&movies, "air");
        assert_eq!(ids(&view.saved_only(&saved)), vec!["m5"]);
    }

    #[test]
    fn test_genre_sections_preview_and_total() {
        let movies = sample();
        let view = CatalogView::new(&movies, "");
        let sections = view.genre_sections(&FEATURED_GENRES, 2);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].genre, "Drama");
        assert_eq!(sections[0].total, 2);
        assert_eq!(sections[1].genre, "Comedy");
        assert_eq!(sections[1].total, 3);
        assert_eq!(sections[1].preview.len(), 2);
        assert_eq!(sections[1].preview[0].id, "m3");
    }
}
