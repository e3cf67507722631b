mod common;

use common::{GatedMovies, InMemoryState, InMemoryUsers, StaticMovies, movie};
use marquee_application::{CatalogViewModel, SessionStore};
use marquee_core::MarqueeError;
use marquee_core::catalog::{FEATURED_GENRES, GENRE_PREVIEW_LEN, LoadState, TOP_PICKS_LIMIT};
use marquee_core::movie::Movie;
use std::sync::Arc;

fn catalog() -> Vec<Movie> {
    vec![
        movie("m1", "Dune", &["Drama", "Sci-Fi"], Some(8.0)),
        movie("m2", "Dune: Part Two", &["Sci-Fi"], Some(8.6)),
        movie("m3", "The Mask", &["Comedy"], None),
        movie("m4", "Whiplash", &["Drama", "Music"], Some(8.5)),
    ]
}

fn ids(movies: &[Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.id.as_str()).collect()
}

#[tokio::test]
async fn test_refresh_loads_movies() {
    let vm = CatalogViewModel::new(Arc::new(StaticMovies::ok(catalog())));
    assert_eq!(vm.load_state().await, LoadState::Idle);

    assert_eq!(vm.refresh().await, LoadState::Loaded);
    assert_eq!(vm.movies().await.len(), 4);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_movies() {
    let repo = Arc::new(StaticMovies::ok(catalog()));
    let vm = CatalogViewModel::new(repo.clone());
    vm.refresh().await;

    repo.set(Err(MarqueeError::remote(500, "boom")));
    let state = vm.refresh().await;

    assert_eq!(state.error_message(), Some("Server returned status 500: boom"));
    assert_eq!(vm.movies().await.len(), 4);

    // Retry after the failure
    repo.set(Ok(vec![movie("m9", "Heat", &["Crime"], Some(8.3))]));
    assert_eq!(vm.refresh().await, LoadState::Loaded);
    assert_eq!(ids(&vm.movies().await), vec!["m9"]);
}

#[tokio::test]
async fn test_refresh_is_loading_until_response_arrives() {
    let (repo, mut gates, mut started) = GatedMovies::new(1);
    let vm = Arc::new(CatalogViewModel::new(Arc::new(repo)));

    let pending = tokio::spawn({
        let vm = vm.clone();
        async move { vm.refresh().await }
    });
    started.recv().await.unwrap();
    assert!(vm.load_state().await.is_loading());

    gates.remove(0).send(Ok(catalog())).unwrap();
    assert_eq!(pending.await.unwrap(), LoadState::Loaded);
}

#[tokio::test]
async fn test_stale_response_does_not_overwrite_newer_one() {
    let (repo, mut gates, mut started) = GatedMovies::new(2);
    let vm = Arc::new(CatalogViewModel::new(Arc::new(repo)));

    let older = tokio::spawn({
        let vm = vm.clone();
        async move { vm.refresh().await }
    });
    started.recv().await.unwrap();

    let newer = tokio::spawn({
        let vm = vm.clone();
        async move { vm.refresh().await }
    });
    started.recv().await.unwrap();

    let newer_gate = gates.remove(1);
    let older_gate = gates.remove(0);

    newer_gate.send(Ok(catalog())).unwrap();
    assert_eq!(newer.await.unwrap(), LoadState::Loaded);

    older_gate
        .send(Ok(vec![movie("old", "Old", &[], None)]))
        .unwrap();
    assert_eq!(older.await.unwrap(), LoadState::Loaded);

    assert_eq!(ids(&vm.movies().await), vec!["m1", "m2", "m3", "m4"]);
}

#[tokio::test]
async fn test_stale_failure_does_not_mark_newer_load_failed() {
    let (repo, mut gates, mut started) = GatedMovies::new(2);
    let vm = Arc::new(CatalogViewModel::new(Arc::new(repo)));

    let older = tokio::spawn({
        let vm = vm.clone();
        async move { vm.refresh().await }
    });
    started.recv().await.unwrap();
    let newer = tokio::spawn({
        let vm = vm.clone();
        async move { vm.refresh().await }
    });
    started.recv().await.unwrap();

    gates.remove(0).send(Err(MarqueeError::transport("timeout"))).unwrap();
    older.await.unwrap();
    assert!(vm.load_state().await.is_loading());

    gates.remove(0).send(Ok(catalog())).unwrap();
    assert_eq!(newer.await.unwrap(), LoadState::Loaded);
    assert_eq!(vm.load_state().await, LoadState::Loaded);
}

#[tokio::test]
async fn test_search_narrows_every_list() {
    let vm = CatalogViewModel::new(Arc::new(StaticMovies::ok(catalog())));
    vm.refresh().await;

    vm.set_search_text("  DUNE").await;
    assert_eq!(vm.search_text().await, "  DUNE");
    assert_eq!(ids(&vm.filtered().await), vec!["m1", "m2"]);
    assert_eq!(ids(&vm.top_picks(TOP_PICKS_LIMIT).await), vec!["m2", "m1"]);
    assert_eq!(ids(&vm.by_genre("drama").await), vec!["m1"]);

    vm.set_search_text("").await;
    assert_eq!(ids(&vm.top_picks(2).await), vec!["m2", "m4"]);
    assert_eq!(vm.movies().await.len(), 4);
}

#[tokio::test]
async fn test_saved_only_uses_session_saves() {
    let vm = CatalogViewModel::new(Arc::new(StaticMovies::ok(catalog())));
    vm.refresh().await;
    let session = SessionStore::open(
        Arc::new(InMemoryUsers::default()),
        Arc::new(InMemoryState::default()),
    )
    .await;

    assert!(vm.saved_only(&session).await.is_empty());

    session.toggle_save("m4").await.unwrap();
    session.toggle_save("m1").await.unwrap();
    assert_eq!(ids(&vm.saved_only(&session).await), vec!["m1", "m4"]);

    vm.set_search_text("whip").await;
    assert_eq!(ids(&vm.saved_only(&session).await), vec!["m4"]);
}

#[tokio::test]
async fn test_genre_sections() {
    let vm = CatalogViewModel::new(Arc::new(StaticMovies::ok(catalog())));
    vm.refresh().await;

    let sections = vm.genre_sections(&FEATURED_GENRES, GENRE_PREVIEW_LEN).await;
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].genre, "Drama");
    assert_eq!(sections[0].total, 2);
    assert_eq!(ids(&sections[0].preview), vec!["m1", "m4"]);
    assert_eq!(sections[1].genre, "Comedy");
    assert_eq!(ids(&sections[1].preview), vec!["m3"]);
}

#[tokio::test]
async fn test_dune_genre_lookup() {
    let dune = movie("r1", "Dune", &["Drama", "Sci-Fi"], Some(8.0));
    let vm = CatalogViewModel::new(Arc::new(StaticMovies::ok(vec![dune])));
    vm.refresh().await;

    assert_eq!(ids(&vm.by_genre("drama").await), vec!["r1"]);
    assert!(vm.by_genre("comedy").await.is_empty());
}
