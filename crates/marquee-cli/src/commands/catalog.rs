use anyhow::{Result, bail};
use marquee_core::catalog::{FEATURED_GENRES, GENRE_PREVIEW_LEN, LoadState, TOP_PICKS_LIMIT};

use super::bootstrap::AppContext;
use super::render::movie_line;

/// Fetches the catalog, failing with the load error if nothing could be loaded.
async fn load(app: &AppContext, search: Option<String>) -> Result<()> {
    if let LoadState::Failed(message) = app.catalog.refresh().await {
        bail!(message);
    }
    if let Some(search) = search {
        app.catalog.set_search_text(search).await;
    }
    Ok(())
}

pub async fn movies(
    app: &AppContext,
    search: Option<String>,
    genre: Option<String>,
    top: Option<usize>,
    saved: bool,
) -> Result<()> {
    load(app, search).await?;

    let movies = if saved {
        app.catalog.saved_only(&app.session).await
    } else if let Some(genre) = genre {
        app.catalog.by_genre(&genre).await
    } else if let Some(limit) = top {
        app.catalog.top_picks(limit).await
    } else {
        app.catalog.filtered().await
    };

    if movies.is_empty() {
        println!("No movies found.");
        return Ok(());
    }

    let saved_ids = app.session.saved_movie_ids().await;
    for movie in &movies {
        println!("{}", movie_line(movie, &saved_ids));
    }
    Ok(())
}

pub async fn browse(app: &AppContext, search: Option<String>) -> Result<()> {
    load(app, search).await?;
    let saved_ids = app.session.saved_movie_ids().await;

    println!("Top picks");
    for movie in app.catalog.top_picks(TOP_PICKS_LIMIT).await {
        println!("{}", movie_line(&movie, &saved_ids));
    }

    for section in app
        .catalog
        .genre_sections(&FEATURED_GENRES, GENRE_PREVIEW_LEN)
        .await
    {
        println!();
        println!("{} ({})", section.genre, section.total);
        for movie in &section.preview {
            println!("{}", movie_line(movie, &saved_ids));
        }
        let hidden = section.total - section.preview.len();
        if hidden > 0 {
            println!("  ... {} more", hidden);
        }
    }
    Ok(())
}

pub async fn toggle_save(app: &AppContext, movie_id: &str) -> Result<()> {
    if app.session.toggle_save(movie_id).await? {
        println!("Saved {}", movie_id);
    } else {
        println!("Removed {} from saved movies", movie_id);
    }
    Ok(())
}
