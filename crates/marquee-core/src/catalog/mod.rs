//! Catalog view-state module.
//!
//! - `view`: pure derivations over a fetched movie list
//! - `load_state`: the `Idle → Loading → Loaded | Failed` cycle of a fetch

mod load_state;
mod view;

pub use load_state::LoadState;
pub use view::{
    CatalogView, FEATURED_GENRES, GENRE_PREVIEW_LEN, GenreSection, TOP_PICKS_LIMIT,
};
