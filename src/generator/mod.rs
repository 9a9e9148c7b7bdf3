//! The synthetic catalog pipeline.
//!
//! Stages run strictly in dependency order: categories, artists, albums,
//! tracks (which fills album track lists), users, playlists, artist
//! enrichment, user enrichment. Each stage is a synchronous transform over
//! in-memory vecs; a stage whose required input is empty returns an empty
//! output instead of failing, and the orchestrator just propagates that
//! downstream. Randomness is always threaded in explicitly, so a seeded rng
//! reproduces every id and selection (timestamps are wall-clock relative).

mod album;
mod artist;
mod category;
mod config;
mod enrichment;
mod playlist;
mod text;
mod track;
mod user;

pub use album::generate_albums;
pub use artist::generate_artists;
pub use category::generate_categories;
pub use config::GeneratorConfig;
pub use enrichment::{enrich_artists, enrich_users};
pub use playlist::generate_playlists;
pub use track::{generate_tracks, TRACK_TEMPLATES};
pub use user::generate_users;

use crate::dataset::Dataset;
use rand::Rng;
use tracing::debug;

/// Runs the full pipeline and returns the composed dataset.
///
/// Sequencing only: all logic lives in the individual stages. Degraded
/// (empty) stage outputs flow through without special-casing, so the result
/// is always a well-formed, possibly empty dataset.
pub fn generate(config: &GeneratorConfig, rng: &mut impl Rng) -> Dataset {
    let categories = generate_categories(config.categories, rng);
    debug!(count = categories.len(), "generated categories");

    let artists = generate_artists(config.artists, rng);
    debug!(count = artists.len(), "generated artists");

    let albums = generate_albums(&artists, config.albums, rng);
    debug!(count = albums.len(), "generated albums");

    let (albums, tracks) = generate_tracks(albums, rng);
    debug!(count = tracks.len(), "generated tracks");

    let users = generate_users(config.users, rng);
    debug!(count = users.len(), "generated users");

    let playlists = generate_playlists(&users, &tracks, config.playlists, rng);
    debug!(count = playlists.len(), "generated playlists");

    let artists = enrich_artists(artists, &albums, &tracks);
    let users = enrich_users(users, &artists, &playlists, rng);

    let dataset = Dataset {
        categories,
        artists,
        albums,
        tracks,
        users,
        playlists,
    };

    #[cfg(debug_assertions)]
    if let Err(err) = crate::validation::validate(&dataset) {
        panic!("generated dataset failed validation: {err}");
    }

    dataset
}
