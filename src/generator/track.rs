//! Stage 4: tracks. Consumes album shells, returns new album values with
//! their ordered track id lists filled in plus the generated tracks.

use super::text;
use crate::catalog::{Album, Track};
use rand::Rng;

/// Fixed per-album track templates: title plus audio file stem. The same
/// templates are cycled across every album, so track titles repeat between
/// albums. That repetition is a known simplification, not something to
/// deduplicate.
pub const TRACK_TEMPLATES: &[(&str, &str)] = &[
    ("Opening Track", "01-opening"),
    ("Middle Track", "02-middle"),
    ("Closing Track", "03-closing"),
];

const DURATION_SECS: std::ops::RangeInclusive<u32> = 90..=360;
const EXPLICIT_PROBABILITY: f64 = 0.2;
const PLAYABLE_PROBABILITY: f64 = 0.9;

/// Generates the tracks for every album.
///
/// Album construction is two-phase: this consumes the albums generated by
/// the album stage and returns new album values with `tracks` populated in
/// track-number order and `total_tracks` set to the real list length. Each
/// track inherits artist id/name and album id/title/cover from its owning
/// album. An empty album vec yields `(vec![], vec![])`.
pub fn generate_tracks(albums: Vec<Album>, rng: &mut impl Rng) -> (Vec<Album>, Vec<Track>) {
    let mut filled_albums = Vec::with_capacity(albums.len());
    let mut tracks = Vec::with_capacity(albums.len() * TRACK_TEMPLATES.len());

    for album in albums {
        let mut track_ids = Vec::with_capacity(TRACK_TEMPLATES.len());
        for (index, (title, file_stem)) in TRACK_TEMPLATES.iter().enumerate() {
            let track = Track {
                id: text::entity_id(rng),
                title: (*title).to_string(),
                artist_id: album.artist_id.clone(),
                artist_name: album.artist_name.clone(),
                album_id: album.id.clone(),
                album_title: album.title.clone(),
                cover: album.cover.clone(),
                audio_url: text::audio_url(&album.id, file_stem),
                duration_secs: rng.random_range(DURATION_SECS),
                explicit: rng.random_bool(EXPLICIT_PROBABILITY),
                popularity: rng.random_range(0..=100),
                track_number: index as u32 + 1,
                playable: rng.random_bool(PLAYABLE_PROBABILITY),
            };
            track_ids.push(track.id.clone());
            tracks.push(track);
        }
        let total_tracks = track_ids.len();
        filled_albums.push(Album {
            tracks: track_ids,
            total_tracks,
            ..album
        });
    }

    (filled_albums, tracks)
}
