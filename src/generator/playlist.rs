//! Stage 6: playlists. Consumes users (owners) and tracks (members).

use super::text;
use crate::catalog::Track;
use crate::user::{Playlist, User};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Requested playlist size before capping at the available track count.
const PLAYLIST_SIZE: std::ops::RangeInclusive<usize> = 10..=50;

const PUBLIC_PROBABILITY: f64 = 0.7;
const COLLABORATIVE_PROBABILITY: f64 = 0.2;
const MAX_FOLLOWERS: u32 = 10_000;
const MAX_PLAYLIST_AGE_DAYS: u32 = 2 * 365;

/// Generates `count` playlists, each owned by a uniformly chosen user and
/// holding a duplicate-free subset of the given tracks.
///
/// If either input is empty this returns an empty vec: a playlist needs an
/// owner and at least one candidate track.
pub fn generate_playlists(
    users: &[User],
    tracks: &[Track],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Playlist> {
    if tracks.is_empty() {
        return Vec::new();
    }
    (0..count)
        .filter_map(|_| {
            let owner = users.choose(rng)?;
            let size = rng.random_range(PLAYLIST_SIZE).min(tracks.len());
            let track_ids = tracks
                .choose_multiple(rng, size)
                .map(|t| t.id.clone())
                .collect::<Vec<_>>();
            Some(Playlist {
                id: text::entity_id(rng),
                name: text::random_title(rng),
                description: text::random_description(rng),
                cover: text::random_image(rng, 300),
                owner_id: owner.id.clone(),
                owner_name: owner.name.clone(),
                public: rng.random_bool(PUBLIC_PROBABILITY),
                collaborative: rng.random_bool(COLLABORATIVE_PROBABILITY),
                total_tracks: track_ids.len(),
                tracks: track_ids,
                followers: rng.random_range(0..=MAX_FOLLOWERS),
                created: text::random_past_timestamp(rng, MAX_PLAYLIST_AGE_DAYS),
            })
        })
        .collect()
}
