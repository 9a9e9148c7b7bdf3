//! Stage 3: albums. Each album picks one owning artist uniformly at random
//! from the previously generated artist set.

use super::text;
use crate::catalog::{Album, AlbumType, Artist};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Estimated per-album track count range, used before any track exists.
const TRACK_COUNT_ESTIMATE: std::ops::RangeInclusive<u32> = 4..=12;

/// Sampled average track duration range in seconds.
const AVG_TRACK_DURATION_SECS: std::ops::RangeInclusive<u32> = 120..=300;

const ALBUM_TYPES: &[AlbumType] = &[AlbumType::Album, AlbumType::Single, AlbumType::Ep];

/// Generates `count` albums referencing artists from `artists`.
///
/// With an empty artist slice this returns an empty vec rather than failing:
/// an album cannot exist without an artist.
///
/// `total_duration_secs` is an estimate (sampled track count times a sampled
/// average duration), not the sum of the durations of the tracks generated
/// later for this album. The two values are computed independently and never
/// reconciled.
pub fn generate_albums(artists: &[Artist], count: usize, rng: &mut impl Rng) -> Vec<Album> {
    (0..count)
        .filter_map(|_| {
            let artist = artists.choose(rng)?;
            let track_count_estimate = rng.random_range(TRACK_COUNT_ESTIMATE);
            let avg_duration = rng.random_range(AVG_TRACK_DURATION_SECS);
            Some(Album {
                id: text::entity_id(rng),
                title: text::random_title(rng),
                artist_id: artist.id.clone(),
                artist_name: artist.name.clone(),
                cover: text::random_image(rng, 300),
                released: text::random_past_timestamp(rng, 10 * 365),
                album_type: *ALBUM_TYPES.choose(rng).unwrap_or(&AlbumType::Album),
                tracks: Vec::new(),
                total_tracks: track_count_estimate as usize,
                total_duration_secs: track_count_estimate * avg_duration,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_artists;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn empty_artists_yield_empty_albums() {
        let mut rng = StdRng::seed_from_u64(3);
        let albums = generate_albums(&[], 5, &mut rng);
        assert!(albums.is_empty());
    }

    #[test]
    fn every_album_references_a_real_artist() {
        let mut rng = StdRng::seed_from_u64(3);
        let artists = generate_artists(4, &mut rng);
        let albums = generate_albums(&artists, 30, &mut rng);
        assert_eq!(albums.len(), 30);

        let artist_ids: HashSet<_> = artists.iter().map(|a| a.id.as_str()).collect();
        for album in &albums {
            assert!(artist_ids.contains(album.artist_id.as_str()));
            let owner = artists.iter().find(|a| a.id == album.artist_id).unwrap();
            assert_eq!(album.artist_name, owner.name);
        }
    }

    #[test]
    fn duration_estimate_is_count_times_average() {
        let mut rng = StdRng::seed_from_u64(3);
        let artists = generate_artists(2, &mut rng);
        for album in generate_albums(&artists, 50, &mut rng) {
            assert!((4..=12).contains(&album.total_tracks));
            let estimate = album.total_tracks as u32;
            assert!(album.total_duration_secs >= estimate * 120);
            assert!(album.total_duration_secs <= estimate * 300);
            assert!(album.tracks.is_empty());
        }
    }
}
