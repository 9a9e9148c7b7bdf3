//! Stage 2: base artist records. Relational fields stay empty until the
//! enrichment stage.

use super::text;
use crate::catalog::Artist;
use rand::seq::IndexedRandom;
use rand::Rng;

pub fn generate_artists(count: usize, rng: &mut impl Rng) -> Vec<Artist> {
    (0..count)
        .map(|_| {
            let genre_count = rng.random_range(1..=3);
            let genres = text::GENRES
                .choose_multiple(rng, genre_count)
                .map(|g| (*g).to_string())
                .collect();
            Artist {
                id: text::entity_id(rng),
                name: text::random_artist_name(rng),
                portrait: text::random_image(rng, 320),
                genres,
                album_ids: Vec::new(),
                track_ids: Vec::new(),
            }
        })
        .collect()
}
