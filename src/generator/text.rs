//! Word pools and random value builders shared by the generator stages.

use crate::catalog::Image;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand_distr::Alphanumeric;

const ADJECTIVES: &[&str] = &[
    "Midnight", "Electric", "Golden", "Silent", "Velvet", "Neon", "Broken", "Distant", "Hollow",
    "Crimson", "Fading", "Restless", "Wandering", "Frozen", "Burning", "Endless",
];

const NOUNS: &[&str] = &[
    "Echo", "Horizon", "River", "Mirror", "Garden", "Highway", "Lantern", "Satellite", "Harbor",
    "Shadow", "Ember", "Signal", "Monsoon", "Avenue", "Fortress", "Tide",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bruno", "Carla", "Dario", "Elena", "Fabio", "Greta", "Hugo", "Irene", "Jonas", "Kira",
    "Luca", "Marta", "Nico", "Olivia", "Pietro",
];

const LAST_NAMES: &[&str] = &[
    "Albano", "Bennett", "Costa", "Duarte", "Esposito", "Ferri", "Gallo", "Hansen", "Iversen",
    "Jensen", "Kovac", "Lombardi", "Marchetti", "Novak", "Ortiz", "Petrov",
];

pub const GENRES: &[&str] = &[
    "Rock", "Jazz", "Electronic", "Hip-Hop", "Classical", "Folk", "Metal", "Soul", "Ambient",
    "Punk", "Reggae", "Blues",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "mail.test", "inbox.dev", "posta.it"];

const MEDIA_BASE_URL: &str = "https://media.catalog-synth.test";

/// A fresh opaque entity id: a v4-shaped uuid drawn from the threaded rng,
/// so a seeded run produces the same ids every time.
pub fn entity_id(rng: &mut impl Rng) -> String {
    uuid::Builder::from_random_bytes(rng.random())
        .into_uuid()
        .to_string()
}

/// A random A-z0-9 string.
pub fn random_string(rng: &mut impl Rng, len: usize) -> String {
    let bytes = (&mut *rng)
        .sample_iter(&Alphanumeric)
        .take(len)
        .collect::<Vec<u8>>();
    String::from_utf8_lossy(&bytes).to_string()
}

/// Two-word display title, e.g. "Velvet Horizon".
pub fn random_title(rng: &mut impl Rng) -> String {
    let adjective = pick(ADJECTIVES, rng);
    let noun = pick(NOUNS, rng);
    format!("{adjective} {noun}")
}

/// A person's display name, e.g. "Elena Kovac".
pub fn random_person_name(rng: &mut impl Rng) -> String {
    let first = pick(FIRST_NAMES, rng);
    let last = pick(LAST_NAMES, rng);
    format!("{first} {last}")
}

/// An artist display name: either a person or a band-style name.
pub fn random_artist_name(rng: &mut impl Rng) -> String {
    if rng.random_bool(0.5) {
        random_person_name(rng)
    } else {
        format!("The {} {}s", pick(ADJECTIVES, rng), pick(NOUNS, rng))
    }
}

/// Short flavour text used for categories and playlists.
pub fn random_description(rng: &mut impl Rng) -> String {
    format!(
        "{} {} sounds for {} days",
        pick(ADJECTIVES, rng),
        pick(GENRES, rng).to_lowercase(),
        pick(ADJECTIVES, rng).to_lowercase(),
    )
}

/// An email address derived from a display name plus a random tag, so two
/// users sharing a name never collide.
pub fn random_email(name: &str, rng: &mut impl Rng) -> String {
    let local = name.to_lowercase().replace(' ', ".");
    let tag = rng.random_range(1..10_000u32);
    let domain = pick(EMAIL_DOMAINS, rng);
    format!("{local}.{tag}@{domain}")
}

/// A fake hosted square image of the given edge size.
pub fn random_image(rng: &mut impl Rng, size: u16) -> Image {
    Image {
        url: format!("{MEDIA_BASE_URL}/images/{}", random_string(rng, 24)),
        width: size,
        height: size,
    }
}

/// A fake audio source url for a track file inside an album directory.
pub fn audio_url(album_id: &str, file_stem: &str) -> String {
    format!("{MEDIA_BASE_URL}/audio/{album_id}/{file_stem}.ogg")
}

/// A unix timestamp up to `max_age_days` in the past.
pub fn random_past_timestamp(rng: &mut impl Rng, max_age_days: u32) -> i64 {
    let now = chrono::Utc::now().timestamp();
    let max_age_secs = i64::from(max_age_days) * 24 * 60 * 60;
    now - rng.random_range(0..=max_age_secs)
}

fn pick<'a>(pool: &'a [&'a str], rng: &mut impl Rng) -> &'a str {
    // Pools are non-empty constants.
    pool.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn entity_ids_are_unique_and_seed_stable() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = entity_id(&mut rng);
        let b = entity_id(&mut rng);
        assert_ne!(a, b);

        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(a, entity_id(&mut rng));
    }

    #[test]
    fn random_string_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let s = random_string(&mut rng, 24);
        assert_eq!(s.len(), 24);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn email_contains_name_and_domain() {
        let mut rng = StdRng::seed_from_u64(7);
        let email = random_email("Ada Lombardi", &mut rng);
        assert!(email.starts_with("ada.lombardi."));
        assert!(email.contains('@'));
    }

    #[test]
    fn past_timestamp_is_not_in_the_future() {
        let mut rng = StdRng::seed_from_u64(7);
        let earliest = chrono::Utc::now().timestamp() - 366 * 24 * 60 * 60;
        for _ in 0..100 {
            let ts = random_past_timestamp(&mut rng, 365);
            assert!(ts <= chrono::Utc::now().timestamp());
            assert!(ts >= earliest);
        }
    }

    #[test]
    fn titles_come_from_the_pools() {
        let mut rng = StdRng::seed_from_u64(7);
        let title = random_title(&mut rng);
        let (adjective, noun) = title.split_once(' ').unwrap();
        assert!(ADJECTIVES.contains(&adjective));
        assert!(NOUNS.contains(&noun));
    }
}
