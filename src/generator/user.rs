//! Stage 5: base user records. Follow sets and playlist membership stay
//! empty until user enrichment.

use super::text;
use crate::user::{Following, User};
use rand::Rng;

const MAX_ACCOUNT_AGE_DAYS: u32 = 3 * 365;

pub fn generate_users(count: usize, rng: &mut impl Rng) -> Vec<User> {
    (0..count)
        .map(|_| {
            let name = text::random_person_name(rng);
            let email = text::random_email(&name, rng);
            User {
                id: text::entity_id(rng),
                name,
                email,
                image: text::random_image(rng, 160),
                created: text::random_past_timestamp(rng, MAX_ACCOUNT_AGE_DAYS),
                following: Following::default(),
                playlists: Vec::new(),
            }
        })
        .collect()
}
