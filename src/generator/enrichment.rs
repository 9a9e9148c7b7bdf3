//! Stages 7 and 8: back-fill relationship fields on artists and users.
//!
//! Both enrichments are non-destructive merges: they overwrite only the
//! designated relationship fields and leave everything set at creation time
//! untouched.

use crate::catalog::{Album, Artist, Track};
use crate::user::{Following, Playlist, User};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;

/// How many artists a user follows, before capping at the artist count.
const FOLLOWED_ARTISTS: std::ops::RangeInclusive<usize> = 5..=15;

/// How many other users a user follows, before capping.
const FOLLOWED_USERS: std::ops::RangeInclusive<usize> = 0..=5;

/// Fills each artist's `album_ids` and `track_ids` from the albums and
/// tracks whose `artist_id` matches, preserving generation order.
pub fn enrich_artists(artists: Vec<Artist>, albums: &[Album], tracks: &[Track]) -> Vec<Artist> {
    let mut albums_by_artist: HashMap<&str, Vec<String>> = HashMap::new();
    for album in albums {
        albums_by_artist
            .entry(album.artist_id.as_str())
            .or_default()
            .push(album.id.clone());
    }

    let mut tracks_by_artist: HashMap<&str, Vec<String>> = HashMap::new();
    for track in tracks {
        tracks_by_artist
            .entry(track.artist_id.as_str())
            .or_default()
            .push(track.id.clone());
    }

    artists
        .into_iter()
        .map(|artist| {
            let album_ids = albums_by_artist.remove(artist.id.as_str()).unwrap_or_default();
            let track_ids = tracks_by_artist.remove(artist.id.as_str()).unwrap_or_default();
            Artist {
                album_ids,
                track_ids,
                ..artist
            }
        })
        .collect()
}

/// Fills each user's `playlists` (ids of the playlists it owns) and its
/// `following` sets. Followed users are drawn only from other users, never
/// from the user itself.
pub fn enrich_users(
    users: Vec<User>,
    artists: &[Artist],
    playlists: &[Playlist],
    rng: &mut impl Rng,
) -> Vec<User> {
    let mut owned_playlists: HashMap<&str, Vec<String>> = HashMap::new();
    for playlist in playlists {
        owned_playlists
            .entry(playlist.owner_id.as_str())
            .or_default()
            .push(playlist.id.clone());
    }

    let user_ids: Vec<String> = users.iter().map(|u| u.id.clone()).collect();

    users
        .into_iter()
        .map(|user| {
            let playlists = owned_playlists.remove(user.id.as_str()).unwrap_or_default();

            let artist_count = rng.random_range(FOLLOWED_ARTISTS).min(artists.len());
            let followed_artists = artists
                .choose_multiple(rng, artist_count)
                .map(|a| a.id.clone())
                .collect();

            let others: Vec<&String> = user_ids.iter().filter(|id| **id != user.id).collect();
            let user_count = rng.random_range(FOLLOWED_USERS).min(others.len());
            let followed_users = others
                .choose_multiple(rng, user_count)
                .map(|id| (*id).clone())
                .collect();

            User {
                following: Following {
                    artists: followed_artists,
                    users: followed_users,
                },
                playlists,
                ..user
            }
        })
        .collect()
}
