//! The composed output of a full generation run.

use crate::catalog::{Album, Artist, Category, Track};
use crate::user::{Playlist, User};
use serde::{Deserialize, Serialize};

/// All six entity collections produced by one pipeline run.
///
/// The dataset exclusively owns its entities; consumers should treat it as
/// immutable (or clone what they need). A regeneration replaces the whole
/// value, there is no incremental update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub categories: Vec<Category>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub tracks: Vec<Track>,
    pub users: Vec<User>,
    pub playlists: Vec<Playlist>,
}

impl Dataset {
    /// Albums owned by the given artist, in generation order.
    pub fn albums_by_artist<'a>(&'a self, artist_id: &'a str) -> impl Iterator<Item = &'a Album> {
        self.albums.iter().filter(move |a| a.artist_id == artist_id)
    }

    /// Tracks owned by the given artist, in generation order.
    pub fn tracks_by_artist<'a>(&'a self, artist_id: &'a str) -> impl Iterator<Item = &'a Track> {
        self.tracks.iter().filter(move |t| t.artist_id == artist_id)
    }

    /// Playlists owned by the given user, in generation order.
    pub fn playlists_by_owner<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Playlist> {
        self.playlists.iter().filter(move |p| p.owner_id == user_id)
    }
}
