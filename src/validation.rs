//! Whole-dataset integrity checks.
//!
//! The generator always produces datasets that pass these checks; they exist
//! for consumers that build or mutate a [`Dataset`] by hand and want to
//! re-establish the invariants, and for the test suite. Checks stop at the
//! first violation.

use crate::dataset::Dataset;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{entity} with id '{id}' appears more than once")]
    DuplicateId { entity: &'static str, id: String },

    #[error("{entity} '{id}' references missing {target} '{target_id}'")]
    BrokenReference {
        entity: &'static str,
        id: String,
        target: &'static str,
        target_id: String,
    },

    #[error("track '{track_id}' artist '{track_artist_id}' does not match album artist '{album_artist_id}'")]
    TrackArtistMismatch {
        track_id: String,
        track_artist_id: String,
        album_artist_id: String,
    },

    #[error("album '{album_id}' track numbers are not contiguous from 1")]
    NonContiguousTrackNumbers { album_id: String },

    #[error("{entity} '{id}' total_tracks is {declared} but the track list has {actual} entries")]
    TrackCountMismatch {
        entity: &'static str,
        id: String,
        declared: usize,
        actual: usize,
    },

    #[error("playlist '{playlist_id}' contains track '{track_id}' more than once")]
    DuplicatePlaylistTrack {
        playlist_id: String,
        track_id: String,
    },

    #[error("user '{user_id}' follows itself")]
    SelfFollow { user_id: String },

    #[error("artist '{artist_id}' enrichment is out of sync with the albums/tracks that reference it")]
    StaleArtistEnrichment { artist_id: String },

    #[error("user '{user_id}' playlist membership is out of sync with playlist ownership")]
    StalePlaylistMembership { user_id: String },
}

/// Validates every cross-entity invariant of the dataset.
pub fn validate(dataset: &Dataset) -> Result<(), ValidationError> {
    unique_ids("category", dataset.categories.iter().map(|c| c.id.as_str()))?;
    let artist_ids = unique_ids("artist", dataset.artists.iter().map(|a| a.id.as_str()))?;
    let album_ids = unique_ids("album", dataset.albums.iter().map(|a| a.id.as_str()))?;
    let track_ids = unique_ids("track", dataset.tracks.iter().map(|t| t.id.as_str()))?;
    let user_ids = unique_ids("user", dataset.users.iter().map(|u| u.id.as_str()))?;
    let playlist_ids = unique_ids("playlist", dataset.playlists.iter().map(|p| p.id.as_str()))?;

    let albums_by_id: HashMap<&str, &crate::catalog::Album> =
        dataset.albums.iter().map(|a| (a.id.as_str(), a)).collect();

    for album in &dataset.albums {
        if !artist_ids.contains(album.artist_id.as_str()) {
            return Err(ValidationError::BrokenReference {
                entity: "album",
                id: album.id.clone(),
                target: "artist",
                target_id: album.artist_id.clone(),
            });
        }
        if album.total_tracks != album.tracks.len() {
            return Err(ValidationError::TrackCountMismatch {
                entity: "album",
                id: album.id.clone(),
                declared: album.total_tracks,
                actual: album.tracks.len(),
            });
        }
        for track_id in &album.tracks {
            if !track_ids.contains(track_id.as_str()) {
                return Err(ValidationError::BrokenReference {
                    entity: "album",
                    id: album.id.clone(),
                    target: "track",
                    target_id: track_id.clone(),
                });
            }
        }
    }

    let mut track_numbers_by_album: HashMap<&str, Vec<u32>> = HashMap::new();
    for track in &dataset.tracks {
        let Some(album) = albums_by_id.get(track.album_id.as_str()) else {
            return Err(ValidationError::BrokenReference {
                entity: "track",
                id: track.id.clone(),
                target: "album",
                target_id: track.album_id.clone(),
            });
        };
        if track.artist_id != album.artist_id {
            return Err(ValidationError::TrackArtistMismatch {
                track_id: track.id.clone(),
                track_artist_id: track.artist_id.clone(),
                album_artist_id: album.artist_id.clone(),
            });
        }
        track_numbers_by_album
            .entry(track.album_id.as_str())
            .or_default()
            .push(track.track_number);
    }
    for (album_id, mut numbers) in track_numbers_by_album {
        numbers.sort_unstable();
        let contiguous = numbers
            .iter()
            .enumerate()
            .all(|(i, n)| *n == i as u32 + 1);
        if !contiguous {
            return Err(ValidationError::NonContiguousTrackNumbers {
                album_id: album_id.to_string(),
            });
        }
    }

    for playlist in &dataset.playlists {
        if !user_ids.contains(playlist.owner_id.as_str()) {
            return Err(ValidationError::BrokenReference {
                entity: "playlist",
                id: playlist.id.clone(),
                target: "user",
                target_id: playlist.owner_id.clone(),
            });
        }
        if playlist.total_tracks != playlist.tracks.len() {
            return Err(ValidationError::TrackCountMismatch {
                entity: "playlist",
                id: playlist.id.clone(),
                declared: playlist.total_tracks,
                actual: playlist.tracks.len(),
            });
        }
        let mut seen = HashSet::new();
        for track_id in &playlist.tracks {
            if !track_ids.contains(track_id.as_str()) {
                return Err(ValidationError::BrokenReference {
                    entity: "playlist",
                    id: playlist.id.clone(),
                    target: "track",
                    target_id: track_id.clone(),
                });
            }
            if !seen.insert(track_id.as_str()) {
                return Err(ValidationError::DuplicatePlaylistTrack {
                    playlist_id: playlist.id.clone(),
                    track_id: track_id.clone(),
                });
            }
        }
    }

    for artist in &dataset.artists {
        let expected_albums: HashSet<&str> = dataset
            .albums_by_artist(&artist.id)
            .map(|a| a.id.as_str())
            .collect();
        let actual_albums: HashSet<&str> = artist.album_ids.iter().map(String::as_str).collect();
        let expected_tracks: HashSet<&str> = dataset
            .tracks_by_artist(&artist.id)
            .map(|t| t.id.as_str())
            .collect();
        let actual_tracks: HashSet<&str> = artist.track_ids.iter().map(String::as_str).collect();
        if expected_albums != actual_albums || expected_tracks != actual_tracks {
            return Err(ValidationError::StaleArtistEnrichment {
                artist_id: artist.id.clone(),
            });
        }
    }

    let mut owned_by_user: HashMap<&str, HashSet<&str>> = HashMap::new();
    for playlist in &dataset.playlists {
        owned_by_user
            .entry(playlist.owner_id.as_str())
            .or_default()
            .insert(playlist.id.as_str());
    }
    for user in &dataset.users {
        for artist_id in &user.following.artists {
            if !artist_ids.contains(artist_id.as_str()) {
                return Err(ValidationError::BrokenReference {
                    entity: "user",
                    id: user.id.clone(),
                    target: "artist",
                    target_id: artist_id.clone(),
                });
            }
        }
        for followed_id in &user.following.users {
            if followed_id == &user.id {
                return Err(ValidationError::SelfFollow {
                    user_id: user.id.clone(),
                });
            }
            if !user_ids.contains(followed_id.as_str()) {
                return Err(ValidationError::BrokenReference {
                    entity: "user",
                    id: user.id.clone(),
                    target: "user",
                    target_id: followed_id.clone(),
                });
            }
        }
        for playlist_id in &user.playlists {
            if !playlist_ids.contains(playlist_id.as_str()) {
                return Err(ValidationError::BrokenReference {
                    entity: "user",
                    id: user.id.clone(),
                    target: "playlist",
                    target_id: playlist_id.clone(),
                });
            }
        }
        let actual: HashSet<&str> = user.playlists.iter().map(String::as_str).collect();
        let expected = owned_by_user.remove(user.id.as_str()).unwrap_or_default();
        if actual != expected {
            return Err(ValidationError::StalePlaylistMembership {
                user_id: user.id.clone(),
            });
        }
    }

    Ok(())
}

fn unique_ids<'a>(
    entity: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, ValidationError> {
    let mut set = HashSet::new();
    for id in ids {
        if !set.insert(id) {
            return Err(ValidationError::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(set)
}
