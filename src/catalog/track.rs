use super::Image;
use serde::{Deserialize, Serialize};

/// Track entity.
///
/// Artist id/name and album id/title/cover are inherited from the owning
/// album when the track is generated; the name and title copies are
/// creation-time snapshots, not live references. `track_number` is 1-based
/// and contiguous within an album.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist_id: String,
    pub artist_name: String,
    pub album_id: String,
    pub album_title: String,
    pub cover: Image,
    pub audio_url: String,
    pub duration_secs: u32,
    pub explicit: bool,
    /// 0 to 100.
    pub popularity: u8,
    pub track_number: u32,
    pub playable: bool,
}
