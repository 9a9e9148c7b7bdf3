use super::Image;
use serde::{Deserialize, Serialize};

/// Album release classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlbumType {
    Album,
    Single,
    Ep,
}

/// Album entity.
///
/// `artist_name` is a snapshot of the owning artist's name at album creation
/// time; it is never re-synchronized if the artist is renamed later.
///
/// `tracks` is empty on a freshly generated album. The track stage builds a
/// new album value with the ordered track id list filled in and
/// `total_tracks` set to its real length. `total_duration_secs` keeps the
/// estimate computed at album creation (track count estimate times a sampled
/// average track duration) and is not reconciled with the durations of the
/// tracks generated later; the divergence is preserved deliberately.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist_id: String,
    pub artist_name: String,
    pub cover: Image,
    pub released: i64,
    pub album_type: AlbumType,
    pub tracks: Vec<String>,
    pub total_tracks: usize,
    pub total_duration_secs: u32,
}
