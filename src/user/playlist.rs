use crate::catalog::Image;
use serde::{Deserialize, Serialize};

/// Playlist entity.
///
/// `owner_name` is a snapshot of the owner's display name taken when the
/// playlist is generated. `tracks` is the inclusion-ordered track id list
/// and never contains duplicates; `total_tracks` always equals its length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cover: Image,
    pub owner_id: String,
    pub owner_name: String,
    pub public: bool,
    pub collaborative: bool,
    pub tracks: Vec<String>,
    pub total_tracks: usize,
    pub followers: u32,
    pub created: i64,
}
