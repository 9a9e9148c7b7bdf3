use crate::catalog::Image;
use serde::{Deserialize, Serialize};

/// The accounts a user follows, split by kind.
///
/// `users` never contains the owning user's own id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Following {
    pub artists: Vec<String>,
    pub users: Vec<String>,
}

/// User entity.
///
/// `following` and `playlists` are empty on a freshly generated user and are
/// filled by the user enrichment stage: `playlists` becomes the ids of every
/// playlist owned by this user, `following` a random selection of artists
/// and other users.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: Image,
    pub created: i64,
    pub following: Following,
    pub playlists: Vec<String>,
}
