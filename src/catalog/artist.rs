use super::Image;
use serde::{Deserialize, Serialize};

/// Artist entity.
///
/// `album_ids` and `track_ids` are empty when the artist is first generated
/// and are filled by the enrichment stage from the albums and tracks that
/// reference this artist. Enrichment is additive: it never changes the
/// fields set at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub portrait: Image,
    pub genres: Vec<String>,
    pub album_ids: Vec<String>,
    pub track_ids: Vec<String>,
}
