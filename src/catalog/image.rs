use serde::{Deserialize, Serialize};

/// A hosted image reference (cover art, portraits, category tiles).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: u16,
    pub height: u16,
}
