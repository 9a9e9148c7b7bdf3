use super::Image;
use serde::{Deserialize, Serialize};

/// A browse taxonomy entry. Categories stand alone: they reference no other
/// entity and nothing references them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image: Image,
    pub description: String,
}
