/// Per-stage entity counts for one generation run.
///
/// Every field can be overridden independently; `Default` carries the
/// standard counts. Track count is not configurable: it is derived from the
/// album count times the fixed per-album template size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub categories: usize,
    pub artists: usize,
    pub albums: usize,
    pub users: usize,
    pub playlists: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            categories: 10,
            artists: 20,
            albums: 30,
            users: 10,
            playlists: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counts() {
        let config = GeneratorConfig::default();
        assert_eq!(config.categories, 10);
        assert_eq!(config.artists, 20);
        assert_eq!(config.albums, 30);
        assert_eq!(config.users, 10);
        assert_eq!(config.playlists, 15);
    }
}
