//! End-to-end properties of the full generation pipeline.

use catalog_synth::generator::TRACK_TEMPLATES;
use catalog_synth::{generate, validate, Dataset, GeneratorConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn make_dataset(seed: u64, config: &GeneratorConfig) -> Dataset {
    generate(config, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn default_dataset_passes_validation() {
    let dataset = make_dataset(1, &GeneratorConfig::default());
    validate(&dataset).expect("generated dataset must satisfy all invariants");
}

#[test]
fn referential_integrity_holds_everywhere() {
    let dataset = make_dataset(2, &GeneratorConfig::default());

    let artist_ids: HashSet<_> = dataset.artists.iter().map(|a| a.id.as_str()).collect();
    let album_ids: HashSet<_> = dataset.albums.iter().map(|a| a.id.as_str()).collect();
    let track_ids: HashSet<_> = dataset.tracks.iter().map(|t| t.id.as_str()).collect();
    let user_ids: HashSet<_> = dataset.users.iter().map(|u| u.id.as_str()).collect();

    for album in &dataset.albums {
        assert!(artist_ids.contains(album.artist_id.as_str()));
    }
    for track in &dataset.tracks {
        assert!(album_ids.contains(track.album_id.as_str()));
        let album = dataset
            .albums
            .iter()
            .find(|a| a.id == track.album_id)
            .unwrap();
        assert_eq!(track.artist_id, album.artist_id);
    }
    for playlist in &dataset.playlists {
        assert!(user_ids.contains(playlist.owner_id.as_str()));
        for id in &playlist.tracks {
            assert!(track_ids.contains(id.as_str()));
        }
    }
}

#[test]
fn albums_carry_contiguous_template_tracks() {
    let dataset = make_dataset(3, &GeneratorConfig::default());
    for album in &dataset.albums {
        assert_eq!(album.tracks.len(), TRACK_TEMPLATES.len());
        assert_eq!(album.total_tracks, album.tracks.len());

        let numbers: Vec<_> = dataset
            .tracks
            .iter()
            .filter(|t| t.album_id == album.id)
            .map(|t| t.track_number)
            .collect();
        let expected: Vec<u32> = (1..=TRACK_TEMPLATES.len() as u32).collect();
        assert_eq!(numbers, expected);
    }
}

#[test]
fn playlists_have_unique_tracks_and_consistent_counts() {
    let dataset = make_dataset(4, &GeneratorConfig::default());
    for playlist in &dataset.playlists {
        let unique: HashSet<_> = playlist.tracks.iter().collect();
        assert_eq!(unique.len(), playlist.tracks.len());
        assert_eq!(playlist.total_tracks, playlist.tracks.len());
    }
}

#[test]
fn users_own_exactly_their_playlists_and_never_self_follow() {
    let dataset = make_dataset(5, &GeneratorConfig::default());
    for user in &dataset.users {
        assert!(!user.following.users.contains(&user.id));

        let expected: HashSet<_> = dataset
            .playlists_by_owner(&user.id)
            .map(|p| p.id.as_str())
            .collect();
        let actual: HashSet<_> = user.playlists.iter().map(String::as_str).collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn shape_is_idempotent_across_seeds() {
    let config = GeneratorConfig::default();
    for seed in [10, 11, 12, 13] {
        let dataset = make_dataset(seed, &config);
        assert_eq!(dataset.categories.len(), config.categories);
        assert_eq!(dataset.artists.len(), config.artists);
        assert_eq!(dataset.albums.len(), config.albums);
        assert_eq!(dataset.tracks.len(), config.albums * TRACK_TEMPLATES.len());
        assert_eq!(dataset.users.len(), config.users);
        assert_eq!(dataset.playlists.len(), config.playlists);
        validate(&dataset).unwrap();
    }
}

#[test]
fn zero_artists_degrade_to_empty_albums_not_errors() {
    let config = GeneratorConfig {
        artists: 0,
        albums: 5,
        ..GeneratorConfig::default()
    };
    let dataset = make_dataset(6, &config);
    assert!(dataset.albums.is_empty());
    assert!(dataset.tracks.is_empty());
    assert!(dataset.playlists.is_empty());
    validate(&dataset).unwrap();
}

#[test]
fn users_without_tracks_get_no_playlists() {
    let config = GeneratorConfig {
        albums: 0,
        users: 3,
        playlists: 30,
        ..GeneratorConfig::default()
    };
    let dataset = make_dataset(7, &config);
    assert_eq!(dataset.users.len(), 3);
    assert!(dataset.tracks.is_empty());
    assert!(dataset.playlists.is_empty());
    for user in &dataset.users {
        assert!(user.playlists.is_empty());
    }
    validate(&dataset).unwrap();
}

#[test]
fn all_zero_config_yields_a_valid_empty_dataset() {
    let config = GeneratorConfig {
        categories: 0,
        artists: 0,
        albums: 0,
        users: 0,
        playlists: 0,
    };
    let dataset = make_dataset(8, &config);
    assert_eq!(dataset, Dataset::default());
    validate(&dataset).unwrap();
}

#[test]
fn dataset_round_trips_through_json() {
    let dataset = make_dataset(9, &GeneratorConfig::default());
    let json = serde_json::to_string(&dataset).unwrap();
    let parsed: Dataset = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, dataset);
    validate(&parsed).unwrap();
}
