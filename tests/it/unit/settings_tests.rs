//! Unit tests for settings persistence.

use orchardmap::settings::{InitialView, Settings};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_then_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        access_token: Some("pk.saved".to_string()),
        initial_view: InitialView {
            lng: 11.1,
            lat: 46.5,
            zoom: 12.0,
        },
        terrain_exaggeration: 0.0,
        ..Settings::default()
    };
    settings.save_to(&path).unwrap();

    assert_eq!(Settings::read(&path).unwrap(), settings);
    // No temp files left behind
    assert_eq!(fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("absent.json"));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.credential(), None);
}

#[test]
fn test_invalid_json_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(Settings::read(&path).is_err());
    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn test_defaults_match_initial_view() {
    let settings = Settings::default();
    assert_eq!(settings.style_url, "mapbox://styles/mapbox/streets-v11");
    assert_eq!(settings.initial_view.lng, 11.3677);
    assert_eq!(settings.initial_view.lat, 46.6131);
    assert_eq!(settings.initial_view.zoom, 9.0);
}

#[test]
fn test_overwrite_replaces_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    Settings::default().save_to(&path).unwrap();
    let updated = Settings {
        access_token: Some("pk.second".to_string()),
        ..Settings::default()
    };
    updated.save_to(&path).unwrap();

    assert_eq!(Settings::load_from(&path).credential(), Some("pk.second"));
}
