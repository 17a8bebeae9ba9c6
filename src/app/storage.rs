use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app::catalog::MovieRecord;
use crate::app::theme::ThemeMode;

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cartelera-tui")
}

/// Loads the persisted favorites list. A missing or malformed file is an
/// empty list; corrupt state must never block rendering.
pub fn load_favorites(path: &Path) -> Vec<MovieRecord> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

pub fn save_favorites(path: &Path, favorites: &[MovieRecord]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string(favorites).map_err(io::Error::other)?;
    fs::write(path, raw)
}

/// Loads the persisted theme preference, defaulting to light when the file
/// is absent or holds an unrecognized value.
pub fn load_theme(path: &Path) -> ThemeMode {
    match fs::read_to_string(path) {
        Ok(raw) => ThemeMode::parse(raw.trim()),
        Err(_) => ThemeMode::Light,
    }
}

pub fn save_theme(path: &Path, mode: ThemeMode) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, mode.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn movie(id: &str, title: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            poster: None,
            genre: Some("Sci-Fi".to_string()),
            year: Some("2021".to_string()),
            ubication: Some("North".to_string()),
            description: None,
            imdb_id: id.to_string(),
        }
    }

    #[test]
    fn favorites_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        let favorites = vec![movie("tt1", "Dune"), movie("tt2", "Arrival")];

        save_favorites(&path, &favorites).unwrap();
        assert_eq!(load_favorites(&path), favorites);
    }

    #[test]
    fn favorites_persist_in_wire_field_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        save_favorites(&path, &[movie("tt1", "Dune")]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["Title"], "Dune");
        assert_eq!(value[0]["imdbID"], "tt1");
        assert_eq!(value[0]["Ubication"], "North");
    }

    #[test]
    fn missing_favorites_file_is_empty_list() {
        let dir = tempdir().unwrap();
        assert!(load_favorites(&dir.path().join("favorites.json")).is_empty());
    }

    #[test]
    fn malformed_favorites_file_is_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load_favorites(&path).is_empty());

        fs::write(&path, r#"{"favorites": true}"#).unwrap();
        assert!(load_favorites(&path).is_empty());
    }

    #[test]
    fn save_favorites_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("favorites.json");
        save_favorites(&path, &[movie("tt1", "Dune")]).unwrap();
        assert_eq!(load_favorites(&path).len(), 1);
    }

    #[test]
    fn theme_round_trips_and_fails_safe() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");

        assert_eq!(load_theme(&path), ThemeMode::Light);

        save_theme(&path, ThemeMode::Dark).unwrap();
        assert_eq!(load_theme(&path), ThemeMode::Dark);

        fs::write(&path, "mauve").unwrap();
        assert_eq!(load_theme(&path), ThemeMode::Light);
    }
}
