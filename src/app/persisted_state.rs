// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles transient application state that should persist
//! across sessions but is not user-configurable (unlike preferences in
//! `settings.toml`). It shares the data directory (and its override chain)
//! with the live session document.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last directory an image slide was picked from. Used as the initial
    /// directory of the image file dialog.
    #[serde(default)]
    pub last_image_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional warning). If loading fails,
    /// returns default state with a warning message suitable for a
    /// notification.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory (tests, portable
    /// deployments).
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("Could not parse saved application state".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("Could not read saved application state".to_string()),
            ),
        }
    }

    /// Saves application state to the default location, creating the parent
    /// directory if needed. Returns an optional warning message on failure.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("Could not determine the application state path".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("Could not create the application state directory".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("Could not write the application state".to_string());
                }
                None
            }
            Err(_) => Some("Could not create the application state file".to_string()),
        }
    }

    /// Returns the full path to the state file with optional override.
    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the directory an image slide was picked from. Paths
    /// without a parent (e.g. a bare root) leave the state unchanged.
    pub fn set_last_image_directory_from_file(&mut self, file_path: &std::path::Path) {
        if let Some(parent) = file_path.parent() {
            self.last_image_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_last_directory() {
        let state = AppState::default();
        assert!(state.last_image_directory.is_none());
    }

    #[test]
    fn set_last_image_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_image_directory_from_file(std::path::Path::new(
            "/home/user/banners/easter.png",
        ));
        assert_eq!(
            state.last_image_directory,
            Some(PathBuf::from("/home/user/banners"))
        );
    }

    #[test]
    fn set_last_image_directory_ignores_root() {
        let mut state = AppState::default();
        state.set_last_image_directory_from_file(std::path::Path::new("/"));
        // Root has no parent, so directory should remain None
        assert!(state.last_image_directory.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("create temp dir");
        let original = AppState {
            last_image_directory: Some(PathBuf::from("/home/user/banners")),
        };

        assert!(original.save_to(Some(temp_dir.path().to_path_buf())).is_none());
        let (loaded, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));

        assert_eq!(loaded, original);
        assert!(warning.is_none());
    }

    #[test]
    fn missing_state_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("create temp dir");
        let (loaded, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_state_file_loads_defaults_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), b"not cbor at all").expect("write");

        let (loaded, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, AppState::default());
        assert!(warning.is_some());
    }
}
