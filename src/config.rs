use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Persistent viewer settings.
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/image-viewer/config.json
/// - macOS: ~/Library/Application Support/image-viewer/config.json
/// - Windows: %APPDATA%\image-viewer\config.json
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Folder picked most recently
    pub last_folder: Option<PathBuf>,
    /// Reopen `last_folder` on startup when no folder is given
    pub reopen_last_folder: bool,
    /// Dark or light theme
    pub dark_theme: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            last_folder: None,
            reopen_last_folder: true,
            dark_theme: true,
        }
    }
}

impl Config {
    /// Path where the config file lives, `None` if the platform has no
    /// config or home directory
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("image-viewer");
        path.push("config.json");
        Some(path)
    }

    /// Load from the default location.
    /// Any problem is logged and the defaults are used instead.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("⚠️  No config directory available, using defaults");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("⚠️  {}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(Error::ConfigIo {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&json).map_err(|source| Error::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_error = |source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| Error::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, json).map_err(io_error)
    }

    /// Folder to open at startup: an explicit one wins over the
    /// remembered one
    pub fn startup_folder(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit.or_else(|| {
            if self.reopen_last_folder {
                self.last_folder.clone()
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            last_folder: Some(PathBuf::from("/photos/holiday")),
            reopen_last_folder: false,
            dark_theme: false,
        };

        config.save_to(&path).unwrap();
        let restored = Config::load_from(&path).unwrap();

        assert_eq!(restored, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "dark_theme": false }"#).unwrap();

        let config = Config::load_from(&path).unwrap();

        assert!(!config.dark_theme);
        assert!(config.reopen_last_folder);
        assert_eq!(config.last_folder, None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let result = Config::load_from(&path);

        assert!(matches!(result, Err(Error::ConfigFormat { .. })));
    }

    #[test]
    fn test_startup_folder_priority() {
        let mut config = Config {
            last_folder: Some(PathBuf::from("/remembered")),
            ..Config::default()
        };

        assert_eq!(
            config.startup_folder(Some(PathBuf::from("/explicit"))),
            Some(PathBuf::from("/explicit"))
        );
        assert_eq!(config.startup_folder(None), Some(PathBuf::from("/remembered")));

        config.reopen_last_folder = false;
        assert_eq!(config.startup_folder(None), None);
    }
}
