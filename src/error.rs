use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the viewer's collaborators.
///
/// None of these ever escape `BrowseSession`: the session logs them and
/// falls back to the empty or "no image" state.
#[derive(Debug, Error)]
pub enum Error {
    /// The folder could not be enumerated
    #[error("failed to list {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but could not be decoded
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Reading or writing the config file failed
    #[error("config file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for `Config`
    #[error("config file {} is malformed: {source}", path.display())]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
