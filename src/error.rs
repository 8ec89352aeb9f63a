//! Error types for everything that touches the filesystem.
//!
//! The game core itself never fails; only config, high-score and asset
//! loading can, and every caller recovers with a default.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// File could not be read or written.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// High-score file is not a JSON list of non-negative integers.
    #[error("Malformed high-score file '{}': {source}", .path.display())]
    ScoreFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// RON parsing of the config failed.
    #[error("Parse error in config '{}': {details}", .path.display())]
    ConfigFormat { path: PathBuf, details: String },

    /// No file for the named sprite in the asset directory.
    #[error("Asset not found: {0}")]
    AssetMissing(String),

    /// Sprite file exists but has no drawable rows.
    #[error("Asset '{0}' is empty")]
    AssetEmpty(String),
}

impl GameError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GameError::Io {
            path: path.into(),
            source,
        }
    }
}
