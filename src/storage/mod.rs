//! Dataset file access.
//!
//! The player dataset is a single JSON document read from disk on every
//! call. Nothing is cached between reads.

mod players;

pub use players::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Location of the dataset.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub players_file: PathBuf,
}

impl StorageConfig {
    pub fn new(players_file: PathBuf) -> Self {
        Self { players_file }
    }

    /// Reader for the configured players file.
    pub fn players(&self) -> PlayerReader {
        PlayerReader::new(self.players_file.clone())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./players.json"))
    }
}
