//! Player dataset reader.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::StorageError;
use crate::models::{Player, PlayersDocument};

/// Reads the player dataset document.
pub struct PlayerReader {
    path: PathBuf,
}

impl PlayerReader {
    /// Create a new reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document.
    ///
    /// Fails as a unit: a single malformed record rejects the whole file.
    pub fn read_document(&self) -> Result<PlayersDocument, StorageError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| {
            warn!("Failed to read {:?}: {}", self.path, source);
            StorageError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        let document: PlayersDocument = serde_json::from_str(&contents).map_err(|source| {
            warn!("Failed to parse {:?}: {}", self.path, source);
            StorageError::Json {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!("Read {} players from {:?}", document.players.len(), self.path);
        Ok(document)
    }

    /// Read all players in dataset order.
    pub fn read_all(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.read_document()?.players)
    }
}
