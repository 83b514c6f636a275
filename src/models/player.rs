//! Player records as stored in the dataset file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Match outcome marking a win in [`PlayerData::last`].
pub const WIN: i32 = 1;

/// Top-level shape of the dataset file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayersDocument {
    pub players: Vec<Player>,
}

/// A single player record.
///
/// Only the fields the API computes with are typed. Everything else in the
/// record (names, pictures, points, ...) is kept in `extra` so responses
/// return the record as it appears in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub country: Country,
    pub data: PlayerData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Ranking and physical data for a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub rank: i32,

    /// Weight in grams
    pub weight: i32,

    /// Height in centimeters
    pub height: i32,

    /// Recent match outcomes, most recent first
    pub last: Vec<i32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlayerData {
    /// Number of wins in the recent match history.
    pub fn wins(&self) -> u32 {
        self.last.iter().filter(|&&outcome| outcome == WIN).count() as u32
    }

    /// Number of matches in the recent match history.
    pub fn matches(&self) -> u32 {
        self.last.len() as u32
    }

    /// Body-mass index (kg / m²). `None` when the height is not positive.
    pub fn bmi(&self) -> Option<f64> {
        if self.height <= 0 {
            return None;
        }
        let weight_kg = self.weight as f64 / 1000.0;
        let height_m = self.height as f64 / 100.0;
        Some(weight_kg / (height_m * height_m))
    }
}

impl Player {
    /// Build a player with no extra fields.
    pub fn new(id: i64, country_code: &str, rank: i32, weight: i32, height: i32, last: Vec<i32>) -> Self {
        Self {
            id,
            country: Country {
                code: country_code.to_string(),
                extra: Map::new(),
            },
            data: PlayerData {
                rank,
                weight,
                height,
                last,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }
}
