//! Derived statistics models.

use serde::{Deserialize, Serialize};

use crate::calculate::calculate_win_rate;

/// Win/match tally for one country.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryTally {
    pub wins: u32,
    pub total: u32,
}

impl CountryTally {
    /// Wins over total matches, `0.0` when no matches were played.
    pub fn win_ratio(&self) -> f64 {
        calculate_win_rate(self.wins, self.total)
    }
}

/// Aggregate statistics over the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    #[serde(rename = "bestCountry")]
    pub best_country: String,

    /// Win ratio of `best_country` (0.0 to 1.0)
    #[serde(rename = "bestWinRatio")]
    pub best_win_ratio: f64,

    /// Mean body-mass index across players with a positive height
    #[serde(rename = "averageIMC")]
    pub average_bmi: f64,

    /// Median height in centimeters
    #[serde(rename = "medianHeight")]
    pub median_height: f64,
}
