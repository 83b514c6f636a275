//! Statistics calculation engine.
//!
//! Computes the dataset-wide figures served by `/getStats`:
//! - Best country by win ratio over recent matches
//! - Average body-mass index
//! - Median height

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{CountryTally, DatasetStats, Player};

/// Errors raised while aggregating.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error("Dataset contains no players")]
    EmptyDataset,

    #[error("No player has a positive height")]
    NoHeightData,
}

/// Per-country tallies, kept in the order countries first appear.
#[derive(Debug, Default)]
pub struct CountryTallies {
    order: Vec<(String, CountryTally)>,
    index: HashMap<String, usize>,
}

impl CountryTallies {
    /// Add one player's match history to its country.
    pub fn record(&mut self, player: &Player) {
        let code = &player.country.code;
        let slot = match self.index.get(code) {
            Some(&i) => i,
            None => {
                self.order.push((code.clone(), CountryTally::default()));
                self.index.insert(code.clone(), self.order.len() - 1);
                self.order.len() - 1
            }
        };

        let tally = &mut self.order[slot].1;
        tally.wins += player.data.wins();
        tally.total += player.data.matches();
    }

    #[cfg(test)]
    fn get(&self, code: &str) -> Option<CountryTally> {
        self.index.get(code).map(|&i| self.order[i].1)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.order.len()
    }

    /// Country with the highest win ratio. Ties go to the first-seen country.
    pub fn best(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (code, tally) in &self.order {
            let ratio = tally.win_ratio();
            match best {
                Some((_, best_ratio)) if ratio <= best_ratio => {}
                _ => best = Some((code.as_str(), ratio)),
            }
        }
        best
    }
}

/// Calculate win rate from wins and total matches.
pub fn calculate_win_rate(wins: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        wins as f64 / total as f64
    }
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Median of the values, `None` for an empty slice.
pub fn median(values: &mut [i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] as f64 + values[mid] as f64) / 2.0)
    } else {
        Some(values[mid] as f64)
    }
}

/// Round to two decimal places, halves to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Compute dataset statistics in a single pass over the players.
///
/// The BMI mean covers players with a positive height only; a dataset where
/// no player has one is rejected with [`StatsError::NoHeightData`].
pub fn aggregate(players: &[Player]) -> Result<DatasetStats, StatsError> {
    if players.is_empty() {
        return Err(StatsError::EmptyDataset);
    }

    let mut tallies = CountryTallies::default();
    let mut heights = Vec::with_capacity(players.len());
    let mut bmis = Vec::with_capacity(players.len());

    for player in players {
        tallies.record(player);
        heights.push(player.data.height);
        if let Some(bmi) = player.data.bmi() {
            bmis.push(bmi);
        }
    }

    let (best_country, best_ratio) = tallies.best().ok_or(StatsError::EmptyDataset)?;
    let median_height = median(&mut heights).ok_or(StatsError::EmptyDataset)?;
    let average_bmi = mean(&bmis).ok_or(StatsError::NoHeightData)?;

    Ok(DatasetStats {
        best_country: best_country.to_string(),
        best_win_ratio: round2(best_ratio),
        average_bmi: round2(average_bmi),
        median_height: round2(median_height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn player(id: i64, country: &str, height: i32, last: Vec<i32>) -> Player {
        Player::new(id, country, id as i32, 80000, height, last)
    }

    #[test]
    fn test_calculate_win_rate() {
        assert_eq!(calculate_win_rate(3, 4), 0.75);
        assert_eq!(calculate_win_rate(0, 0), 0.0);
        assert_eq!(calculate_win_rate(5, 5), 1.0);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&mut [190, 170, 180]), Some(180.0));
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&mut [180, 170]), Some(175.0));
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&mut [183]), Some(183.0));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&mut []), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.666_666), 0.67);
        assert_eq!(round2(23.354), 23.35);
        assert_eq!(round2(175.0), 175.0);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn test_tally_counts_wins_and_total() {
        let mut tallies = CountryTallies::default();
        tallies.record(&player(1, "SUI", 183, vec![1, 1, 0, 1]));

        assert_eq!(tallies.get("SUI"), Some(CountryTally { wins: 3, total: 4 }));
    }

    #[test]
    fn test_tally_merges_same_country() {
        let mut tallies = CountryTallies::default();
        tallies.record(&player(1, "USA", 175, vec![1, 0]));
        tallies.record(&player(2, "SRB", 188, vec![1]));
        tallies.record(&player(3, "USA", 185, vec![1, 1, 0]));

        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies.get("USA"), Some(CountryTally { wins: 3, total: 5 }));
        assert_eq!(tallies.get("SRB"), Some(CountryTally { wins: 1, total: 1 }));
    }

    #[test]
    fn test_best_country() {
        let mut tallies = CountryTallies::default();
        tallies.record(&player(1, "USA", 175, vec![1, 0, 0]));
        tallies.record(&player(2, "SRB", 188, vec![1, 1, 0]));
        tallies.record(&player(3, "ESP", 185, vec![0, 0]));

        let (code, ratio) = tallies.best().unwrap();
        assert_eq!(code, "SRB");
        assert!((ratio - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_best_country_tie_goes_to_first_seen() {
        let mut tallies = CountryTallies::default();
        tallies.record(&player(1, "ESP", 185, vec![1, 0]));
        tallies.record(&player(2, "USA", 175, vec![0, 1]));

        assert_eq!(tallies.best(), Some(("ESP", 0.5)));
    }

    #[test]
    fn test_best_country_no_matches_anywhere() {
        let mut tallies = CountryTallies::default();
        tallies.record(&player(1, "ESP", 185, vec![]));
        tallies.record(&player(2, "USA", 175, vec![]));

        assert_eq!(tallies.best(), Some(("ESP", 0.0)));
    }

    #[test]
    fn test_aggregate() {
        let players = vec![
            Player::new(1, "USA", 3, 72000, 170, vec![1, 0, 0, 0]),
            Player::new(2, "SRB", 1, 80000, 180, vec![1, 1, 1, 0]),
            Player::new(3, "USA", 2, 90000, 190, vec![1, 1, 0, 0]),
        ];

        let stats = aggregate(&players).unwrap();

        // USA: 3/8, SRB: 3/4
        // BMIs: 72/1.7² = 24.913..., 80/1.8² = 24.691..., 90/1.9² = 24.930...
        assert_eq!(
            stats,
            DatasetStats {
                best_country: "SRB".to_string(),
                best_win_ratio: 0.75,
                average_bmi: 24.85,
                median_height: 180.0,
            }
        );
    }

    #[test]
    fn test_aggregate_even_heights() {
        let players = vec![player(1, "USA", 170, vec![1]), player(2, "SRB", 180, vec![0])];

        let stats = aggregate(&players).unwrap();
        assert_eq!(stats.median_height, 175.0);
        assert_eq!(stats.best_country, "USA");
        assert_eq!(stats.best_win_ratio, 1.0);
    }

    #[test]
    fn test_aggregate_skips_zero_height_in_bmi() {
        let players = vec![
            Player::new(1, "SUI", 1, 81000, 180, vec![]),
            Player::new(2, "SUI", 2, 90000, 0, vec![]),
        ];

        let stats = aggregate(&players).unwrap();
        assert_eq!(stats.average_bmi, 25.0);
        assert_eq!(stats.median_height, 90.0);
    }

    #[test]
    fn test_aggregate_half_ratio_rounds_to_even() {
        let players = vec![Player::new(1, "USA", 1, 80000, 180, vec![1, 0, 0, 0, 0, 0, 0, 0])];

        let stats = aggregate(&players).unwrap();
        assert_eq!(stats.best_win_ratio, 0.12);
    }

    #[test]
    fn test_aggregate_no_positive_height() {
        let players = vec![
            Player::new(1, "SUI", 1, 81000, 0, vec![1]),
            Player::new(2, "ESP", 2, 85000, -5, vec![0]),
        ];

        assert_eq!(aggregate(&players), Err(StatsError::NoHeightData));
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate(&[]), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn test_aggregate_ratio_in_unit_range() {
        let players = vec![
            player(1, "USA", 170, vec![1, 1, 1]),
            player(2, "ESP", 175, vec![0, 0]),
            player(3, "FRA", 180, vec![]),
        ];

        let stats = aggregate(&players).unwrap();
        assert!((0.0..=1.0).contains(&stats.best_win_ratio));
    }
}
