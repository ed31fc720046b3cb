//! Lifetime statistics, achievements and their persistence.

pub mod achievements;
pub mod store;

pub use achievements::{Achievement, AchievementKind, AchievementSystem};
pub use store::StatsStore;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameRecord {
    pub score: u64,
    pub level: u32,
    pub length: usize,
    pub foods_eaten: u32,
    pub special_foods_eaten: u32,
    pub max_combo: u32,
    pub duration: Duration,
}

/// Totals and best values across every recorded game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub games_played: u32,
    pub high_score: u64,
    pub max_level: u32,
    pub max_length: u32,
    pub total_score: u64,
    pub total_seconds_played: u64,
    pub total_foods_eaten: u32,
    pub special_foods_eaten: u32,
    pub max_combo: u32,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished game into the totals.
    pub fn record_game(&mut self, game: &GameRecord) {
        self.games_played += 1;
        self.total_score += game.score;
        self.total_seconds_played += game.duration.as_secs();
        self.total_foods_eaten += game.foods_eaten;
        self.special_foods_eaten += game.special_foods_eaten;

        self.high_score = self.high_score.max(game.score);
        self.max_level = self.max_level.max(game.level);
        self.max_length = self
            .max_length
            .max(u32::try_from(game.length).unwrap_or(u32::MAX));
        self.max_combo = self.max_combo.max(game.max_combo);
    }

    pub fn minutes_played(&self) -> u64 {
        self.total_seconds_played / 60
    }
}
