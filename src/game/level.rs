//! Level progression, per-food base points and move speed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Fastest allowed move delay, whatever the level.
pub const MIN_MOVE_DELAY: Duration = Duration::from_millis(50);
/// Base points awarded per food at level 1.
pub const STARTING_BASE_POINTS: u32 = 10;

/// Menu-selectable difficulty, setting the starting move delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn base_move_delay(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(250),
            Difficulty::Normal => Duration::from_millis(200),
            Difficulty::Hard => Duration::from_millis(150),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "normal" | "2" => Ok(Difficulty::Normal),
            "hard" | "3" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// Foods needed to clear `level`: 5, 7, 9, ...
pub fn required_foods(level: u32) -> u32 {
    5 + level.saturating_sub(1) * 2
}

/// Delay between snake moves at `level`, shortened by 40% during a speed boost.
pub fn move_delay(base: Duration, level: u32, speed_boost: bool) -> Duration {
    let slowdown = Duration::from_millis(u64::from(level.saturating_sub(1)) * 10);
    let delay = base.saturating_sub(slowdown).max(MIN_MOVE_DELAY);
    if speed_boost {
        delay * 3 / 5
    } else {
        delay
    }
}

/// Level progress within one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub foods_this_level: u32,
    pub base_points: u32,
}

impl LevelProgress {
    pub fn new() -> Self {
        Self {
            level: 1,
            foods_this_level: 0,
            base_points: STARTING_BASE_POINTS,
        }
    }

    pub fn foods_needed(&self) -> u32 {
        required_foods(self.level)
    }

    /// Count a food; returns true when it completes the level.
    pub fn record_food(&mut self) -> bool {
        self.foods_this_level += 1;
        if self.foods_this_level >= self.foods_needed() {
            self.level += 1;
            self.foods_this_level = 0;
            self.base_points += 2;
            true
        } else {
            false
        }
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::new()
    }
}
