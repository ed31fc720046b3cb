//! TOML persistence for statistics and unlocked achievements.

use crate::error::{Result, SnakeError};
use crate::stats::{AchievementSystem, GameStats};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const STATS_FILE_NAME: &str = "stats.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StatsFile {
    stats: GameStats,
    achievements: AchievementsSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct AchievementsSection {
    unlocked: Vec<String>,
}

/// Reads and writes the stats file. A store without a path keeps nothing.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: Option<PathBuf>,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store that loads defaults and discards saves.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// `<data dir>/swipesnake/stats.toml`, when the platform has a data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join(STATS_FILE_NAME))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load stats and achievement unlocks. A missing file yields fresh defaults.
    pub fn load(&self) -> Result<(GameStats, AchievementSystem)> {
        let mut achievements = AchievementSystem::new();
        let Some(path) = &self.path else {
            return Ok((GameStats::default(), achievements));
        };

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No stats file at {}, starting fresh", path.display());
                return Ok((GameStats::default(), achievements));
            }
            Err(err) => {
                return Err(SnakeError::io(
                    format!("reading stats file {}", path.display()),
                    err,
                ))
            }
        };

        let file: StatsFile = toml::from_str(&contents).map_err(|err| {
            SnakeError::stats(format!("corrupt stats file {}: {}", path.display(), err))
        })?;
        achievements.restore_unlocked(file.achievements.unlocked.iter().map(String::as_str));
        achievements.update(&file.stats);
        Ok((file.stats, achievements))
    }

    /// Write stats and unlocked achievement names, creating parent directories.
    pub fn save(&self, stats: &GameStats, achievements: &AchievementSystem) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                SnakeError::io(format!("creating stats directory {}", parent.display()), err)
            })?;
        }

        let file = StatsFile {
            stats: stats.clone(),
            achievements: AchievementsSection {
                unlocked: achievements.unlocked_names(),
            },
        };
        let contents = toml::to_string_pretty(&file)
            .map_err(|err| SnakeError::stats(format!("serializing stats: {}", err)))?;
        fs::write(path, contents)
            .map_err(|err| SnakeError::io(format!("writing stats file {}", path.display()), err))?;
        debug!("Saved stats to {}", path.display());
        Ok(())
    }
}
