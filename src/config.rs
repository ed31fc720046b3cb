//! Configuration loading: TOML file, platform defaults and validation.
//!
//! Every section is optional in the file; missing keys fall back to the defaults below.
//! Command-line overrides are applied by the binary before [`Config::validate`] runs.

use crate::error::{Result, SnakeError};
use crate::game::Difficulty;
use crate::input::gesture::DEFAULT_MIN_SWIPE_DISTANCE;
use crate::render::ui::ColorTheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.toml";
const MIN_BOARD_SIDE: u16 = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub controls: ControlsConfig,
    pub game: GameConfig,
    pub display: DisplayConfig,
}

/// Touch/mouse swipe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Displacement below which a release counts as a tap, in touch units.
    pub min_swipe_distance: f32,
    /// Touch units spanned by one terminal column.
    pub cell_width: f32,
    /// Touch units spanned by one terminal row.
    pub cell_height: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
            cell_width: 10.0,
            cell_height: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: u16,
    pub board_height: u16,
    pub difficulty: Difficulty,
    pub frame_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 40,
            board_height: 30,
            difficulty: Difficulty::Normal,
            frame_interval_ms: 16,
        }
    }
}

impl GameConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub theme: ThemeName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Default,
    Monochrome,
    HighContrast,
}

impl ThemeName {
    pub fn theme(self) -> ColorTheme {
        match self {
            ThemeName::Default => ColorTheme::default(),
            ThemeName::Monochrome => ColorTheme::monochrome(),
            ThemeName::HighContrast => ColorTheme::high_contrast(),
        }
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "default" => Ok(ThemeName::Default),
            "monochrome" => Ok(ThemeName::Monochrome),
            "high-contrast" => Ok(ThemeName::HighContrast),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

impl Config {
    /// `<config dir>/swipesnake/config.toml`, when the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(env!("CARGO_PKG_NAME")).join(CONFIG_FILE_NAME))
    }

    /// Parse a config file. Unlike [`Config::load_or_default`], a missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|err| SnakeError::io(format!("reading config {}", path.display()), err))?;
        Self::from_toml(&contents).map_err(|source| SnakeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the default config file if it exists, otherwise use defaults.
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_toml(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Reject values the game cannot run with.
    pub fn validate(&self) -> Result<()> {
        let controls = &self.controls;
        if !controls.min_swipe_distance.is_finite() || controls.min_swipe_distance <= 0.0 {
            return Err(SnakeError::config(format!(
                "min_swipe_distance must be a positive number, got {}",
                controls.min_swipe_distance
            )));
        }
        for (name, value) in [
            ("cell_width", controls.cell_width),
            ("cell_height", controls.cell_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SnakeError::config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let game = &self.game;
        if game.board_width < MIN_BOARD_SIDE || game.board_height < MIN_BOARD_SIDE {
            return Err(SnakeError::config(format!(
                "board must be at least {MIN_BOARD_SIDE}x{MIN_BOARD_SIDE}, got {}x{}",
                game.board_width, game.board_height
            )));
        }
        if game.frame_interval_ms == 0 {
            return Err(SnakeError::config("frame_interval_ms must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.controls.min_swipe_distance, 50.0);
        assert_eq!(config.game.board_width, 40);
        assert_eq!(config.game.board_height, 30);
        assert_eq!(config.game.frame_interval(), Duration::from_millis(16));
        config.validate().unwrap();
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [controls]
            min_swipe_distance = 30.0

            [game]
            difficulty = "hard"

            [display]
            theme = "high-contrast"
            "#,
        )
        .unwrap();

        assert_eq!(config.controls.min_swipe_distance, 30.0);
        assert_eq!(config.controls.cell_width, 10.0);
        assert_eq!(config.game.difficulty, Difficulty::Hard);
        assert_eq!(config.game.board_width, 40);
        assert_eq!(config.display.theme, ThemeName::HighContrast);
    }

    #[test]
    fn validation_rejects_unusable_values() {
        let mut config = Config::default();
        config.controls.min_swipe_distance = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SnakeError::ConfigError { .. })
        ));

        let mut config = Config::default();
        config.controls.cell_height = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.game.board_height = 4;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.game.frame_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[game]\nboard_width = \"wide\"\n").unwrap();

        match Config::load(&path) {
            Err(SnakeError::ConfigParse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn theme_names_parse() {
        assert_eq!("monochrome".parse::<ThemeName>(), Ok(ThemeName::Monochrome));
        assert!("neon".parse::<ThemeName>().is_err());
    }
}
