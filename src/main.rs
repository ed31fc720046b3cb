//! swipesnake - Swipe-Controlled Terminal Snake

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{info, warn};
use std::path::PathBuf;
use swipesnake::config::ThemeName;
use swipesnake::game::Difficulty;
use swipesnake::render::ui::TerminalUI;
use swipesnake::stats::StatsStore;
use swipesnake::{Application, Config, SnakeError};

fn cli() -> Command {
    Command::new("swipesnake")
        .version(swipesnake::VERSION)
        .about("Snake for the terminal, steered by keys or swipe gestures")
        .long_about(
            "swipesnake is a terminal snake game. Steer with the arrow keys, WASD, or by \
             dragging with the mouse; a short drag or click starts, pauses and resumes.",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file (defaults to the platform config directory)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("difficulty")
                .long("difficulty")
                .value_name("LEVEL")
                .help("Starting difficulty: easy, normal or hard")
                .value_parser(|s: &str| s.parse::<Difficulty>()),
        )
        .arg(
            Arg::new("min-swipe-distance")
                .long("min-swipe-distance")
                .value_name("UNITS")
                .help("Minimum drag distance for a swipe; shorter drags are taps")
                .value_parser(value_parser!(f32)),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .help("Color theme: default, monochrome or high-contrast")
                .value_parser(|s: &str| s.parse::<ThemeName>()),
        )
        .arg(
            Arg::new("stats-file")
                .long("stats-file")
                .value_name("PATH")
                .help("Where to keep statistics and achievements")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no-save")
                .long("no-save")
                .help("Do not load or save statistics")
                .action(ArgAction::SetTrue),
        )
}

/// Load the config file and apply command-line overrides.
fn load_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default()?,
    };

    if let Some(&difficulty) = matches.get_one::<Difficulty>("difficulty") {
        config.game.difficulty = difficulty;
    }
    if let Some(&distance) = matches.get_one::<f32>("min-swipe-distance") {
        config.controls.min_swipe_distance = distance;
    }
    if let Some(&theme) = matches.get_one::<ThemeName>("theme") {
        config.display.theme = theme;
    }

    config.validate()?;
    Ok(config)
}

fn stats_store(matches: &ArgMatches) -> swipesnake::Result<StatsStore> {
    if matches.get_flag("no-save") {
        return Ok(StatsStore::disabled());
    }
    match matches
        .get_one::<PathBuf>("stats-file")
        .cloned()
        .or_else(StatsStore::default_path)
    {
        Some(path) if path.is_dir() => Err(SnakeError::invalid_argument(format!(
            "stats file {} is a directory",
            path.display()
        ))),
        Some(path) => Ok(StatsStore::new(path)),
        None => {
            warn!("No data directory available; statistics will not be saved");
            Ok(StatsStore::disabled())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to stderr, configured through RUST_LOG
    env_logger::init();

    let matches = cli().get_matches();
    let config = load_config(&matches).context("invalid configuration")?;
    let store = stats_store(&matches)?;
    info!(
        "Starting: board {}x{}, difficulty {}, min swipe distance {}",
        config.game.board_width,
        config.game.board_height,
        config.game.difficulty,
        config.controls.min_swipe_distance
    );

    let ui_renderer = Box::new(TerminalUI::with_theme(config.display.theme.theme())?);
    let mut app = Application::new(config, store, ui_renderer)?;

    app.run().await?;

    Ok(())
}
