//! Protocol definitions shared between the game session and the render coordinator.
//!
//! The session reports what happened as [`GameEvent`]s and exposes what to draw as a
//! [`GameSnapshot`]; the render loop never reaches into session internals.

use crate::game::power_ups::ActiveTimers;
use crate::game::{Cell, Difficulty, Direction, Food, FoodKind, GameState};

/// Notifications emitted by the session while handling actions and ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    StateChanged(GameState),
    DifficultyChanged(Difficulty),
    FoodEaten { kind: FoodKind, points: u64 },
    LevelUp { level: u32 },
    GameOver { score: u64, new_high_score: bool },
    AchievementUnlocked(&'static str),
}

impl GameEvent {
    /// Short status-line text, if the event is worth telling the player about.
    pub fn status_message(&self) -> Option<String> {
        match self {
            GameEvent::StateChanged(GameState::Paused) => Some("Paused".to_string()),
            GameEvent::StateChanged(_) => None,
            GameEvent::DifficultyChanged(difficulty) => {
                Some(format!("Difficulty: {}", difficulty))
            }
            GameEvent::FoodEaten { kind, points } => {
                Some(format!("Ate {} (+{})", kind.name(), points))
            }
            GameEvent::LevelUp { level } => Some(format!("Level {}!", level)),
            GameEvent::GameOver {
                score,
                new_high_score: true,
            } => Some(format!("Game over - new high score: {}", score)),
            GameEvent::GameOver { score, .. } => Some(format!("Game over - score: {}", score)),
            GameEvent::AchievementUnlocked(name) => {
                Some(format!("Achievement unlocked: {}", name))
            }
        }
    }
}

/// Everything the UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub state: GameState,
    pub difficulty: Difficulty,
    pub board_width: u16,
    pub board_height: u16,
    /// Head first.
    pub snake: Vec<Cell>,
    pub heading: Direction,
    pub food: Option<Food>,
    pub score: u64,
    pub high_score: u64,
    pub level: u32,
    pub foods_this_level: u32,
    pub foods_needed: u32,
    pub combo_multiplier: u32,
    pub score_multiplier: u32,
    pub timers: ActiveTimers,
    pub achievements_unlocked: usize,
    pub achievements_total: usize,
    /// Closest locked achievement and its progress in whole percent.
    pub next_achievement: Option<(&'static str, u8)>,
}

impl GameSnapshot {
    /// Empty snapshot used before the first frame.
    pub fn blank(board_width: u16, board_height: u16) -> Self {
        Self {
            state: GameState::Menu,
            difficulty: Difficulty::default(),
            board_width,
            board_height,
            snake: Vec::new(),
            heading: Direction::Right,
            food: None,
            score: 0,
            high_score: 0,
            level: 1,
            foods_this_level: 0,
            foods_needed: 0,
            combo_multiplier: 1,
            score_multiplier: 1,
            timers: ActiveTimers::default(),
            achievements_unlocked: 0,
            achievements_total: 0,
            next_achievement: None,
        }
    }
}
