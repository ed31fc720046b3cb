//! Game model: the snake, food, power-ups, levels and the session state machine.
//!
//! Everything here runs on an explicit clock passed in by the caller, so the rules can
//! be driven from tests without a terminal or real time.

pub mod food;
pub mod level;
pub mod power_ups;
pub mod session;
pub mod snake;

pub use food::{Food, FoodKind};
pub use level::{Difficulty, LevelProgress};
pub use power_ups::{ActiveTimers, PowerUps};
pub use session::{GameSession, GameState};
pub use snake::{Cell, Collision, Direction, Snake};
