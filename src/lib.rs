//! # swipesnake - Swipe-Controlled Terminal Snake
//!
//! A snake game for the terminal that can be steered with arrow keys or with swipe
//! gestures: press the left mouse button (or touch), drag, and release.
//!
//! ## Features
//!
//! - **Swipe Gestures**: Drags are classified into UP/DOWN/LEFT/RIGHT by their dominant
//!   axis; short drags and taps become ACTIVATE (start / pause / resume)
//! - **Power-Ups**: Speed, double score, wall phasing, shrink and bonus foods
//! - **Progression**: Levels, combos, persistent statistics and achievements
//! - **Terminal UI**: ratatui front end with selectable color themes
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - TOML configuration and validation
//! - [`input`] - Gesture classification, raw event collection and key bindings
//! - [`game`] - Snake rules and the session state machine
//! - [`stats`] - Lifetime statistics, achievements and persistence
//! - [`render`] - Render loop state and the terminal user interface
//! - [`app`] - Application core and component coordination

// Core modules
pub mod config;
pub mod error;

// Subsystems
pub mod game;
pub mod input;
pub mod render;
pub mod stats;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, SnakeError};

// Public API surface for external usage
pub use app::Application;
pub use config::Config;
pub use game::{GameSession, GameState};
pub use input::{classify, DirectionSignal, InputAction, SwipeTracker, TouchPoint};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
