//! Rendering subsystem: the session/view protocol, the render loop state and the terminal UI.

pub mod protocol;
pub mod service;
pub mod ui;

pub use protocol::{GameEvent, GameSnapshot};
pub use service::RenderLoopState;
