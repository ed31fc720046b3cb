//! Input subsystem.
//!
//! Raw terminal events are collected in [`raw`], mouse drags are classified into swipe
//! signals by [`gesture`], and [`service`] maps everything onto game-level actions.

pub mod gesture;
pub mod raw;
pub mod service;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::input` rather than reaching into submodules.
pub use gesture::{classify, DirectionSignal, SwipeGesture, SwipeTracker, TouchPoint};
pub use service::{spawn_input_thread, InputAction, InputService, InputStateMachine};
