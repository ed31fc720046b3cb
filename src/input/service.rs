//! High-level input service.
//!
//! Consumes raw events, runs the key bindings and the swipe mapping, and yields
//! game-level `InputAction`s for the render loop.

use crate::config::ControlsConfig;
use crate::error::Result;
use crate::game::{Difficulty, Direction};
use crate::input::gesture::DirectionSignal;
use crate::input::raw::{RawInputCollector, RawInputEvent};
use log::error;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// High-level input actions emitted by the key bindings and swipe gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Steer(Direction),
    /// Start, pause or resume depending on the game state.
    Activate,
    TogglePause,
    SelectDifficulty(Difficulty),
    Restart,
    /// Graceful shutdown (escape/back, `q`, Ctrl-C).
    Exit,
    Resize {
        width: u16,
        height: u16,
    },
    NoAction,
    InvalidInput,
}

impl From<DirectionSignal> for InputAction {
    fn from(signal: DirectionSignal) -> Self {
        match signal {
            DirectionSignal::Up => InputAction::Steer(Direction::Up),
            DirectionSignal::Down => InputAction::Steer(Direction::Down),
            DirectionSignal::Left => InputAction::Steer(Direction::Left),
            DirectionSignal::Right => InputAction::Steer(Direction::Right),
            DirectionSignal::Activate => InputAction::Activate,
        }
    }
}

/// Stateless key bindings for the game.
#[derive(Debug, Default)]
pub struct InputStateMachine;

impl InputStateMachine {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        let modifiers = key_event.modifiers;
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match key_event.code {
                KeyCode::Char('c') => InputAction::Exit,
                _ => InputAction::InvalidInput,
            };
        }
        if modifiers.contains(KeyModifiers::ALT) {
            return InputAction::InvalidInput;
        }

        match key_event.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                InputAction::Steer(Direction::Up)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                InputAction::Steer(Direction::Down)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                InputAction::Steer(Direction::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                InputAction::Steer(Direction::Right)
            }
            KeyCode::Char(' ') | KeyCode::Enter => InputAction::Activate,
            KeyCode::Char('p') | KeyCode::Char('P') => InputAction::TogglePause,
            KeyCode::Char('1') => InputAction::SelectDifficulty(Difficulty::Easy),
            KeyCode::Char('2') => InputAction::SelectDifficulty(Difficulty::Normal),
            KeyCode::Char('3') => InputAction::SelectDifficulty(Difficulty::Hard),
            KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Restart,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::Exit,
            _ => InputAction::InvalidInput,
        }
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
pub struct InputService {
    state_machine: InputStateMachine,
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new(controls: &ControlsConfig) -> Self {
        Self {
            state_machine: InputStateMachine::new(),
            raw_input: RawInputCollector::new(controls),
        }
    }

    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            actions.extend(self.process_raw_event(raw_event));

            while let Some(extra_event) = self.raw_input.pop_pending() {
                actions.extend(self.process_raw_event(extra_event));
            }
        }

        Ok(actions)
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        self.raw_input.process_event(event);
        let mut actions = Vec::new();
        while let Some(raw_event) = self.raw_input.pop_pending() {
            actions.extend(self.process_raw_event(raw_event));
        }
        actions
    }

    fn process_raw_event(&mut self, event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.state_machine.handle_key_event(key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Swipe(signal) => InputAction::from(signal),
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => None,
            _ => Some(action),
        }
    }
}

/// Spawn a blocking thread that polls for terminal events and forwards actions to the render loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
    controls: ControlsConfig,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut service = InputService::new(&controls);
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_actions(Some(poll_interval)) {
                Ok(actions) => {
                    for action in actions {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    error!("Input thread error: {}", err);
                    break;
                }
            }
        }
    })
}
