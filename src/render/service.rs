//! Render coordination helpers.
//!
//! Provides the state that mediates between input actions, the game session and view
//! updates. The async loop itself lives in `Application::run`.

use crate::game::GameSession;
use crate::input::InputAction;
use crate::render::protocol::GameEvent;
use crate::render::ui::ViewState;
use std::time::Duration;

/// Tracks render-related state that must persist across input actions and ticks.
#[derive(Debug, Default)]
pub struct RenderLoopState {
    stats_dirty: bool,
}

impl RenderLoopState {
    pub fn new() -> Self {
        Self { stats_dirty: false }
    }

    /// Apply one input action. Returns false when the loop should stop.
    pub fn process_action(
        &mut self,
        action: InputAction,
        session: &mut GameSession,
        view_state: &mut ViewState,
        now: Duration,
    ) -> bool {
        match action {
            InputAction::Exit => false,
            InputAction::Resize { width, height } => {
                view_state.update_terminal_size(width, height);
                true
            }
            InputAction::NoAction | InputAction::InvalidInput => true,
            _ => {
                let events = session.handle_action(action, now);
                self.handle_events(&events, view_state, now);
                view_state.update_snapshot(session.snapshot(now));
                true
            }
        }
    }

    /// Advance the session clock and refresh the view for the next frame.
    pub fn tick(&mut self, session: &mut GameSession, view_state: &mut ViewState, now: Duration) {
        let events = session.tick(now);
        self.handle_events(&events, view_state, now);
        view_state.status_line.expire(now);
        view_state.update_snapshot(session.snapshot(now));
    }

    pub fn handle_events(&mut self, events: &[GameEvent], view_state: &mut ViewState, now: Duration) {
        // Messages from the previous state do not carry over.
        if events
            .iter()
            .any(|event| matches!(event, GameEvent::StateChanged(_)))
        {
            view_state.status_line.clear_message();
        }

        if events
            .iter()
            .any(|event| matches!(event, GameEvent::GameOver { .. }))
        {
            self.stats_dirty = true;
        }

        // Events from one step share the status line.
        let messages: Vec<String> = events.iter().filter_map(GameEvent::status_message).collect();
        if !messages.is_empty() {
            view_state.status_line.set_message(messages.join(" | "), now);
        }
    }

    /// True once per finished round, so the caller can persist stats.
    pub fn take_stats_dirty(&mut self) -> bool {
        std::mem::take(&mut self.stats_dirty)
    }
}
