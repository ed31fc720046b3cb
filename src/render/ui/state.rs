//! UI state management structures
//!
//! The view keeps the latest game snapshot plus terminal-only concerns: the terminal
//! size and the status line message.

use crate::game::GameState;
use crate::render::protocol::GameSnapshot;
use std::time::Duration;

/// How long a status message stays up.
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Width of the side panel in terminal columns.
pub const SIDE_PANEL_WIDTH: u16 = 28;

/// Everything the terminal renderer draws from
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Latest snapshot of the game session
    pub snapshot: GameSnapshot,

    /// Status line content
    pub status_line: StatusLine,

    /// Terminal dimensions
    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl ViewState {
    pub fn new(snapshot: GameSnapshot, terminal_width: u16, terminal_height: u16) -> Self {
        Self {
            snapshot,
            status_line: StatusLine::new(),
            terminal_width,
            terminal_height,
        }
    }

    pub fn update_snapshot(&mut self, snapshot: GameSnapshot) {
        self.snapshot = snapshot;
    }

    /// Update terminal dimensions. Returns true if they actually changed.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.terminal_width != width || self.terminal_height != height;
        if changed {
            self.terminal_width = width;
            self.terminal_height = height;
        }
        changed
    }

    /// Terminal size needed to show the whole board, the panel and the status line.
    pub fn required_size(&self) -> (u16, u16) {
        let width = self
            .snapshot
            .board_width
            .saturating_mul(2)
            .saturating_add(2)
            .saturating_add(SIDE_PANEL_WIDTH);
        let height = self.snapshot.board_height.saturating_add(3);
        (width, height)
    }

    pub fn fits_terminal(&self) -> bool {
        let (width, height) = self.required_size();
        self.terminal_width >= width && self.terminal_height >= height
    }

    pub fn format_status_line(&self) -> String {
        self.status_line.format_status_line(self.snapshot.state)
    }
}

/// Status line information
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
    shown_at: Option<Duration>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a temporary message, shown from `now`.
    pub fn set_message(&mut self, message: String, now: Duration) {
        self.message = Some(message);
        self.shown_at = Some(now);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
        self.shown_at = None;
    }

    /// Drop the message once it has been up for [`STATUS_MESSAGE_TTL`].
    pub fn expire(&mut self, now: Duration) {
        if self
            .shown_at
            .is_some_and(|shown_at| now.saturating_sub(shown_at) >= STATUS_MESSAGE_TTL)
        {
            self.clear_message();
        }
    }

    /// Message (if any) followed by the key hints for `state`.
    pub fn format_status_line(&self, state: GameState) -> String {
        let hints = match state {
            GameState::Menu => "Enter/tap: start | 1-3: difficulty | Esc: quit",
            GameState::Playing => "Arrows/WASD/swipe: steer | P/tap: pause | Esc: quit",
            GameState::Paused => "P/tap: resume | Esc: quit",
            GameState::GameOver => "R: restart | Enter/tap: menu | Esc: quit",
        };
        match &self.message {
            Some(message) => format!("{} | {}", message, hints),
            None => hints.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewState {
        ViewState::new(GameSnapshot::blank(40, 30), 120, 40)
    }

    #[test]
    fn test_terminal_resize() {
        let mut view = view();
        assert!(!view.update_terminal_size(120, 40));
        assert!(view.update_terminal_size(80, 24));
        assert_eq!((view.terminal_width, view.terminal_height), (80, 24));
    }

    #[test]
    fn test_required_size() {
        let mut view = view();
        assert_eq!(view.required_size(), (40 * 2 + 2 + SIDE_PANEL_WIDTH, 33));
        assert!(view.fits_terminal());
        view.update_terminal_size(80, 24);
        assert!(!view.fits_terminal());
    }

    #[test]
    fn test_status_message_expires() {
        let mut status = StatusLine::new();
        status.set_message("Level 2!".to_string(), Duration::from_secs(1));

        status.expire(Duration::from_millis(3_999));
        assert_eq!(status.message.as_deref(), Some("Level 2!"));

        status.expire(Duration::from_secs(4));
        assert!(status.message.is_none());
    }

    #[test]
    fn test_status_line_format() {
        let mut status = StatusLine::new();
        assert_eq!(
            status.format_status_line(GameState::Paused),
            "P/tap: resume | Esc: quit"
        );
        status.set_message("Paused".to_string(), Duration::ZERO);
        assert_eq!(
            status.format_status_line(GameState::Paused),
            "Paused | P/tap: resume | Esc: quit"
        );
    }
}
