//! Low-level input collection: crossterm polling, mouse swipe tracking, and translation
//! into primitive events that the higher-level input service can consume.

use crate::config::ControlsConfig;
use crate::error::Result;
use crate::input::gesture::{DirectionSignal, SwipeTracker, TouchPoint};
use ratatui::crossterm::event::{self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use std::collections::VecDeque;
use std::time::Duration;

/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Low-level events surfaced by the raw input collector.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    Swipe(DirectionSignal),
}

/// Converts terminal cell coordinates into touch units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchScale {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl TouchScale {
    pub fn point(&self, column: u16, row: u16) -> TouchPoint {
        TouchPoint::new(
            f32::from(column) * self.cell_width,
            f32::from(row) * self.cell_height,
        )
    }
}

impl From<&ControlsConfig> for TouchScale {
    fn from(controls: &ControlsConfig) -> Self {
        Self {
            cell_width: controls.cell_width,
            cell_height: controls.cell_height,
        }
    }
}

/// Collector that polls crossterm for events and turns left-button drags into swipes.
#[derive(Debug)]
pub struct RawInputCollector {
    tracker: SwipeTracker,
    scale: TouchScale,
    pending_events: VecDeque<RawInputEvent>,
}

impl RawInputCollector {
    pub fn new(controls: &ControlsConfig) -> Self {
        Self {
            tracker: SwipeTracker::new(controls.min_swipe_distance),
            scale: TouchScale::from(controls),
            pending_events: VecDeque::new(),
        }
    }

    /// Check whether the collector has nothing queued and no touch in progress.
    pub fn is_idle(&self) -> bool {
        self.pending_events.is_empty() && !self.tracker.is_tracking()
    }

    /// Process a synthetic event (primarily used by unit tests).
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event);
    }

    /// Retrieve the next raw input event, blocking up to `timeout`.
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<RawInputEvent>> {
        if let Some(event) = self.pop_pending() {
            return Ok(Some(event));
        }

        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));
        if !event::poll(poll_timeout)? {
            return Ok(None);
        }

        let event = event::read()?;
        self.enqueue_event(event);
        Ok(self.pop_pending())
    }

    fn enqueue_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                self.pending_events.push_back(RawInputEvent::Key(key_event));
            }
            Event::Resize(width, height) => {
                // Coordinates captured before a resize no longer line up.
                self.tracker.cancel();
                self.pending_events
                    .push_back(RawInputEvent::Resize { width, height });
            }
            Event::Mouse(mouse_event) => {
                if let Some(signal) = self.handle_mouse_event(mouse_event) {
                    self.pending_events.push_back(RawInputEvent::Swipe(signal));
                }
            }
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> Option<DirectionSignal> {
        let point = self.scale.point(mouse_event.column, mouse_event.row);
        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.tracker.touch_down(point);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.tracker.touch_up(point),
            _ => None,
        }
    }

    /// Pop the next pending raw event.
    pub fn pop_pending(&mut self) -> Option<RawInputEvent> {
        self.pending_events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn collector() -> RawInputCollector {
        RawInputCollector::new(&ControlsConfig::default())
    }

    #[test]
    fn drag_becomes_swipe_on_release() {
        let mut collector = collector();
        collector.process_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        collector.process_event(mouse(MouseEventKind::Drag(MouseButton::Left), 14, 10));
        assert!(collector.pop_pending().is_none());

        // 6 columns at 10 units each clears the 50-unit threshold.
        collector.process_event(mouse(MouseEventKind::Up(MouseButton::Left), 16, 10));
        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Swipe(DirectionSignal::Right))
        );
        assert!(collector.is_idle());
    }

    #[test]
    fn vertical_cells_are_taller() {
        let mut collector = collector();
        collector.process_event(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        collector.process_event(mouse(MouseEventKind::Up(MouseButton::Left), 12, 7));
        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Swipe(DirectionSignal::Up))
        );
    }

    #[test]
    fn click_in_place_is_activate() {
        let mut collector = collector();
        collector.process_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 3));
        collector.process_event(mouse(MouseEventKind::Up(MouseButton::Left), 4, 3));
        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Swipe(DirectionSignal::Activate))
        );
    }

    #[test]
    fn stray_release_and_other_buttons_are_ignored() {
        let mut collector = collector();
        collector.process_event(mouse(MouseEventKind::Up(MouseButton::Left), 30, 3));
        collector.process_event(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0));
        collector.process_event(mouse(MouseEventKind::Up(MouseButton::Right), 30, 0));
        collector.process_event(mouse(MouseEventKind::ScrollDown, 0, 0));
        assert!(collector.pop_pending().is_none());
        assert!(collector.is_idle());
    }

    #[test]
    fn resize_cancels_touch_in_progress() {
        let mut collector = collector();
        collector.process_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        collector.process_event(Event::Resize(80, 40));
        collector.process_event(mouse(MouseEventKind::Up(MouseButton::Left), 40, 0));

        assert_eq!(
            collector.pop_pending(),
            Some(RawInputEvent::Resize {
                width: 80,
                height: 40
            })
        );
        assert!(collector.pop_pending().is_none());
    }

    #[test]
    fn queues_key_events() {
        let mut collector = collector();
        collector.process_event(Event::Key(KeyEvent::new(
            KeyCode::Char('w'),
            KeyModifiers::NONE,
        )));

        match collector.pop_pending() {
            Some(RawInputEvent::Key(key)) => assert_eq!(key.code, KeyCode::Char('w')),
            other => panic!("expected key event, got {other:?}"),
        }
    }
}
