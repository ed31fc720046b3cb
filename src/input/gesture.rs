//! Swipe gesture classification.
//!
//! A completed touch interaction (contact followed by release) is reduced to a single
//! [`DirectionSignal`]: a dominant swipe direction, or `Activate` for a short tap.
//! [`classify`] is a pure function; [`SwipeTracker`] pairs touch-down with touch-up and
//! drops anything out of order.

use log::debug;

/// Default minimum swipe distance, in device-independent units.
pub const DEFAULT_MIN_SWIPE_DISTANCE: f32 = 50.0;

/// A 2D screen coordinate captured at touch-down or touch-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Displacement between the two ends of a touch interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    pub delta_x: f32,
    pub delta_y: f32,
}

impl SwipeGesture {
    pub fn between(start: TouchPoint, end: TouchPoint) -> Self {
        Self {
            delta_x: end.x - start.x,
            delta_y: end.y - start.y,
        }
    }

    /// Classify this displacement against `min_distance`.
    ///
    /// Both axes under the threshold is a tap. Otherwise the larger axis wins, and an
    /// exact tie goes to the horizontal axis.
    pub fn classify(self, min_distance: f32) -> DirectionSignal {
        let abs_x = self.delta_x.abs();
        let abs_y = self.delta_y.abs();

        if abs_x < min_distance && abs_y < min_distance {
            return DirectionSignal::Activate;
        }

        if abs_x >= abs_y {
            if self.delta_x > 0.0 {
                DirectionSignal::Right
            } else {
                DirectionSignal::Left
            }
        } else if self.delta_y > 0.0 {
            DirectionSignal::Down
        } else {
            DirectionSignal::Up
        }
    }
}

/// Discrete output of gesture classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionSignal {
    Up,
    Down,
    Left,
    Right,
    /// Short tap with no dominant direction (pause/start request).
    Activate,
}

impl DirectionSignal {
    pub fn label(self) -> &'static str {
        match self {
            DirectionSignal::Up => "UP",
            DirectionSignal::Down => "DOWN",
            DirectionSignal::Left => "LEFT",
            DirectionSignal::Right => "RIGHT",
            DirectionSignal::Activate => "ACTIVATE",
        }
    }
}

/// Classify a touch interaction from its start and end points.
pub fn classify(start: TouchPoint, end: TouchPoint, min_distance: f32) -> DirectionSignal {
    SwipeGesture::between(start, end).classify(min_distance)
}

/// Pairs touch-down with touch-up so each completed gesture yields exactly one signal.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    min_distance: f32,
    start: Option<TouchPoint>,
}

impl SwipeTracker {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            start: None,
        }
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Record a new contact. A repeated touch-down replaces the previous start point.
    pub fn touch_down(&mut self, point: TouchPoint) {
        self.start = Some(point);
    }

    /// Complete the gesture. Returns `None` when no touch-down preceded this release.
    pub fn touch_up(&mut self, point: TouchPoint) -> Option<DirectionSignal> {
        let start = self.start.take()?;
        let signal = classify(start, point, self.min_distance);
        match signal {
            DirectionSignal::Activate => debug!("Tap detected"),
            other => debug!("Swipe {} detected", other.label()),
        }
        Some(signal)
    }

    /// Abandon the gesture in progress, if any.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SWIPE_DISTANCE)
    }
}
