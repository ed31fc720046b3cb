//! Timed power-ups and the eating combo.
//!
//! All times are offsets on the session clock, so the rules can be driven
//! deterministically from tests.

use std::time::Duration;

pub const SPEED_BOOST_DURATION: Duration = Duration::from_millis(5000);
pub const DOUBLE_SCORE_DURATION: Duration = Duration::from_millis(8000);
pub const PHASE_DURATION: Duration = Duration::from_millis(6000);
/// Combo resets when nothing is eaten for longer than this.
pub const COMBO_TIMEOUT: Duration = Duration::from_millis(3000);

/// Active power-ups; each is the session time it expires at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PowerUps {
    speed_until: Option<Duration>,
    double_until: Option<Duration>,
    phase_until: Option<Duration>,
    combo_count: u32,
    last_food_at: Duration,
}

impl PowerUps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expire finished power-ups and a stale combo.
    pub fn update(&mut self, now: Duration) {
        for slot in [
            &mut self.speed_until,
            &mut self.double_until,
            &mut self.phase_until,
        ] {
            if slot.is_some_and(|until| now >= until) {
                *slot = None;
            }
        }

        if now.saturating_sub(self.last_food_at) > COMBO_TIMEOUT {
            self.combo_count = 0;
        }
    }

    /// Register a food eaten at `now`, growing the combo.
    pub fn register_food(&mut self, now: Duration) {
        self.combo_count += 1;
        self.last_food_at = now;
    }

    pub fn activate_speed(&mut self, now: Duration) {
        self.speed_until = Some(now + SPEED_BOOST_DURATION);
    }

    pub fn activate_double_score(&mut self, now: Duration) {
        self.double_until = Some(now + DOUBLE_SCORE_DURATION);
    }

    pub fn activate_phase(&mut self, now: Duration) {
        self.phase_until = Some(now + PHASE_DURATION);
    }

    pub fn is_speed_active(&self) -> bool {
        self.speed_until.is_some()
    }

    pub fn is_double_score_active(&self) -> bool {
        self.double_until.is_some()
    }

    pub fn is_phase_active(&self) -> bool {
        self.phase_until.is_some()
    }

    pub fn combo_count(&self) -> u32 {
        self.combo_count
    }

    /// Grows by one for every three foods in the current combo.
    pub fn combo_multiplier(&self) -> u32 {
        1 + self.combo_count / 3
    }

    pub fn score_multiplier(&self) -> u32 {
        let multiplier = self.combo_multiplier();
        if self.is_double_score_active() {
            multiplier * 2
        } else {
            multiplier
        }
    }

    /// Remaining time per active power-up, for display.
    pub fn remaining(&self, now: Duration) -> ActiveTimers {
        let left = |slot: Option<Duration>| slot.map(|until| until.saturating_sub(now));
        ActiveTimers {
            speed: left(self.speed_until),
            double_score: left(self.double_until),
            phase: left(self.phase_until),
        }
    }
}

/// Snapshot of how long each power-up has left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveTimers {
    pub speed: Option<Duration>,
    pub double_score: Option<Duration>,
    pub phase: Option<Duration>,
}
