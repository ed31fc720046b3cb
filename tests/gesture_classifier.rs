use proptest::prelude::*;

use swipesnake::game::Direction;
use swipesnake::input::{classify, DirectionSignal, InputAction, SwipeTracker, TouchPoint};

const MIN: f32 = 50.0;

fn point(x: f32, y: f32) -> TouchPoint {
    TouchPoint::new(x, y)
}

#[test]
fn one_past_threshold_on_each_axis() {
    let origin = point(100.0, 100.0);
    assert_eq!(classify(origin, point(151.0, 100.0), MIN), DirectionSignal::Right);
    assert_eq!(classify(origin, point(49.0, 100.0), MIN), DirectionSignal::Left);
    assert_eq!(classify(origin, point(100.0, 151.0), MIN), DirectionSignal::Down);
    assert_eq!(classify(origin, point(100.0, 49.0), MIN), DirectionSignal::Up);
}

#[test]
fn diagonal_tie_goes_horizontal() {
    let origin = point(0.0, 0.0);
    assert_eq!(classify(origin, point(51.0, 51.0), MIN), DirectionSignal::Right);
    assert_eq!(classify(origin, point(-51.0, 51.0), MIN), DirectionSignal::Left);
    assert_eq!(classify(origin, point(-51.0, -51.0), MIN), DirectionSignal::Left);
}

#[test]
fn threshold_is_configurable() {
    let start = point(0.0, 0.0);
    let end = point(30.0, 0.0);
    assert_eq!(classify(start, end, MIN), DirectionSignal::Activate);
    assert_eq!(classify(start, end, 20.0), DirectionSignal::Right);
}

#[test]
fn tracker_feeds_the_action_table() {
    let mut tracker = SwipeTracker::new(MIN);
    tracker.touch_down(point(200.0, 200.0));
    let signal = tracker.touch_up(point(200.0, 90.0)).unwrap();
    assert_eq!(InputAction::from(signal), InputAction::Steer(Direction::Up));

    tracker.touch_down(point(10.0, 10.0));
    let signal = tracker.touch_up(point(12.0, 8.0)).unwrap();
    assert_eq!(InputAction::from(signal), InputAction::Activate);
}

proptest! {
    #[test]
    fn short_moves_are_taps(
        x in -1000.0f32..1000.0,
        y in -1000.0f32..1000.0,
        dx in -49.0f32..49.0,
        dy in -49.0f32..49.0,
    ) {
        prop_assert_eq!(
            classify(point(x, y), point(x + dx, y + dy), MIN),
            DirectionSignal::Activate
        );
    }

    #[test]
    fn horizontal_dominance_wins(
        dx in 51.0f32..2000.0,
        ratio in 0.0f32..=1.0,
        left in any::<bool>(),
        up in any::<bool>(),
    ) {
        let dy = dx * ratio;
        let end = point(if left { -dx } else { dx }, if up { -dy } else { dy });
        let expected = if left { DirectionSignal::Left } else { DirectionSignal::Right };
        prop_assert_eq!(classify(point(0.0, 0.0), end, MIN), expected);
    }

    #[test]
    fn vertical_dominance_wins(
        dy in 51.0f32..2000.0,
        ratio in 0.0f32..0.99,
        left in any::<bool>(),
        up in any::<bool>(),
    ) {
        let dx = dy * ratio;
        let end = point(if left { -dx } else { dx }, if up { -dy } else { dy });
        let expected = if up { DirectionSignal::Up } else { DirectionSignal::Down };
        prop_assert_eq!(classify(point(0.0, 0.0), end, MIN), expected);
    }

    #[test]
    fn classification_is_deterministic(
        sx in -500.0f32..500.0,
        sy in -500.0f32..500.0,
        ex in -500.0f32..500.0,
        ey in -500.0f32..500.0,
        min in 0.0f32..200.0,
    ) {
        let start = point(sx, sy);
        let end = point(ex, ey);
        prop_assert_eq!(classify(start, end, min), classify(start, end, min));
    }

    #[test]
    fn tracker_yields_one_signal_per_gesture(
        sx in 0.0f32..500.0,
        sy in 0.0f32..500.0,
        ex in 0.0f32..500.0,
        ey in 0.0f32..500.0,
    ) {
        let mut tracker = SwipeTracker::new(MIN);
        prop_assert_eq!(tracker.touch_up(point(ex, ey)), None);

        tracker.touch_down(point(sx, sy));
        let signal = tracker.touch_up(point(ex, ey));
        prop_assert_eq!(signal, Some(classify(point(sx, sy), point(ex, ey), MIN)));
        prop_assert_eq!(tracker.touch_up(point(ex, ey)), None);
    }
}
