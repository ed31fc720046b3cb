use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use swipesnake::config::GameConfig;
use swipesnake::game::{Direction, GameSession, GameState};
use swipesnake::input::{classify, InputAction, TouchPoint};
use swipesnake::stats::{AchievementSystem, GameStats};

fn random_gestures(count: usize) -> Vec<(TouchPoint, TouchPoint)> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let start = TouchPoint::new(rng.gen_range(0.0..1080.0), rng.gen_range(0.0..1920.0));
            let end = TouchPoint::new(rng.gen_range(0.0..1080.0), rng.gen_range(0.0..1920.0));
            (start, end)
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let gestures = random_gestures(1_000);
    c.bench_function("classify_1000_gestures", |b| {
        b.iter(|| {
            for &(start, end) in &gestures {
                black_box(classify(black_box(start), black_box(end), 50.0));
            }
        })
    });
}

fn bench_session_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_tick");
    let turns = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];

    for board in [20u16, 40, 80] {
        let config = GameConfig {
            board_width: board,
            board_height: board,
            ..GameConfig::default()
        };
        group.bench_with_input(BenchmarkId::new("board", board), &config, |b, config| {
            b.iter(|| {
                let mut session = GameSession::with_rng(
                    config,
                    StdRng::seed_from_u64(7),
                    GameStats::new(),
                    AchievementSystem::new(),
                );
                session.handle_action(InputAction::Activate, Duration::ZERO);
                let mut now = 0u64;
                for step in 0..500u64 {
                    if session.state() != GameState::Playing {
                        break;
                    }
                    if step % 4 == 0 {
                        let turn = turns[(step / 4 % 4) as usize];
                        session.handle_action(InputAction::Steer(turn), Duration::from_millis(now));
                    }
                    now += 200;
                    black_box(session.tick(Duration::from_millis(now)));
                }
                black_box(session.snapshot(Duration::from_millis(now)))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_session_tick);
criterion_main!(benches);
