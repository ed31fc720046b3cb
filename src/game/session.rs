//! One running game: the state machine, movement ticks and scoring.

use crate::config::GameConfig;
use crate::game::food::{Food, FoodKind};
use crate::game::level::{self, Difficulty, LevelProgress};
use crate::game::power_ups::PowerUps;
use crate::game::snake::{Collision, Direction, Snake};
use crate::input::InputAction;
use crate::render::protocol::{GameEvent, GameSnapshot};
use crate::stats::{AchievementSystem, GameRecord, GameStats};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::time::Duration;

/// Top-level game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameState::Menu => "Menu",
            GameState::Playing => "Playing",
            GameState::Paused => "Paused",
            GameState::GameOver => "Game Over",
        };
        f.write_str(label)
    }
}

/// A game session spanning many rounds, owning lifetime stats and achievements.
///
/// `now` arguments are offsets on a monotonic clock supplied by the caller. Time spent
/// paused is subtracted, so power-ups and the combo do not run out during a pause.
pub struct GameSession {
    board_width: u16,
    board_height: u16,
    rng: StdRng,
    state: GameState,
    difficulty: Difficulty,
    snake: Snake,
    food: Option<Food>,
    power_ups: PowerUps,
    progress: LevelProgress,
    score: u64,
    foods_eaten: u32,
    special_foods_eaten: u32,
    max_combo: u32,
    started_at: Duration,
    last_move_at: Duration,
    paused_at: Option<Duration>,
    paused_total: Duration,
    stats: GameStats,
    achievements: AchievementSystem,
}

impl GameSession {
    pub fn new(config: &GameConfig, stats: GameStats, achievements: AchievementSystem) -> Self {
        Self::with_rng(config, StdRng::from_entropy(), stats, achievements)
    }

    /// Session with a caller-provided RNG, for reproducible food placement.
    pub fn with_rng(
        config: &GameConfig,
        rng: StdRng,
        stats: GameStats,
        mut achievements: AchievementSystem,
    ) -> Self {
        // Bring progress up to date with loaded stats.
        achievements.update(&stats);
        let mut session = Self {
            board_width: config.board_width,
            board_height: config.board_height,
            rng,
            state: GameState::Menu,
            difficulty: config.difficulty,
            snake: Snake::new(config.board_width, config.board_height),
            food: None,
            power_ups: PowerUps::new(),
            progress: LevelProgress::new(),
            score: 0,
            foods_eaten: 0,
            special_foods_eaten: 0,
            max_combo: 0,
            started_at: Duration::ZERO,
            last_move_at: Duration::ZERO,
            paused_at: None,
            paused_total: Duration::ZERO,
            stats,
            achievements,
        };
        session.reset(Duration::ZERO);
        session
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Food> {
        self.food
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn achievements(&self) -> &AchievementSystem {
        &self.achievements
    }

    /// Best score so far, counting the round in progress.
    pub fn high_score(&self) -> u64 {
        self.stats.high_score.max(self.score)
    }

    /// Current delay between moves.
    pub fn move_delay(&self) -> Duration {
        level::move_delay(
            self.difficulty.base_move_delay(),
            self.progress.level,
            self.power_ups.is_speed_active(),
        )
    }

    /// Apply a player action according to the current state.
    ///
    /// `Exit` and `Resize` belong to the render loop and are ignored here.
    pub fn handle_action(&mut self, action: InputAction, now: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match (self.state, action) {
            (GameState::Menu, InputAction::Activate)
            | (GameState::GameOver, InputAction::Restart) => {
                self.reset(now);
                self.set_state(GameState::Playing, &mut events);
            }
            (GameState::Menu, InputAction::SelectDifficulty(difficulty)) => {
                if self.difficulty != difficulty {
                    self.difficulty = difficulty;
                    events.push(GameEvent::DifficultyChanged(difficulty));
                }
            }
            (GameState::Playing, InputAction::Activate | InputAction::TogglePause) => {
                self.paused_at = Some(now);
                self.set_state(GameState::Paused, &mut events);
            }
            (GameState::Playing, InputAction::Steer(direction)) => {
                self.steer(direction);
            }
            (GameState::Paused, InputAction::Activate | InputAction::TogglePause) => {
                if let Some(paused_at) = self.paused_at.take() {
                    self.paused_total += now.saturating_sub(paused_at);
                }
                self.set_state(GameState::Playing, &mut events);
            }
            (GameState::GameOver, InputAction::Activate) => {
                self.set_state(GameState::Menu, &mut events);
            }
            _ => {}
        }
        events
    }

    /// Advance the game clock: expire power-ups and move the snake when it is due.
    pub fn tick(&mut self, now: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if self.state != GameState::Playing {
            return events;
        }

        let now = self.game_time(now);
        self.power_ups.update(now);

        if now.saturating_sub(self.last_move_at) < self.move_delay() {
            return events;
        }
        self.last_move_at = now;

        self.snake.advance();
        let collision = self.snake.check_collision(
            self.board_width,
            self.board_height,
            self.power_ups.is_phase_active(),
        );
        if collision != Collision::None {
            debug!("Snake collided: {:?} at {:?}", collision, self.snake.head());
            self.finish_round(now, &mut events);
            return events;
        }

        if self.food.is_some_and(|food| food.cell == self.snake.head()) {
            self.eat_food(now, &mut events);
        }
        events
    }

    /// Everything needed to draw the current frame.
    pub fn snapshot(&self, now: Duration) -> GameSnapshot {
        let game_now = match self.paused_at {
            Some(paused_at) => paused_at.saturating_sub(self.paused_total),
            None => self.game_time(now),
        };
        GameSnapshot {
            state: self.state,
            difficulty: self.difficulty,
            board_width: self.board_width,
            board_height: self.board_height,
            snake: self.snake.segments().collect(),
            heading: self.snake.direction(),
            food: self.food,
            score: self.score,
            high_score: self.high_score(),
            level: self.progress.level,
            foods_this_level: self.progress.foods_this_level,
            foods_needed: self.progress.foods_needed(),
            combo_multiplier: self.power_ups.combo_multiplier(),
            score_multiplier: self.power_ups.score_multiplier(),
            timers: self.power_ups.remaining(game_now),
            achievements_unlocked: self.achievements.unlocked_count(),
            achievements_total: self.achievements.total_count(),
            next_achievement: self
                .achievements
                .closest_locked()
                .map(|a| (a.name, a.progress_percent().floor() as u8)),
        }
    }

    fn game_time(&self, now: Duration) -> Duration {
        now.saturating_sub(self.paused_total)
    }

    fn set_state(&mut self, state: GameState, events: &mut Vec<GameEvent>) {
        debug!("Game state {} -> {}", self.state, state);
        self.state = state;
        events.push(GameEvent::StateChanged(state));
    }

    fn steer(&mut self, direction: Direction) {
        if !self.snake.change_direction(direction) {
            debug!("Ignored reversal to {:?}", direction);
        }
    }

    /// Start a fresh round at `now`.
    fn reset(&mut self, now: Duration) {
        self.snake = Snake::new(self.board_width, self.board_height);
        self.power_ups = PowerUps::new();
        self.progress = LevelProgress::new();
        self.score = 0;
        self.foods_eaten = 0;
        self.special_foods_eaten = 0;
        self.max_combo = 0;
        self.paused_at = None;
        self.paused_total = Duration::ZERO;
        self.started_at = now;
        self.last_move_at = now;
        self.food = Food::spawn(
            &mut self.rng,
            &self.snake,
            self.board_width,
            self.board_height,
        );
    }

    fn eat_food(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        let Some(food) = self.food else {
            return;
        };

        self.power_ups.register_food(now);
        self.max_combo = self.max_combo.max(self.power_ups.combo_multiplier());
        let multiplier = u64::from(self.power_ups.score_multiplier());
        let base = u64::from(self.progress.base_points);

        let points = match food.kind {
            FoodKind::Normal => {
                self.snake.grow();
                base
            }
            FoodKind::Speed => {
                self.snake.grow();
                self.power_ups.activate_speed(now);
                base + 5
            }
            FoodKind::Double => {
                self.snake.grow();
                self.power_ups.activate_double_score(now);
                base
            }
            FoodKind::Golden => {
                self.snake.grow();
                base * 3
            }
            FoodKind::Shrink => {
                self.snake.shrink(2);
                base / 2
            }
            FoodKind::Phase => {
                self.snake.grow();
                self.power_ups.activate_phase(now);
                base + 10
            }
            FoodKind::Mega => {
                self.snake.grow();
                base * 5
            }
        } * multiplier;

        self.score += points;
        self.foods_eaten += 1;
        if food.kind.is_special() {
            self.special_foods_eaten += 1;
        }
        events.push(GameEvent::FoodEaten {
            kind: food.kind,
            points,
        });

        self.food = Food::spawn(
            &mut self.rng,
            &self.snake,
            self.board_width,
            self.board_height,
        );

        if self.progress.record_food() {
            info!(
                "Level up: {} (base points {})",
                self.progress.level, self.progress.base_points
            );
            events.push(GameEvent::LevelUp {
                level: self.progress.level,
            });
        }
    }

    fn finish_round(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        let record = GameRecord {
            score: self.score,
            level: self.progress.level,
            length: self.snake.len(),
            foods_eaten: self.foods_eaten,
            special_foods_eaten: self.special_foods_eaten,
            max_combo: self.max_combo,
            duration: now.saturating_sub(self.started_at),
        };
        let new_high_score = self.score > self.stats.high_score;
        self.stats.record_game(&record);
        info!(
            "Game over: score {} at level {}, length {}{}",
            record.score,
            record.level,
            record.length,
            if new_high_score { " (new high score)" } else { "" }
        );

        events.push(GameEvent::GameOver {
            score: self.score,
            new_high_score,
        });
        events.extend(
            self.achievements
                .update(&self.stats)
                .into_iter()
                .map(GameEvent::AchievementUnlocked),
        );
        self.set_state(GameState::GameOver, events);
    }
}
