//! Application orchestration layer
//!
//! Wires the input thread, the game session, stats persistence and the terminal UI
//! together and runs the frame loop.

pub mod runtime;

use crate::config::Config;
use crate::error::Result;
use crate::game::GameSession;
use crate::render::ui::{UIRenderer, ViewState};
use crate::render::RenderLoopState;
use crate::stats::StatsStore;
use log::{info, warn};
use runtime::{FrameClock, InputThread};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// How long the input thread blocks on each poll before checking for shutdown.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application orchestrator - owns the session and drives the UI
pub struct Application {
    config: Config,
    session: GameSession,
    store: StatsStore,
    ui_renderer: Box<dyn UIRenderer>,
    render_state: RenderLoopState,
}

impl Application {
    /// Load persisted stats and build the session.
    pub fn new(config: Config, store: StatsStore, ui_renderer: Box<dyn UIRenderer>) -> Result<Self> {
        let (stats, achievements) = store.load()?;
        info!(
            "Loaded stats: {} games played, high score {}",
            stats.games_played, stats.high_score
        );
        let session = GameSession::new(&config.game, stats, achievements);

        Ok(Self {
            config,
            session,
            store,
            ui_renderer,
            render_state: RenderLoopState::new(),
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run until the player exits. The terminal is restored even when the loop fails.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;
        let result = self.run_loop().await;
        let cleanup = self.ui_renderer.cleanup();
        result.and(cleanup)
    }

    async fn run_loop(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();
        let mut input = InputThread::start(
            action_tx,
            INPUT_POLL_INTERVAL,
            self.config.controls.clone(),
        );

        let clock = FrameClock::new();
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        let mut view_state = ViewState::new(self.session.snapshot(clock.now()), width, height);
        self.ui_renderer.render(&view_state)?;

        let mut frames = tokio::time::interval(self.config.game.frame_interval());
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                maybe_action = action_rx.recv() => {
                    let Some(action) = maybe_action else {
                        warn!("Input channel closed, shutting down");
                        break;
                    };
                    let keep_running = self.render_state.process_action(
                        action,
                        &mut self.session,
                        &mut view_state,
                        clock.now(),
                    );
                    if !keep_running {
                        info!("Exit requested");
                        break;
                    }
                }
                _ = frames.tick() => {
                    self.render_state.tick(&mut self.session, &mut view_state, clock.now());
                    if self.render_state.take_stats_dirty() {
                        self.save_stats();
                    }
                    self.ui_renderer.render(&view_state)?;
                }
            }
        }

        input.stop();
        Ok(())
    }

    /// Persist stats after a finished round. Failures are logged and play continues.
    fn save_stats(&self) {
        if let Err(err) = self
            .store
            .save(self.session.stats(), self.session.achievements())
        {
            warn!("Failed to save stats: {}", err);
        }
    }
}
