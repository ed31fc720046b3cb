use crate::config::ControlsConfig;
use crate::input::{spawn_input_thread, InputAction};
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;

/// Monotonic session clock; every game time is an offset from when it was created.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    started: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the blocking input thread and stops it on drop.
pub struct InputThread {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputThread {
    pub fn start(
        tx: UnboundedSender<InputAction>,
        poll_interval: Duration,
        controls: ControlsConfig,
    ) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let handle = spawn_input_thread(tx, Arc::clone(&shutdown), poll_interval, controls);
        Self {
            shutdown,
            handle: Some(handle),
        }
    }

    /// Signal the thread and wait for its current poll to finish.
    pub fn stop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                debug!("Input thread panicked during shutdown");
            }
        }
    }
}

impl Drop for InputThread {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_monotonic() {
        let clock = FrameClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
