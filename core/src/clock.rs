use web_time::{Duration, Instant};

/// Wall-clock span of a single game.
///
/// Starts with the first action and freezes once the game ends. Presentation layers poll
/// [`GameClock::is_running`] to decide whether to keep scheduling timer ticks.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GameClock {
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
}

impl GameClock {
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// No-op unless the clock is running.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.ended_at = Some(Instant::now());
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.ended_at.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self
                .ended_at
                .unwrap_or_else(Instant::now)
                .duration_since(started_at),
            None => Duration::ZERO,
        }
    }

    /// How many seconds have passed since the game started, 0 if it hasn't started
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed().as_secs().try_into().unwrap_or(u32::MAX)
    }
}
