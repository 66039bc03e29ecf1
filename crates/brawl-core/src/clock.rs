//! Fixed-timestep accumulator.
//!
//! The host calls [`FixedStep::accumulate`] once per rendered frame with the
//! wall time since the previous frame and runs as many simulation ticks as it
//! returns. Frame rate and tick rate are independent: a 144 Hz display runs
//! zero or one tick per frame, a stalled 20 Hz display runs three.
//!
//! After a long stall (a backgrounded tab, a debugger pause) the backlog is
//! capped at `max_ticks_per_advance` and the rest is dropped, so the match
//! slows down instead of fast-forwarding.

use std::time::Duration;

use tracing::warn;

use crate::config::TimingConfig;

/// Converts wall time into whole simulation ticks.
#[derive(Debug, Clone)]
pub struct FixedStep {
    tick_duration: Duration,
    accumulator: Duration,
    max_ticks: u32,
}

impl FixedStep {
    /// Creates an accumulator for the configured tick rate.
    #[must_use]
    pub fn new(timing: &TimingConfig) -> Self {
        let hz = u64::from(timing.tick_rate_hz.max(1));
        Self {
            tick_duration: Duration::from_nanos(1_000_000_000 / hz),
            accumulator: Duration::ZERO,
            max_ticks: timing.max_ticks_per_advance.max(1),
        }
    }

    /// Duration of a single tick.
    #[must_use]
    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Time banked toward the next tick.
    #[must_use]
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Adds `elapsed` wall time and returns how many ticks are now due.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.tick_duration && ticks < self.max_ticks {
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }

        if self.accumulator >= self.tick_duration {
            let dropped = self.accumulator.as_nanos() / self.tick_duration.as_nanos();
            warn!(dropped_ticks = %dropped, max = self.max_ticks, "simulation fell behind, dropping backlog");
            self.accumulator = Duration::from_nanos(
                u64::try_from(self.accumulator.as_nanos() % self.tick_duration.as_nanos()).unwrap_or(0),
            );
        }

        ticks
    }

    /// Discards banked time.
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
