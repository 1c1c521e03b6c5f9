//! Periodic time source driven by elapsed wall time.

use std::time::Duration;

/// Counts whole periods in the time fed to it.  Leftover time carries over
/// to the next call, so the long-run rate is exact regardless of how the
/// caller slices time.
#[derive(Clone, Debug)]
pub struct Periodic {
    period: Duration,
    pending: Duration,
}

impl Periodic {
    /// Periods shorter than a millisecond are raised to one.
    pub fn new(period: Duration) -> Self {
        Periodic { period: period.max(Duration::from_millis(1)), pending: Duration::ZERO }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add `dt` and return how many periods completed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.pending += dt;
        let mut fired = 0;
        while self.pending >= self.period {
            self.pending -= self.period;
            fired += 1;
        }
        fired
    }

    /// Like `advance`, but reports at most `max` periods.  A larger backlog
    /// is dropped and the next period starts now.
    pub fn advance_capped(&mut self, dt: Duration, max: u32) -> u32 {
        let fired = self.advance(dt);
        if fired > max {
            self.reset();
            return max;
        }
        fired
    }

    /// Time left until the next period completes.
    pub fn remaining(&self) -> Duration {
        self.period - self.pending
    }

    /// Drop accumulated time; the next period starts now.
    pub fn reset(&mut self) {
        self.pending = Duration::ZERO;
    }
}
