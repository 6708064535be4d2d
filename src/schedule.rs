use std::time::Duration;
use tokio::time::Instant;

/// Tracks when the next cycle is due. The first cycle is due immediately.
pub struct Schedule {
    next_due: Instant,
    interval: Duration,
}

impl Schedule {
    pub fn new(now: Instant, interval: Duration) -> Self {
        Self {
            next_due: now,
            interval,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Time left until the next cycle, zero when already due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Next cycle is one interval after `now`, the time the last cycle ended.
    pub fn advance(&mut self, now: Instant) {
        self.next_due = now + self.interval;
    }
}
