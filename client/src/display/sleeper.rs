use std::time::{Duration, Instant};

/// Paces frames so each one stays up for at least `target_delta_time`.
pub(crate) struct Sleeper {
    target_delta_time: Duration,
    last_instant: Option<Instant>,
}

impl Sleeper {
    pub(crate) fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps out the rest of the current frame and starts the next one.
    pub(crate) fn sleep(&mut self) {
        if let Some(remaining) = self.remaining() {
            spin_sleep::sleep(remaining);
        }

        self.last_instant = Some(Instant::now());
    }

    /// Time left in the current frame, `None` if we're already late.
    fn remaining(&self) -> Option<Duration> {
        // The first frame hasn't been timed yet, so it gets the whole delay.
        let elapsed = self
            .last_instant
            .map(|last_instant| last_instant.elapsed())
            .unwrap_or_default();

        self.target_delta_time
            .checked_sub(elapsed)
            .filter(|remaining| !remaining.is_zero())
    }
}
