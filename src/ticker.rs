//! Fixed-interval ticker for the monitoring loop.
//!
//! The window loop runs at ~50 FPS so events stay responsive, but the
//! monitor only advances once per [`TICK_INTERVAL`](crate::config::TICK_INTERVAL).
//! [`Ticker::poll`] is called every frame and yields a [`Tick`] whenever the
//! next deadline has passed.
//!
//! # Schedule
//!
//! Tick `n` is due at `start + n * interval`; tick 0 is due immediately.
//! Deadlines are derived from the start instant, never from the time the
//! previous tick was observed, so frame jitter does not accumulate.
//!
//! # Missed Ticks
//!
//! If the loop stalls for more than one interval (e.g. the window is being
//! dragged), the ticker skips to the latest due index instead of yielding a
//! burst of back-to-back ticks.

use std::time::{Duration, Instant};

/// One monitoring event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tick {
    /// Zero-based tick number since the session started.
    pub index: u64,
    /// Scheduled offset of this tick from the session start (`index * interval`).
    pub elapsed: Duration,
}

/// Yields one [`Tick`] per interval, measured from a fixed start instant.
#[derive(Clone, Debug)]
pub struct Ticker {
    start: Instant,
    interval: Duration,
    next_index: u64,
}

impl Ticker {
    /// Create a ticker whose first tick is due at `start`.
    ///
    /// # Panics
    ///
    /// If `interval` is zero.
    pub fn new(
        start: Instant,
        interval: Duration,
    ) -> Self {
        assert!(!interval.is_zero(), "ticker interval must be non-zero");
        Self {
            start,
            interval,
            next_index: 0,
        }
    }

    /// Instant the ticker was started at.
    #[inline]
    pub const fn start(&self) -> Instant { self.start }

    /// Index of the next tick that has not been yielded yet.
    #[inline]
    pub const fn next_index(&self) -> u64 { self.next_index }

    /// Offset of tick `index` from the start.
    fn offset(
        &self,
        index: u64,
    ) -> Duration {
        // Saturates only for absurd indices (u32::MAX intervals)
        self.interval.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Instant at which the next tick becomes due.
    pub fn next_deadline(&self) -> Instant { self.start + self.offset(self.next_index) }

    /// Return the due tick, if any.
    ///
    /// At most one tick is returned per call. When more than one deadline has
    /// passed, the latest due index is returned and the older ones are skipped.
    pub fn poll(
        &mut self,
        now: Instant,
    ) -> Option<Tick> {
        if now < self.next_deadline() {
            return None;
        }

        let since_start = now.duration_since(self.start);
        let due_index = (since_start.as_nanos() / self.interval.as_nanos()) as u64;
        let index = due_index.max(self.next_index);
        self.next_index = index + 1;

        Some(Tick {
            index,
            elapsed: self.offset(index),
        })
    }

    /// Time left until the next tick (zero when one is already due).
    pub fn time_until_next(
        &self,
        now: Instant,
    ) -> Duration {
        self.next_deadline().saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(3);

    #[test]
    fn test_first_tick_is_immediate() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start, INTERVAL);

        let tick = ticker.poll(start).expect("first tick should be due at start");
        assert_eq!(tick.index, 0);
        assert_eq!(tick.elapsed, Duration::ZERO);
    }

    #[test]
    fn test_no_tick_before_deadline() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start, INTERVAL);
        ticker.poll(start);

        assert!(ticker.poll(start + Duration::from_millis(2999)).is_none());
        assert_eq!(ticker.time_until_next(start + Duration::from_secs(1)), Duration::from_secs(2));
    }

    #[test]
    fn test_one_tick_per_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start, INTERVAL);

        // Poll every 20ms for 9 seconds: ticks at 0, 3, 6 and 9 seconds
        let mut ticks = Vec::new();
        for frame in 0..=450u64 {
            let now = start + Duration::from_millis(frame * 20);
            if let Some(tick) = ticker.poll(now) {
                ticks.push(tick);
            }
        }

        let indices: Vec<u64> = ticks.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(ticks[2].elapsed, Duration::from_secs(6));
    }

    #[test]
    fn test_late_poll_still_reports_scheduled_elapsed() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start, INTERVAL);
        ticker.poll(start);

        // Frame arrives 150ms after the deadline
        let tick = ticker.poll(start + Duration::from_millis(3150)).unwrap();
        assert_eq!(tick.index, 1);
        assert_eq!(tick.elapsed, INTERVAL, "Elapsed is the scheduled offset, not the poll time");
    }

    #[test]
    fn test_stall_skips_missed_ticks() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start, INTERVAL);
        ticker.poll(start);

        // Nothing polled for 10 seconds: ticks 1..=3 were due, only 3 is yielded
        let tick = ticker.poll(start + Duration::from_secs(10)).unwrap();
        assert_eq!(tick.index, 3);
        assert!(ticker.poll(start + Duration::from_secs(10)).is_none(), "No burst after a stall");
        assert_eq!(ticker.next_index(), 4);
    }

    #[test]
    fn test_next_deadline() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start, INTERVAL);
        assert_eq!(ticker.next_deadline(), start);
        ticker.poll(start);
        assert_eq!(ticker.next_deadline(), start + INTERVAL);
        assert_eq!(ticker.start(), start);
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_interval_panics() {
        let _ = Ticker::new(Instant::now(), Duration::ZERO);
    }
}
