//! Session settings and the append-only session table.
//!
//! A session is everything one monitoring run owns: the [`Settings`] read
//! once from the setup page and the [`SessionTable`] that grows by one row
//! per recorded tick. Refreshing throws the whole session away.

use core::fmt::Write as _;
use std::time::Duration;

use crate::error::SettingsError;
use crate::reading::{Reading, TIMESTAMP_LEN};
use crate::thresholds::{Quantity, Thresholds};

// =============================================================================
// Run Budget
// =============================================================================

/// Largest accepted value of the hours control.
pub const HOURS_LIMIT: u32 = 24;

/// Largest accepted value of the minutes control.
pub const MINUTES_LIMIT: u32 = 59;

/// Total wall-clock time a session may run before it stops.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RunBudget(Duration);

impl RunBudget {
    /// Budget from the setup page's hours and minutes controls.
    pub fn from_hours_minutes(
        hours: u32,
        minutes: u32,
    ) -> Result<Self, SettingsError> {
        if hours > HOURS_LIMIT {
            return Err(SettingsError::DurationOutOfRange {
                field: "hours",
                value: hours,
                max: HOURS_LIMIT,
            });
        }
        if minutes > MINUTES_LIMIT {
            return Err(SettingsError::DurationOutOfRange {
                field: "minutes",
                value: minutes,
                max: MINUTES_LIMIT,
            });
        }
        Ok(Self::from_secs(u64::from(hours) * 3600 + u64::from(minutes) * 60))
    }

    /// Budget of an exact number of seconds.
    pub const fn from_secs(secs: u64) -> Self { Self(Duration::from_secs(secs)) }

    /// Total seconds in the budget.
    #[inline]
    pub const fn as_secs(&self) -> u64 { self.0.as_secs() }

    /// Budget as a `Duration`.
    #[inline]
    pub const fn as_duration(&self) -> Duration { self.0 }

    /// A zero budget means the loop never starts.
    #[inline]
    pub const fn is_zero(&self) -> bool { self.0.is_zero() }

    /// Check whether the tick at `elapsed` is the last one of the run.
    ///
    /// The last tick is the one after which the next tick would land past the
    /// budget. It still records a reading, so a budget of `D` seconds yields
    /// `floor(D / interval) + 1` ticks.
    #[inline]
    pub fn is_final_tick_at(
        &self,
        elapsed: Duration,
        interval: Duration,
    ) -> bool {
        elapsed.saturating_add(interval) > self.0
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Everything the user chooses before a session starts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Settings {
    pub thresholds: Thresholds,
    pub budget: RunBudget,
}

impl Settings {
    /// Validate raw control values into settings.
    pub fn from_controls(
        pressure_max: u32,
        temperature_max: u32,
        vibration_max: u32,
        hours: u32,
        minutes: u32,
    ) -> Result<Self, SettingsError> {
        Ok(Self {
            thresholds: Thresholds::new(pressure_max, temperature_max, vibration_max)?,
            budget: RunBudget::from_hours_minutes(hours, minutes)?,
        })
    }
}

// =============================================================================
// Session Table
// =============================================================================

/// Insertion-ordered readings of one session. Rows are never changed or removed.
#[derive(Clone, Debug, Default)]
pub struct SessionTable {
    rows: Vec<Reading>,
}

impl SessionTable {
    pub const fn new() -> Self { Self { rows: Vec::new() } }

    /// Append a reading as the newest row.
    pub fn push(
        &mut self,
        reading: Reading,
    ) {
        self.rows.push(reading);
    }

    #[inline]
    pub fn len(&self) -> usize { self.rows.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// All rows, oldest first.
    #[inline]
    pub fn rows(&self) -> &[Reading] { &self.rows }

    /// Most recent row, if any.
    #[inline]
    pub fn last(&self) -> Option<&Reading> { self.rows.last() }

    /// Values of one quantity in insertion order (the chart series).
    pub fn series(
        &self,
        quantity: Quantity,
    ) -> impl Iterator<Item = f32> + '_ {
        self.rows.iter().map(move |r| r.value(quantity))
    }

    /// Window of at most `count` rows ending `scroll` rows before the newest.
    ///
    /// Returns the index of the first row in the window together with the
    /// rows, so callers can print 1-based row numbers. `scroll` is clamped so
    /// the window never runs past the oldest row.
    pub fn window(
        &self,
        count: usize,
        scroll: usize,
    ) -> (usize, &[Reading]) {
        let end = self.rows.len().saturating_sub(scroll.min(self.max_scroll(count)));
        let start = end.saturating_sub(count);
        (start, &self.rows[start..end])
    }

    /// Largest useful scroll offset for a window of `count` rows.
    #[inline]
    pub fn max_scroll(
        &self,
        count: usize,
    ) -> usize {
        self.rows.len().saturating_sub(count)
    }

    /// Plain-text rendering of the full table, one line per row plus a header.
    ///
    /// Written to the log when a session stops.
    pub fn dump(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        let mut header = String::new();
        let _ = write!(header, "{:>5}  {:<TIMESTAMP_LEN$}", "#", "TIMESTAMP");
        for quantity in Quantity::ALL {
            let _ = write!(header, "  {:>11}", quantity.label());
        }
        lines.push(header);

        for (i, reading) in self.rows.iter().enumerate() {
            let mut line = String::new();
            let _ = write!(line, "{:>5}  {}", i + 1, reading.timestamp_label());
            for quantity in Quantity::ALL {
                let _ = write!(line, "  {:>11.2}", reading.value(quantity));
            }
            lines.push(line);
        }
        lines
    }
}
