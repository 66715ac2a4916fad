//! Monitoring session state machine.
//!
//! # States
//!
//! ```text
//!            start (budget = 0)
//!   Idle ─────────────────────────────► Stopped(NoBudget)
//!     │
//!     │ start (budget > 0)
//!     ▼
//!   Running ──tick, next tick within budget──► Running   (reading appended)
//!     │
//!     └─────tick, next tick past budget───────► Stopped(BudgetExhausted)
//!                                                (reading appended, then stop)
//! ```
//!
//! While running, every tick records exactly one reading, including the
//! tick that ends the run. The run ends on the tick after which the next
//! one would land past the budget, so a budget of `D` seconds with 3-second
//! ticks records `floor(D / 3) + 1` rows. Ticks in any other state are
//! ignored.
//!
//! Refreshing never resumes: the caller drops the session and builds a new
//! one from the same [`Settings`].

use std::time::Instant;

use log::{debug, info};

use crate::config::TICK_INTERVAL;
use crate::reading::ReadingSource;
use crate::session::{SessionTable, Settings};
use crate::thresholds::Quantity;
use crate::ticker::{Tick, Ticker};

/// Why a session is no longer running.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StopReason {
    /// Zero duration was requested; the loop never ran.
    NoBudget,
    /// The run budget was used up.
    BudgetExhausted,
}

/// Lifecycle state of a monitoring session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MonitorState {
    /// Created but not started.
    Idle,
    /// Recording one reading per tick.
    Running,
    /// Finished; the table is frozen.
    Stopped(StopReason),
}

/// What a single tick did to the session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// A reading was appended as row `row` (zero-based).
    Recorded { row: usize },
    /// The final reading was appended as row `row` and the session stopped.
    Stopped { row: usize },
    /// The session was not running.
    Ignored,
}

/// One monitoring run: settings, table, ticker and lifecycle state.
pub struct Session {
    settings: Settings,
    table: SessionTable,
    state: MonitorState,
    ticker: Option<Ticker>,
}

impl Session {
    /// Create an idle session with an empty table.
    pub const fn new(settings: Settings) -> Self {
        Self {
            settings,
            table: SessionTable::new(),
            state: MonitorState::Idle,
            ticker: None,
        }
    }

    /// Start the session at `now`.
    ///
    /// A zero budget goes straight to `Stopped(NoBudget)`. Starting a session
    /// that is not idle does nothing.
    pub fn start(
        &mut self,
        now: Instant,
    ) {
        if self.state != MonitorState::Idle {
            return;
        }

        let thresholds = self.settings.thresholds;
        if self.settings.budget.is_zero() {
            info!("Monitoring time is zero, no data will be generated");
            self.state = MonitorState::Stopped(StopReason::NoBudget);
            return;
        }

        info!(
            "Monitoring started: budget {}s, thresholds pressure {} / temperature {} / vibration {}",
            self.settings.budget.as_secs(),
            thresholds.pressure_max,
            thresholds.temperature_max,
            thresholds.vibration_max,
        );
        self.ticker = Some(Ticker::new(now, TICK_INTERVAL));
        self.state = MonitorState::Running;
    }

    /// Poll the ticker and apply a due tick, if any.
    pub fn poll(
        &mut self,
        source: &mut impl ReadingSource,
        now: Instant,
    ) -> Option<TickOutcome> {
        let tick = self.ticker.as_mut()?.poll(now)?;
        Some(self.on_tick(tick, source))
    }

    /// Apply one tick.
    pub fn on_tick(
        &mut self,
        tick: Tick,
        source: &mut impl ReadingSource,
    ) -> TickOutcome {
        if self.state != MonitorState::Running {
            return TickOutcome::Ignored;
        }

        let reading = source.read();
        self.table.push(reading);
        let row = self.table.len() - 1;
        debug!(
            "Tick {} row {}: {} pressure {:.2} temperature {:.2} vibration {:.2}",
            tick.index,
            row + 1,
            reading.timestamp_label(),
            reading.pressure,
            reading.temperature,
            reading.vibration,
        );

        if self.settings.budget.is_final_tick_at(tick.elapsed, TICK_INTERVAL) {
            self.stop();
            return TickOutcome::Stopped { row };
        }
        TickOutcome::Recorded { row }
    }

    fn stop(&mut self) {
        self.state = MonitorState::Stopped(StopReason::BudgetExhausted);
        self.ticker = None;
        info!("Monitoring stopped after {} readings", self.table.len());
        for line in self.table.dump() {
            info!("{line}");
        }
    }

    #[inline]
    pub const fn state(&self) -> MonitorState { self.state }

    #[inline]
    pub const fn settings(&self) -> &Settings { &self.settings }

    #[inline]
    pub const fn table(&self) -> &SessionTable { &self.table }

    /// Whether the table should be drawn with threshold highlighting.
    ///
    /// Only the live table is styled; the final dump after stopping is plain.
    #[inline]
    pub fn is_styled(&self) -> bool { self.state == MonitorState::Running }

    /// Whether a quantity's value in `row` is above its threshold.
    pub fn is_highlighted(
        &self,
        row: usize,
        quantity: Quantity,
    ) -> bool {
        self.is_styled()
            && self
                .table
                .rows()
                .get(row)
                .is_some_and(|r| self.settings.thresholds.exceeds(quantity, r.value(quantity)))
    }

    /// Wall-clock seconds since the session started (0 when not running).
    pub fn elapsed_secs(
        &self,
        now: Instant,
    ) -> u64 {
        self.ticker
            .as_ref()
            .map_or(0, |t| now.saturating_duration_since(t.start()).as_secs())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use super::*;
    use crate::reading::Reading;
    use crate::session::RunBudget;
    use crate::thresholds::Thresholds;

    /// Source that replays a fixed reading with an advancing timestamp.
    struct FixedSource {
        reading: Reading,
        calls: u32,
    }

    impl FixedSource {
        fn new(
            pressure: f32,
            temperature: f32,
            vibration: f32,
        ) -> Self {
            Self {
                reading: Reading {
                    timestamp: NaiveDate::from_ymd_opt(2024, 5, 1)
                        .unwrap()
                        .and_hms_opt(8, 0, 0)
                        .unwrap(),
                    pressure,
                    temperature,
                    vibration,
                },
                calls: 0,
            }
        }
    }

    impl ReadingSource for FixedSource {
        fn read(&mut self) -> Reading {
            let mut reading = self.reading;
            reading.timestamp += chrono::Duration::seconds(3 * i64::from(self.calls));
            self.calls += 1;
            reading
        }
    }

    fn settings(budget_secs: u64) -> Settings {
        Settings {
            thresholds: Thresholds::default(),
            budget: RunBudget::from_secs(budget_secs),
        }
    }

    /// Run a session to completion, polling like the frame loop does.
    fn run_to_end(
        session: &mut Session,
        source: &mut impl ReadingSource,
    ) {
        let start = Instant::now();
        session.start(start);
        let mut frame = 0u64;
        while session.state() == MonitorState::Running {
            session.poll(source, start + Duration::from_millis(frame * 20));
            frame += 1;
            assert!(frame < 1_000_000, "session never stopped");
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(settings(60));
        assert_eq!(session.state(), MonitorState::Idle);
        assert!(session.table().is_empty());
    }

    #[test]
    fn test_zero_budget_never_runs() {
        let mut session = Session::new(settings(0));
        let mut source = FixedSource::new(95.0, 25.0, 3.0);
        session.start(Instant::now());

        assert_matches!(session.state(), MonitorState::Stopped(StopReason::NoBudget));
        assert_eq!(session.poll(&mut source, Instant::now()), None, "No ticker without budget");
        assert_eq!(session.table().len(), 0);
        assert_eq!(source.calls, 0, "Generator must not be called");
    }

    #[test]
    fn test_six_second_run_records_stopping_tick() {
        let mut session = Session::new(settings(6));
        let mut source = FixedSource::new(95.0, 25.0, 3.0);
        run_to_end(&mut session, &mut source);

        assert_matches!(session.state(), MonitorState::Stopped(StopReason::BudgetExhausted));
        assert_eq!(session.table().len(), 3, "Ticks at 0s, 3s and the stopping 6s tick all record");
        assert_eq!(session.table().dump().len(), 4, "Final dump is header plus three rows");
    }

    #[test]
    fn test_row_count_is_floor_of_budget_over_interval_plus_one() {
        for budget in [1u64, 2, 3, 4, 7, 9, 10, 60] {
            let mut session = Session::new(settings(budget));
            let mut source = FixedSource::new(60.0, 25.0, 3.0);
            run_to_end(&mut session, &mut source);
            let expected = (budget / 3 + 1) as usize;
            assert_eq!(session.table().len(), expected, "budget {budget}s should record {expected} rows");
        }
    }

    #[test]
    fn test_row_count_for_durations_from_setup_controls() {
        // (hours, minutes, rows)
        for (hours, minutes, expected) in [(0, 1, 21), (0, 5, 101), (1, 0, 1201)] {
            let settings = Settings::from_controls(90, 30, 8, hours, minutes).unwrap();
            let mut session = Session::new(settings);
            let mut source = FixedSource::new(60.0, 25.0, 3.0);
            let start = Instant::now();
            session.start(start);

            // Poll once per second rather than per frame to keep long budgets fast
            let mut second = 0u64;
            while session.state() == MonitorState::Running {
                session.poll(&mut source, start + Duration::from_secs(second));
                second += 1;
            }
            assert_eq!(session.table().len(), expected, "{hours}h {minutes}m should record {expected} rows");
            assert_eq!(source.calls as usize, expected, "Generator called once per recorded row");
        }
    }

    #[test]
    fn test_tick_outcomes() {
        let mut session = Session::new(settings(6));
        let mut source = FixedSource::new(95.0, 25.0, 3.0);
        let start = Instant::now();
        session.start(start);

        assert_eq!(session.poll(&mut source, start), Some(TickOutcome::Recorded { row: 0 }));
        assert_eq!(session.poll(&mut source, start + Duration::from_secs(1)), None);
        assert_eq!(
            session.poll(&mut source, start + Duration::from_secs(3)),
            Some(TickOutcome::Recorded { row: 1 })
        );
        assert_eq!(
            session.poll(&mut source, start + Duration::from_secs(6)),
            Some(TickOutcome::Stopped { row: 2 }),
            "Stopping tick still appends its reading"
        );
        assert_eq!(session.table().len(), 3);
        assert_eq!(session.poll(&mut source, start + Duration::from_secs(9)), None);
    }

    #[test]
    fn test_ticks_ignored_unless_running() {
        let mut session = Session::new(settings(60));
        let mut source = FixedSource::new(95.0, 25.0, 3.0);
        let tick = Tick {
            index: 0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(session.on_tick(tick, &mut source), TickOutcome::Ignored, "Idle ignores ticks");
        assert!(session.table().is_empty());
    }

    #[test]
    fn test_start_twice_is_noop() {
        let mut session = Session::new(settings(60));
        let start = Instant::now();
        session.start(start);
        session.start(start + Duration::from_secs(30));
        assert_eq!(session.state(), MonitorState::Running);
        assert_eq!(session.elapsed_secs(start + Duration::from_secs(12)), 12, "Clock keeps the first start");
    }

    #[test]
    fn test_live_highlight_and_plain_dump() {
        let mut session = Session::new(settings(6));
        let mut source = FixedSource::new(95.0, 25.0, 9.0);
        let start = Instant::now();
        session.start(start);
        session.poll(&mut source, start);

        assert!(session.is_styled());
        assert!(session.is_highlighted(0, Quantity::Pressure), "95 > 90 highlights pressure");
        assert!(!session.is_highlighted(0, Quantity::Temperature), "25 <= 30 stays plain");
        assert!(session.is_highlighted(0, Quantity::Vibration), "9 > 8 highlights vibration");
        assert!(!session.is_highlighted(5, Quantity::Pressure), "Missing rows are never highlighted");

        session.poll(&mut source, start + Duration::from_secs(3));
        session.poll(&mut source, start + Duration::from_secs(6));
        assert!(!session.is_styled(), "Final dump is unstyled");
        assert!(!session.is_highlighted(0, Quantity::Pressure));
    }

    #[test]
    fn test_timestamps_non_decreasing() {
        let mut session = Session::new(settings(30));
        let mut source = FixedSource::new(60.0, 25.0, 3.0);
        run_to_end(&mut session, &mut source);

        let rows = session.table().rows();
        assert_eq!(rows.len(), 11);
        assert!(rows.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_refresh_is_a_new_session() {
        let mut session = Session::new(settings(60));
        let mut source = FixedSource::new(60.0, 25.0, 3.0);
        let start = Instant::now();
        session.start(start);
        session.poll(&mut source, start);
        session.poll(&mut source, start + Duration::from_secs(3));
        assert_eq!(session.table().len(), 2);

        // Refresh: same settings, empty table, clock restarted
        let restart = start + Duration::from_secs(4);
        let mut session = Session::new(*session.settings());
        session.start(restart);
        assert!(session.table().is_empty());
        assert_eq!(session.elapsed_secs(restart), 0);
        assert_eq!(session.poll(&mut source, restart), Some(TickOutcome::Recorded { row: 0 }));
    }
}
