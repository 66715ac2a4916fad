//! Compressor readings and the simulated reading source.
//!
//! [`ReadingSource`] is the seam where a real acquisition driver (I2C, SPI,
//! UART, analog front end) would replace [`SimulatedCompressor`]. The
//! simulator cannot fail, so `read` returns a plain [`Reading`].

use core::fmt::Write;

use chrono::{Local, NaiveDateTime};
use heapless::String;
use rand::Rng;
use rand::rngs::ThreadRng;

use crate::thresholds::Quantity;

/// Display format for reading timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Length of a formatted timestamp (`2024-05-01 13:45:09`).
pub const TIMESTAMP_LEN: usize = 19;

/// One synthetic sample of the compressor, stamped with local wall-clock time.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    pub pressure: f32,
    pub temperature: f32,
    pub vibration: f32,
}

impl Reading {
    /// Value of one quantity.
    #[inline]
    pub const fn value(
        &self,
        quantity: Quantity,
    ) -> f32 {
        match quantity {
            Quantity::Pressure => self.pressure,
            Quantity::Temperature => self.temperature,
            Quantity::Vibration => self.vibration,
        }
    }

    /// Timestamp formatted as `%Y-%m-%d %H:%M:%S` without heap allocation.
    pub fn timestamp_label(&self) -> String<24> {
        let mut label = String::new();
        let _ = write!(label, "{}", self.timestamp.format(TIMESTAMP_FORMAT));
        label
    }
}

/// Anything that can produce compressor readings.
pub trait ReadingSource {
    /// Produce the next reading.
    fn read(&mut self) -> Reading;
}

/// Uniform-random stand-in for a real compressor.
///
/// Each value is drawn independently from its quantity's
/// [`sample_range`](Quantity::sample_range).
///
/// Timestamps are local wall-clock time, held at the previous reading's
/// time if the clock steps back (daylight saving end, NTP correction), so
/// rows never go backwards.
pub struct SimulatedCompressor<R = ThreadRng> {
    rng: R,
    last_timestamp: Option<NaiveDateTime>,
}

impl SimulatedCompressor<ThreadRng> {
    /// Create a simulator backed by the thread-local generator.
    pub fn new() -> Self { Self::with_rng(rand::rng()) }
}

impl Default for SimulatedCompressor<ThreadRng> {
    fn default() -> Self { Self::new() }
}

impl<R: Rng> SimulatedCompressor<R> {
    /// Create a simulator with a caller-provided generator (seeded in tests).
    pub const fn with_rng(rng: R) -> Self {
        Self {
            rng,
            last_timestamp: None,
        }
    }

    /// Timestamp for a reading taken at wall-clock `now`, never earlier than the last one.
    fn stamp(
        &mut self,
        now: NaiveDateTime,
    ) -> NaiveDateTime {
        let timestamp = self.last_timestamp.map_or(now, |last| now.max(last));
        self.last_timestamp = Some(timestamp);
        timestamp
    }

    fn sample(
        &mut self,
        quantity: Quantity,
    ) -> f32 {
        self.rng.random_range(quantity.sample_range())
    }
}

impl<R: Rng> ReadingSource for SimulatedCompressor<R> {
    fn read(&mut self) -> Reading {
        Reading {
            timestamp: self.stamp(Local::now().naive_local()),
            pressure: self.sample(Quantity::Pressure),
            temperature: self.sample(Quantity::Temperature),
            vibration: self.sample(Quantity::Vibration),
        }
    }
}
