//! Monitored quantities and their user-set thresholds.
//!
//! Every per-quantity constant (generator range, slider limit, default
//! threshold, chart and highlight colors) is reachable through [`Quantity`],
//! so the charts, the table and the generator are all written once and
//! parameterized over the quantity.
//!
//! # Highlight Rule
//!
//! A table cell is highlighted iff its value is strictly greater than the
//! quantity's threshold. A value equal to the threshold is not highlighted.
//! There is no hysteresis: a value oscillating around the threshold
//! re-colors on every tick.
//!
//! | Quantity | Generator range | Threshold slider | Default | Highlight |
//! |----------|-----------------|------------------|---------|-----------|
//! | Pressure | 50 - 100 | 0 - 150 | 90 | RED |
//! | Temperature | 20 - 40 | 0 - 50 | 30 | YELLOW |
//! | Vibration | 0 - 10 | 0 - 20 | 8 | BLUE |

use core::ops::RangeInclusive;

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLUE, GREEN, MAGENTA, RED, SKY_BLUE, YELLOW};
use crate::error::SettingsError;

// =============================================================================
// Pressure
// =============================================================================

/// Lowest simulated pressure reading.
pub const PRESSURE_MIN: f32 = 50.0;

/// Highest simulated pressure reading.
pub const PRESSURE_MAX: f32 = 100.0;

/// Upper end of the pressure threshold slider.
pub const PRESSURE_THRESHOLD_LIMIT: u32 = 150;

/// Pressure threshold used until the user moves the slider.
pub const PRESSURE_THRESHOLD_DEFAULT: u32 = 90;

const _: () = assert!(PRESSURE_MIN < PRESSURE_MAX);
const _: () = assert!(PRESSURE_THRESHOLD_DEFAULT <= PRESSURE_THRESHOLD_LIMIT);

// =============================================================================
// Temperature
// =============================================================================

/// Lowest simulated temperature reading.
pub const TEMPERATURE_MIN: f32 = 20.0;

/// Highest simulated temperature reading.
pub const TEMPERATURE_MAX: f32 = 40.0;

/// Upper end of the temperature threshold slider.
pub const TEMPERATURE_THRESHOLD_LIMIT: u32 = 50;

/// Temperature threshold used until the user moves the slider.
pub const TEMPERATURE_THRESHOLD_DEFAULT: u32 = 30;

const _: () = assert!(TEMPERATURE_MIN < TEMPERATURE_MAX);
const _: () = assert!(TEMPERATURE_THRESHOLD_DEFAULT <= TEMPERATURE_THRESHOLD_LIMIT);

// =============================================================================
// Vibration
// =============================================================================

/// Lowest simulated vibration reading.
pub const VIBRATION_MIN: f32 = 0.0;

/// Highest simulated vibration reading.
pub const VIBRATION_MAX: f32 = 10.0;

/// Upper end of the vibration threshold slider.
pub const VIBRATION_THRESHOLD_LIMIT: u32 = 20;

/// Vibration threshold used until the user moves the slider.
pub const VIBRATION_THRESHOLD_DEFAULT: u32 = 8;

const _: () = assert!(VIBRATION_MIN < VIBRATION_MAX);
const _: () = assert!(VIBRATION_THRESHOLD_DEFAULT <= VIBRATION_THRESHOLD_LIMIT);

// =============================================================================
// Quantity
// =============================================================================

/// One of the three measured compressor quantities.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Quantity {
    Pressure,
    Temperature,
    Vibration,
}

impl Quantity {
    /// All quantities in table column / chart order.
    pub const ALL: [Self; 3] = [Self::Pressure, Self::Temperature, Self::Vibration];

    /// Column of this quantity in the table and the chart row.
    pub const fn index(self) -> usize {
        match self {
            Self::Pressure => 0,
            Self::Temperature => 1,
            Self::Vibration => 2,
        }
    }

    /// Upper-case label for chart titles and table headers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pressure => "PRESSURE",
            Self::Temperature => "TEMPERATURE",
            Self::Vibration => "VIBRATION",
        }
    }

    /// Uniform range the simulated generator draws from.
    pub const fn sample_range(self) -> RangeInclusive<f32> {
        match self {
            Self::Pressure => PRESSURE_MIN..=PRESSURE_MAX,
            Self::Temperature => TEMPERATURE_MIN..=TEMPERATURE_MAX,
            Self::Vibration => VIBRATION_MIN..=VIBRATION_MAX,
        }
    }

    /// Largest threshold the setup slider accepts.
    pub const fn threshold_limit(self) -> u32 {
        match self {
            Self::Pressure => PRESSURE_THRESHOLD_LIMIT,
            Self::Temperature => TEMPERATURE_THRESHOLD_LIMIT,
            Self::Vibration => VIBRATION_THRESHOLD_LIMIT,
        }
    }

    /// Threshold the setup slider starts at.
    pub const fn default_threshold(self) -> u32 {
        match self {
            Self::Pressure => PRESSURE_THRESHOLD_DEFAULT,
            Self::Temperature => TEMPERATURE_THRESHOLD_DEFAULT,
            Self::Vibration => VIBRATION_THRESHOLD_DEFAULT,
        }
    }

    /// Line and marker color in the quantity's chart.
    pub const fn line_color(self) -> Rgb565 {
        match self {
            Self::Pressure => SKY_BLUE,
            Self::Temperature => GREEN,
            Self::Vibration => MAGENTA,
        }
    }

    /// Table cell background when a value exceeds the threshold.
    pub const fn highlight_color(self) -> Rgb565 {
        match self {
            Self::Pressure => RED,
            Self::Temperature => YELLOW,
            Self::Vibration => BLUE,
        }
    }
}

// =============================================================================
// Thresholds
// =============================================================================

/// User-set thresholds, fixed for the lifetime of a session.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Thresholds {
    pub pressure_max: u32,
    pub temperature_max: u32,
    pub vibration_max: u32,
}

impl Thresholds {
    /// Build thresholds, rejecting values above their slider limits.
    pub fn new(
        pressure_max: u32,
        temperature_max: u32,
        vibration_max: u32,
    ) -> Result<Self, SettingsError> {
        let thresholds = Self {
            pressure_max,
            temperature_max,
            vibration_max,
        };
        for quantity in Quantity::ALL {
            let value = thresholds.raw(quantity);
            let max = quantity.threshold_limit();
            if value > max {
                return Err(SettingsError::ThresholdOutOfRange {
                    quantity: quantity.label(),
                    value,
                    max,
                });
            }
        }
        Ok(thresholds)
    }

    /// Integer threshold as entered on the setup page.
    pub const fn raw(
        &self,
        quantity: Quantity,
    ) -> u32 {
        match quantity {
            Quantity::Pressure => self.pressure_max,
            Quantity::Temperature => self.temperature_max,
            Quantity::Vibration => self.vibration_max,
        }
    }

    /// Threshold as a float for comparisons and chart scaling.
    #[inline]
    pub fn get(
        &self,
        quantity: Quantity,
    ) -> f32 {
        self.raw(quantity) as f32
    }

    /// Check whether `value` is strictly above the quantity's threshold.
    #[inline]
    pub fn exceeds(
        &self,
        quantity: Quantity,
        value: f32,
    ) -> bool {
        value > self.get(quantity)
    }

    /// Background color for a table cell, or `None` when the cell stays unstyled.
    pub fn cell_highlight(
        &self,
        quantity: Quantity,
        value: f32,
    ) -> Option<Rgb565> {
        self.exceeds(quantity, value).then(|| quantity.highlight_color())
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            pressure_max: PRESSURE_THRESHOLD_DEFAULT,
            temperature_max: TEMPERATURE_THRESHOLD_DEFAULT,
            vibration_max: VIBRATION_THRESHOLD_DEFAULT,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.pressure_max, 90);
        assert_eq!(thresholds.temperature_max, 30);
        assert_eq!(thresholds.vibration_max, 8);
    }

    #[test]
    fn test_highlight_is_strict() {
        let thresholds = Thresholds::default();
        for quantity in Quantity::ALL {
            let t = thresholds.get(quantity);
            assert!(!thresholds.exceeds(quantity, t), "{quantity:?} equal to threshold must not highlight");
            assert!(thresholds.exceeds(quantity, t + 0.01), "{quantity:?} just above threshold must highlight");
            assert!(!thresholds.exceeds(quantity, t - 0.01), "{quantity:?} below threshold must not highlight");
        }
    }

    #[test]
    fn test_pressure_95_highlighted_temperature_25_not() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.cell_highlight(Quantity::Pressure, 95.0), Some(RED));
        assert_eq!(thresholds.cell_highlight(Quantity::Temperature, 25.0), None);
    }

    #[test]
    fn test_highlight_colors_are_distinct() {
        assert_eq!(Quantity::Pressure.highlight_color(), RED);
        assert_eq!(Quantity::Temperature.highlight_color(), YELLOW);
        assert_eq!(Quantity::Vibration.highlight_color(), BLUE);
    }

    #[test]
    fn test_columns_are_independent() {
        // Only vibration is over its threshold; the other columns stay plain
        let thresholds = Thresholds::new(90, 30, 8).unwrap();
        assert_eq!(thresholds.cell_highlight(Quantity::Pressure, 60.0), None);
        assert_eq!(thresholds.cell_highlight(Quantity::Temperature, 22.0), None);
        assert_eq!(thresholds.cell_highlight(Quantity::Vibration, 9.5), Some(BLUE));
    }

    #[test]
    fn test_zero_threshold_highlights_everything_positive() {
        let thresholds = Thresholds::new(0, 0, 0).unwrap();
        assert!(thresholds.exceeds(Quantity::Vibration, 0.001));
        assert!(!thresholds.exceeds(Quantity::Vibration, 0.0));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let err = Thresholds::new(151, 30, 8).unwrap_err();
        assert_matches!(
            err,
            SettingsError::ThresholdOutOfRange {
                quantity: "PRESSURE",
                value: 151,
                max: 150
            }
        );
        assert!(Thresholds::new(150, 50, 20).is_ok(), "Slider maxima should be accepted");
    }

    #[test]
    fn test_default_threshold_within_limit() {
        for quantity in Quantity::ALL {
            assert!(quantity.default_threshold() <= quantity.threshold_limit());
        }
    }

    #[test]
    fn test_sample_ranges() {
        assert_eq!(Quantity::Pressure.sample_range(), 50.0..=100.0);
        assert_eq!(Quantity::Temperature.sample_range(), 20.0..=40.0);
        assert_eq!(Quantity::Vibration.sample_range(), 0.0..=10.0);
    }

    #[test]
    fn test_index_matches_display_order() {
        for (i, quantity) in Quantity::ALL.into_iter().enumerate() {
            assert_eq!(quantity.index(), i, "{quantity:?} index");
        }
    }
}
