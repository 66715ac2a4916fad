//! Setup page form: five bounded integer controls.
//!
//! The form is the keyboard stand-in for sliders and number inputs. Every
//! control clamps to its own range, so [`SetupForm::settings`] only fails if
//! the ranges here disagree with the validation in [`Settings`].

use crate::error::SettingsError;
use crate::session::{HOURS_LIMIT, MINUTES_LIMIT, Settings};
use crate::thresholds::Quantity;

/// Step used by PageUp / PageDown.
pub const COARSE_STEP: u32 = 10;

/// Identifies one control on the setup page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Threshold(Quantity),
    Hours,
    Minutes,
}

impl Field {
    /// Controls in on-screen order.
    pub const ALL: [Self; 5] = [
        Self::Threshold(Quantity::Pressure),
        Self::Threshold(Quantity::Temperature),
        Self::Threshold(Quantity::Vibration),
        Self::Hours,
        Self::Minutes,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Threshold(Quantity::Pressure) => "PRESSURE THRESHOLD",
            Self::Threshold(Quantity::Temperature) => "TEMPERATURE THRESHOLD",
            Self::Threshold(Quantity::Vibration) => "VIBRATION THRESHOLD",
            Self::Hours => "HOURS",
            Self::Minutes => "MINUTES",
        }
    }

    /// Largest accepted value (the smallest is always 0).
    pub const fn max(self) -> u32 {
        match self {
            Self::Threshold(q) => q.threshold_limit(),
            Self::Hours => HOURS_LIMIT,
            Self::Minutes => MINUTES_LIMIT,
        }
    }

    /// Value shown when the application starts.
    pub const fn default_value(self) -> u32 {
        match self {
            Self::Threshold(q) => q.default_threshold(),
            Self::Hours | Self::Minutes => 0,
        }
    }
}

/// One bounded control.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Control {
    pub field: Field,
    value: u32,
}

impl Control {
    const fn new(field: Field) -> Self {
        Self {
            field,
            value: field.default_value(),
        }
    }

    #[inline]
    pub const fn value(&self) -> u32 { self.value }

    /// Move by `delta`, saturating at `0` and the field's maximum.
    pub fn adjust(
        &mut self,
        delta: i32,
    ) {
        let max = self.field.max();
        self.value = self.value.saturating_add_signed(delta).min(max);
    }

    /// Position of the value within its range, `0.0..=1.0`.
    pub fn fraction(&self) -> f32 { self.value as f32 / self.field.max() as f32 }
}

/// All setup controls plus the current selection.
#[derive(Clone, Debug)]
pub struct SetupForm {
    controls: [Control; 5],
    selected: usize,
}

impl SetupForm {
    pub const fn new() -> Self {
        Self {
            controls: [
                Control::new(Field::ALL[0]),
                Control::new(Field::ALL[1]),
                Control::new(Field::ALL[2]),
                Control::new(Field::ALL[3]),
                Control::new(Field::ALL[4]),
            ],
            selected: 0,
        }
    }

    #[inline]
    pub const fn controls(&self) -> &[Control; 5] { &self.controls }

    #[inline]
    pub const fn selected(&self) -> usize { self.selected }

    /// Select the previous control, wrapping to the last.
    pub const fn select_prev(&mut self) {
        self.selected = if self.selected == 0 { self.controls.len() - 1 } else { self.selected - 1 };
    }

    /// Select the next control, wrapping to the first.
    pub const fn select_next(&mut self) { self.selected = (self.selected + 1) % self.controls.len(); }

    /// Adjust the selected control.
    pub fn adjust(
        &mut self,
        delta: i32,
    ) {
        self.controls[self.selected].adjust(delta);
    }

    /// Current value of a field.
    pub fn value(
        &self,
        field: Field,
    ) -> u32 {
        self.controls
            .iter()
            .find(|c| c.field == field)
            .map_or(0, Control::value)
    }

    /// Total run time the form describes, in seconds.
    pub fn total_secs(&self) -> u64 {
        u64::from(self.value(Field::Hours)) * 3600 + u64::from(self.value(Field::Minutes)) * 60
    }

    /// Validate the form into session settings.
    pub fn settings(&self) -> Result<Settings, SettingsError> {
        Settings::from_controls(
            self.value(Field::Threshold(Quantity::Pressure)),
            self.value(Field::Threshold(Quantity::Temperature)),
            self.value(Field::Threshold(Quantity::Vibration)),
            self.value(Field::Hours),
            self.value(Field::Minutes),
        )
    }
}

impl Default for SetupForm {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::Thresholds;

    #[test]
    fn test_defaults_match_thresholds() {
        let form = SetupForm::new();
        let settings = form.settings().unwrap();
        assert_eq!(settings.thresholds, Thresholds::default());
        assert!(settings.budget.is_zero(), "Duration defaults to 0h 0m");
        assert_eq!(form.selected(), 0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut form = SetupForm::new();
        form.select_prev();
        assert_eq!(form.selected(), 4, "Up from the first control wraps to minutes");
        form.select_next();
        assert_eq!(form.selected(), 0);
    }

    #[test]
    fn test_adjust_clamps_to_range() {
        let mut form = SetupForm::new();
        // Pressure: 90 + 100 clamps to 150
        form.adjust(100);
        assert_eq!(form.value(Field::Threshold(Quantity::Pressure)), 150);
        form.adjust(-500);
        assert_eq!(form.value(Field::Threshold(Quantity::Pressure)), 0, "Never goes below zero");
    }

    #[test]
    fn test_minutes_limit() {
        let mut form = SetupForm::new();
        form.select_prev(); // minutes
        form.adjust(75);
        assert_eq!(form.value(Field::Minutes), 59);
        assert_eq!(form.total_secs(), 59 * 60);
    }

    #[test]
    fn test_form_to_settings() {
        let mut form = SetupForm::new();
        for _ in 0..3 {
            form.select_next();
        }
        form.adjust(1); // 1 hour
        form.select_next();
        form.adjust(30); // 30 minutes

        let settings = form.settings().unwrap();
        assert_eq!(settings.budget.as_secs(), 5400);
        assert_eq!(form.total_secs(), 5400);
    }

    #[test]
    fn test_fraction() {
        let mut control = Control::new(Field::Threshold(Quantity::Vibration));
        assert!((control.fraction() - 0.4).abs() < f32::EPSILON, "8 of 20 is 40%");
        control.adjust(100);
        assert!((control.fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_field_ranges() {
        assert_eq!(Field::Threshold(Quantity::Pressure).max(), 150);
        assert_eq!(Field::Threshold(Quantity::Temperature).max(), 50);
        assert_eq!(Field::Threshold(Quantity::Vibration).max(), 20);
        assert_eq!(Field::Hours.max(), 24);
        assert_eq!(Field::Minutes.max(), 59);
    }
}
