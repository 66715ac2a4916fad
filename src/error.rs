//! Error types for session settings.

use thiserror::Error;

/// Rejected setup values.
///
/// The setup page clamps every control, so these only surface when settings
/// are built programmatically with values the sliders could never produce.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{quantity} threshold {value} is above the maximum of {max}")]
    ThresholdOutOfRange {
        quantity: &'static str,
        value: u32,
        max: u32,
    },

    #[error("{field} value {value} is above the maximum of {max}")]
    DurationOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}
