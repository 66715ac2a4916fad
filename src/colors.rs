//! Color constants for the compressor dashboard.
//!
//! Standard colors come from the `RgbColor` trait constants so the Rgb565
//! values are exact; application-specific shades are built with
//! `Rgb565::new(r, g, b)` (5-bit red, 6-bit green, 5-bit blue).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black (0, 0, 0). Page backgrounds and dark text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Text on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Pressure highlight, threshold lines, header bar.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Temperature chart line.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31). Vibration highlight.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0). Temperature highlight and selected controls.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Magenta (31, 0, 31). Vibration chart line.
pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;

// =============================================================================
// Custom Colors
// =============================================================================

/// Light blue for the pressure chart line.
/// Pure blue is too dark to read on a black chart background.
pub const SKY_BLUE: Rgb565 = Rgb565::new(6, 40, 31);

/// Dark gray for dividers, axes and inactive slider tracks.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Mid gray for secondary text (captions, key hints).
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(20, 40, 20);

/// Orange for status banners.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);
