//! Application configuration constants.
//!
//! Layout values are computed at compile time as `const` so the page
//! drawing code never recalculates positions. Timing constants drive the
//! frame loop and the monitoring [`Ticker`](crate::ticker::Ticker).

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Logical display width in pixels.
pub const SCREEN_WIDTH: u32 = 480;

/// Logical display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Window pixel scale (each logical pixel is drawn as a 2x2 block).
pub const WINDOW_SCALE: u32 = 2;

/// Window title.
pub const WINDOW_TITLE: &str = "Compressor Monitor";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Interval between monitoring ticks (one reading per tick).
pub const TICK_INTERVAL: Duration = Duration::from_secs(3);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(2);

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Width of each chart (three charts side by side).
pub const CHART_WIDTH: u32 = SCREEN_WIDTH / 3;

/// Height of the chart row.
pub const CHART_HEIGHT: u32 = 130;

/// Y coordinate where the chart row starts.
pub const CHART_TOP: u32 = HEADER_HEIGHT;

/// Y coordinate where the table area starts.
pub const TABLE_TOP: u32 = CHART_TOP + CHART_HEIGHT;

/// Height of the table area (everything below the charts).
pub const TABLE_HEIGHT: u32 = SCREEN_HEIGHT - TABLE_TOP;

/// Height of one table row (6x10 font plus 2px spacing).
pub const TABLE_ROW_HEIGHT: u32 = 12;

/// Table rows that fit below the column header and the status banner.
pub const TABLE_VISIBLE_ROWS: usize = ((TABLE_HEIGHT - 2 * TABLE_ROW_HEIGHT - 4) / TABLE_ROW_HEIGHT) as usize;

/// Screen center X coordinate. Used for centering popups and text.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Used for centering popups and text.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

const _: () = assert!(TABLE_VISIBLE_ROWS > 0);
