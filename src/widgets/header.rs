//! Header bar and monitor page dividers.
//!
//! The header is a red bar across the top of every page: application title
//! on the left, page or session status on the right. Positions and styles
//! are `const`, computed at compile time.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{GRAY, RED},
    config::{CHART_TOP, CHART_WIDTH, HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, TABLE_TOP},
    render::HeaderStatus,
    styles::{LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_WHITE},
};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Title text baseline.
const HEADER_TITLE_POS: Point = Point::new(6, 19);

/// Status text, right-aligned 6px from the edge.
const HEADER_STATUS_POS: Point = Point::new((SCREEN_WIDTH - 6) as i32, 17);

const HEADER_RECT_POS: Point = Point::new(0, 0);
const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, HEADER_HEIGHT);

const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

// =============================================================================
// Divider Endpoints
// =============================================================================

const DIV_V1_START: Point = Point::new(CHART_WIDTH as i32, CHART_TOP as i32);
const DIV_V1_END: Point = Point::new(CHART_WIDTH as i32, TABLE_TOP as i32 - 1);

const DIV_V2_START: Point = Point::new((CHART_WIDTH * 2) as i32, CHART_TOP as i32);
const DIV_V2_END: Point = Point::new((CHART_WIDTH * 2) as i32, TABLE_TOP as i32 - 1);

/// Horizontal divider between the charts and the table.
const DIV_H_START: Point = Point::new(0, TABLE_TOP as i32 - 1);
const DIV_H_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, TABLE_TOP as i32 - 1);

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

const _: () = assert!(TABLE_TOP < SCREEN_HEIGHT);

// =============================================================================
// Status Formatting
// =============================================================================

/// Format seconds as `HH:MM:SS`.
pub fn format_clock(secs: u64) -> String<16> {
    let mut s = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60);
    s
}

/// Right-hand header text for a monitoring session.
///
/// Running: `RUN 00:00:12 / 00:01:00  ROWS 5`. Stopped: `STOPPED  ROWS 2`.
pub fn session_status_text(
    status: HeaderStatus,
    budget_secs: u64,
) -> String<48> {
    let mut s = String::new();
    if status.stopped {
        let _ = write!(s, "STOPPED  ROWS {}", status.rows);
    } else {
        let _ = write!(
            s,
            "RUN {} / {}  ROWS {}",
            format_clock(status.elapsed_secs),
            format_clock(budget_secs),
            status.rows
        );
    }
    s
}

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the header bar with the title and right-aligned status text.
pub fn draw_header<D>(
    display: &mut D,
    status: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();

    Text::with_text_style("COMPRESSOR MONITOR", HEADER_TITLE_POS, TITLE_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    Text::with_text_style(status, HEADER_STATUS_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

/// Draw the lines separating the three charts and the table.
pub fn draw_dividers<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(DIV_V1_START, DIV_V1_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    Line::new(DIV_V2_START, DIV_V2_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    Line::new(DIV_H_START, DIV_H_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0).as_str(), "00:00:00");
        assert_eq!(format_clock(75).as_str(), "00:01:15");
        assert_eq!(format_clock(24 * 3600 + 59 * 60).as_str(), "24:59:00", "Longest budget fits");
    }

    #[test]
    fn test_session_status_text() {
        let running = HeaderStatus {
            elapsed_secs: 12,
            rows: 5,
            stopped: false,
        };
        assert_eq!(
            session_status_text(running, 60).as_str(),
            "RUN 00:00:12 / 00:01:00  ROWS 5"
        );

        let stopped = HeaderStatus {
            stopped: true,
            rows: 2,
            ..running
        };
        assert_eq!(session_status_text(stopped, 6).as_str(), "STOPPED  ROWS 2");
    }

    #[test]
    fn test_header_is_red_bar() {
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_header(&mut display, "SETUP");
        // Bottom-left corner of the bar is background, not text
        assert_eq!(display.get_pixel(Point::new(0, HEADER_HEIGHT as i32 - 1)), RED);
        assert_ne!(display.get_pixel(Point::new(0, HEADER_HEIGHT as i32)), RED, "Bar ends at HEADER_HEIGHT");
    }

    #[test]
    fn test_dividers() {
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_dividers(&mut display);
        assert_eq!(display.get_pixel(Point::new(CHART_WIDTH as i32, CHART_TOP as i32 + 10)), GRAY);
        assert_eq!(display.get_pixel(Point::new(10, TABLE_TOP as i32 - 1)), GRAY);
    }
}
