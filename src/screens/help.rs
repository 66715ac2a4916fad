//! Help page: adapting the simulator to real compressor sensors.
//!
//! Static text, pre-wrapped to the 6x10 font so drawing is a plain loop.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, text::Text};

use crate::{
    colors::BLACK,
    config::{HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH},
    styles::{LABEL_CHAR_WIDTH, LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, LABEL_STYLE_YELLOW, LEFT_ALIGNED},
    widgets::fill_area,
};

const LINE_HEIGHT: i32 = 11;
const TEXT_X: i32 = 6;
const FIRST_BASELINE: i32 = HEADER_HEIGHT as i32 + 12;

/// Longest line the page can hold.
pub const MAX_LINE_CHARS: usize = ((SCREEN_WIDTH - 2 * TEXT_X as u32) / LABEL_CHAR_WIDTH) as usize;

/// Guide text. Lines starting with a digit are step headings.
pub const HELP_LINES: &[&str] = &[
    "Readings come from a simulator. To monitor a real compressor:",
    "",
    "1. Hardware and protocol: identify the pressure, temperature and",
    "   vibration sensors and how they talk (analog, I2C, SPI, UART).",
    "2. Wiring: connect them to the machine running the monitor, e.g.",
    "   a Raspberry Pi, a microcontroller or another embedded board.",
    "3. Drivers: install and configure the drivers or crates the",
    "   sensors need.",
    "4. Reading: implement ReadingSource for the device. Convert raw",
    "   voltages or registers into pressure and temperature units.",
    "5. Processing: filter, average or convert units as required.",
    "6. Integration: hand the new source to the app in place of the",
    "   simulated compressor; charts and table stay the same.",
    "7. Errors: handle communication failures and out-of-range",
    "   readings instead of assuming every read succeeds.",
    "8. Testing: verify readings are accurate and consistent, then",
    "   tune thresholds and timing.",
];

/// Draw the help text below the header.
pub fn draw_help_page<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_area(
        display,
        0,
        HEADER_HEIGHT as i32,
        SCREEN_WIDTH,
        SCREEN_HEIGHT - HEADER_HEIGHT,
        BLACK,
    );

    for (i, line) in HELP_LINES.iter().enumerate() {
        let style = if line.starts_with(|c: char| c.is_ascii_digit()) { LABEL_STYLE_YELLOW } else { LABEL_STYLE_WHITE };
        let y = FIRST_BASELINE + i as i32 * LINE_HEIGHT;
        Text::with_text_style(line, Point::new(TEXT_X, y), style, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    Text::with_text_style(
        "H back   ESC quit",
        Point::new(TEXT_X, SCREEN_HEIGHT as i32 - 8),
        LABEL_STYLE_GRAY,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
}
