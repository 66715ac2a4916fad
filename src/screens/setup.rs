//! Setup page: thresholds and run duration.
//!
//! Five slider rows, the total duration they describe and key hints.
//! Values are read once when `Enter` starts a session.

use core::fmt::Write;

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, text::Text};
use heapless::String;

use crate::{
    colors::{BLACK, ORANGE},
    config::{HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH},
    controls::SetupForm,
    styles::{LABEL_FONT, LABEL_STYLE_GRAY, LEFT_ALIGNED, VALUE_STYLE_WHITE},
    widgets::{SLIDER_ROW_HEIGHT, draw_slider, fill_area, format_clock},
};

/// Top of the first slider row.
const SLIDERS_TOP: i32 = HEADER_HEIGHT as i32 + 6;

/// Baseline of the total duration line.
const TOTAL_Y: i32 = SLIDERS_TOP + 5 * SLIDER_ROW_HEIGHT as i32 + 16;

const HINT1_POS: Point = Point::new(20, SCREEN_HEIGHT as i32 - 20);
const HINT2_POS: Point = Point::new(20, SCREEN_HEIGHT as i32 - 8);

const WARNING_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, ORANGE);

const _: () = assert!(TOTAL_Y < HINT1_POS.y - 12);

/// Total duration line, e.g. `TOTAL 01:30:00 (5400 s)`.
pub fn total_text(form: &SetupForm) -> String<40> {
    let secs = form.total_secs();
    let mut s = String::new();
    let _ = write!(s, "TOTAL {} ({secs} s)", format_clock(secs));
    s
}

/// Draw the setup form below the header.
pub fn draw_setup_page<D>(
    display: &mut D,
    form: &SetupForm,
) where
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

    for (i, control) in form.controls().iter().enumerate() {
        let top = SLIDERS_TOP + (i as u32 * SLIDER_ROW_HEIGHT) as i32;
        draw_slider(display, top, control, i == form.selected());
    }

    Text::with_text_style(&total_text(form), Point::new(20, TOTAL_Y), VALUE_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    if form.total_secs() == 0 {
        Text::with_text_style(
            "Duration is zero: starting will not generate data",
            Point::new(20, TOTAL_Y + 14),
            WARNING_STYLE,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }

    Text::with_text_style(
        "UP/DOWN select   LEFT/RIGHT -1/+1   PGDN/PGUP -10/+10",
        HINT1_POS,
        LABEL_STYLE_GRAY,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
    Text::with_text_style("ENTER start monitoring   H help   ESC quit", HINT2_POS, LABEL_STYLE_GRAY, LEFT_ALIGNED)
        .draw(display)
        .ok();
}
