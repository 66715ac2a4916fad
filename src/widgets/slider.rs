//! Horizontal slider row for the setup page.
//!
//! ```text
//! > PRESSURE THRESHOLD                                   90
//!   ████████████████████▌─────────────────
//!   0                                    150
//! ```

use core::fmt::Write;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, text::Text};
use heapless::String;

use crate::{
    colors::{BLACK, GRAY, SKY_BLUE, WHITE, YELLOW},
    config::SCREEN_WIDTH,
    controls::Control,
    styles::{LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, LABEL_STYLE_YELLOW, LEFT_ALIGNED, RIGHT_ALIGNED, VALUE_STYLE_WHITE},
    widgets::primitives::fill_area,
};

/// Height of one slider row.
pub const SLIDER_ROW_HEIGHT: u32 = 38;

const TRACK_LEFT: i32 = 20;
const TRACK_WIDTH: u32 = 380;
const TRACK_HEIGHT: u32 = 4;
const TRACK_OFFSET: i32 = 16;
const KNOB_WIDTH: u32 = 4;
const KNOB_HEIGHT: u32 = 12;
const VALUE_RIGHT: i32 = 460;

/// X of the knob's left edge for a control.
pub fn knob_x(control: &Control) -> i32 {
    let travel = (TRACK_WIDTH - KNOB_WIDTH) as f32;
    TRACK_LEFT + (control.fraction() * travel).round() as i32
}

/// Draw one slider row with its top edge at `top`.
pub fn draw_slider<D>(
    display: &mut D,
    top: i32,
    control: &Control,
    selected: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_area(display, 0, top, SCREEN_WIDTH, SLIDER_ROW_HEIGHT, BLACK);

    let label_style = if selected { LABEL_STYLE_YELLOW } else { LABEL_STYLE_WHITE };
    if selected {
        Text::with_text_style(">", Point::new(8, top + 9), LABEL_STYLE_YELLOW, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
    Text::with_text_style(control.field.label(), Point::new(TRACK_LEFT, top + 9), label_style, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let mut value: String<8> = String::new();
    let _ = write!(value, "{}", control.value());
    Text::with_text_style(&value, Point::new(VALUE_RIGHT, top + 22), VALUE_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    // Track, filled part, knob
    let track_y = top + TRACK_OFFSET;
    fill_area(display, TRACK_LEFT, track_y, TRACK_WIDTH, TRACK_HEIGHT, GRAY);
    let knob = knob_x(control);
    let fill = if selected { YELLOW } else { SKY_BLUE };
    fill_area(display, TRACK_LEFT, track_y, (knob - TRACK_LEFT) as u32, TRACK_HEIGHT, fill);
    fill_area(display, knob, track_y - 4, KNOB_WIDTH, KNOB_HEIGHT, WHITE);

    // Range labels
    let range_y = top + TRACK_OFFSET + 18;
    Text::with_text_style("0", Point::new(TRACK_LEFT, range_y), LABEL_STYLE_GRAY, LEFT_ALIGNED)
        .draw(display)
        .ok();
    let mut max: String<8> = String::new();
    let _ = write!(max, "{}", control.field.max());
    Text::with_text_style(&max, Point::new(TRACK_LEFT + TRACK_WIDTH as i32, range_y), LABEL_STYLE_GRAY, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::config::SCREEN_HEIGHT;
    use crate::controls::SetupForm;

    #[test]
    fn test_knob_at_ends() {
        let mut form = SetupForm::new();
        form.adjust(-1000);
        assert_eq!(knob_x(&form.controls()[0]), TRACK_LEFT, "Zero puts the knob at the left end");
        form.adjust(1000);
        assert_eq!(
            knob_x(&form.controls()[0]),
            TRACK_LEFT + (TRACK_WIDTH - KNOB_WIDTH) as i32,
            "Maximum puts the knob at the right end"
        );
    }

    #[test]
    fn test_selected_slider_fill() {
        let form = SetupForm::new();
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_slider(&mut display, 40, &form.controls()[0], true);

        // Pressure defaults to 90 of 150: the track start is filled, the far end is not
        let track_y = 40 + TRACK_OFFSET + 1;
        assert_eq!(display.get_pixel(Point::new(TRACK_LEFT, track_y)), YELLOW);
        assert_eq!(display.get_pixel(Point::new(TRACK_LEFT + TRACK_WIDTH as i32 - 1, track_y)), GRAY);
        assert_eq!(display.get_pixel(Point::new(knob_x(&form.controls()[0]), track_y)), WHITE);
    }
}
