//! Low-level drawing primitives shared across widgets.
//!
//! # Text Contrast
//!
//! Highlighted table cells use saturated backgrounds (red, yellow, blue).
//! [`label_color_for_bg`] picks black or white text from the background's
//! perceptual luminance (ITU-R BT.601) so every highlight stays readable.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};

use crate::colors::{BLACK, WHITE};

/// Dash length of dashed lines, in pixels.
pub const DASH_ON: i32 = 4;

/// Gap between dashes, in pixels.
pub const DASH_OFF: i32 = 3;

/// Fill a rectangular area with a solid color.
pub fn fill_area<D>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if w == 0 || h == 0 {
        return;
    }
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a horizontal dashed line from `x0` to `x1` (inclusive) at row `y`.
pub fn draw_dashed_hline<D>(
    display: &mut D,
    x0: i32,
    x1: i32,
    y: i32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, 1);
    let mut x = x0;
    while x <= x1 {
        let end = (x + DASH_ON - 1).min(x1);
        Line::new(Point::new(x, y), Point::new(end, y))
            .into_styled(style)
            .draw(display)
            .ok();
        x += DASH_ON + DASH_OFF;
    }
}

/// Draw a filled 3px point marker centred on `center`.
pub fn draw_marker<D>(
    display: &mut D,
    center: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, 3)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Text color for a given background.
///
/// Returns WHITE for dark backgrounds (luma < 128) and BLACK for light ones.
pub fn label_color_for_bg(bg_color: Rgb565) -> Rgb565 {
    if calculate_luminance(bg_color) < 128 { WHITE } else { BLACK }
}

/// Perceptual luminance of an Rgb565 color, `0..=255`.
///
/// Integer BT.601 approximation `(77*R + 150*G + 29*B) >> 8` on channels
/// expanded to 8 bits by replicating their high bits.
#[inline]
fn calculate_luminance(color: Rgb565) -> u32 {
    let raw = color.into_storage();
    let r5 = u32::from((raw >> 11) & 0x1F);
    let g6 = u32::from((raw >> 5) & 0x3F);
    let b5 = u32::from(raw & 0x1F);

    let r8 = (r5 << 3) | (r5 >> 2);
    let g8 = (g6 << 2) | (g6 >> 4);
    let b8 = (b5 << 3) | (b5 >> 2);

    (r8 * 77 + g8 * 150 + b8 * 29) >> 8
}
