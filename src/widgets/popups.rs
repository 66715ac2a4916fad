//! Non-modal popup overlays for session events.
//!
//! Popups appear centered with a white border around a red background.
//! Only one is visible at a time; input keeps working underneath.
//!
//! - **Restarted**: "SESSION RESTARTED" after `R`
//! - **Stopped**: "MONITORING STOPPED" when the run budget is used up

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::{RED, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::render::PopupKind;
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};

// =============================================================================
// Popup Geometry
// =============================================================================

const POPUP_WIDTH: u32 = 200;
const POPUP_HEIGHT: u32 = 60;
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

const TEXT1_POS: Point = Point::new(CENTER_X, CENTER_Y - 5);
const TEXT2_POS: Point = Point::new(CENTER_X, CENTER_Y + 15);

const BORDER_POS: Point = Point::new(POPUP_X - 3, POPUP_Y - 3);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6);
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);
const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Two-line message for a popup kind.
pub const fn popup_lines(kind: PopupKind) -> (&'static str, &'static str) {
    match kind {
        PopupKind::Restarted => ("SESSION", "RESTARTED"),
        PopupKind::Stopped => ("MONITORING", "STOPPED"),
    }
}

/// Draw a popup of the given kind.
pub fn draw_popup<D>(
    display: &mut D,
    kind: PopupKind,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BORDER_POS, BORDER_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    Rectangle::new(BG_POS, BG_SIZE)
        .into_styled(RED_FILL)
        .draw(display)
        .ok();

    let (line1, line2) = popup_lines(kind);
    Text::with_text_style(line1, TEXT1_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style(line2, TEXT2_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
