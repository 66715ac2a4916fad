//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle::new` and `TextStyleBuilder::build` are `const fn` in
//! embedded-graphics 0.8, so every fixed style lives here as a constant.
//! Styles that need a runtime color (highlighted table cells, chart legends)
//! are built from [`LABEL_FONT`] at the call site.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_12_POINT;

use crate::colors::{LIGHT_GRAY, WHITE, YELLOW};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for titles, popups and banners.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for table cells and help text.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for the header status and chart axis labels.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels). Usage: `MonoTextStyle::new(LABEL_FONT, color)`
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Width of one [`LABEL_FONT`] glyph in pixels.
pub const LABEL_CHAR_WIDTH: u32 = 6;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text on dark backgrounds.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text for captions and key hints.
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LIGHT_GRAY);

/// Small yellow text for the selected setup control.
pub const LABEL_STYLE_YELLOW: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, YELLOW);

/// Medium white text for page titles and popups (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// `ProFont` 12pt white text for slider values and the duration summary.
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, WHITE);
