//! Reading table below the charts.
//!
//! Columns: row number, timestamp, pressure, temperature, vibration. Values
//! are printed with two decimals. Only the rows that fit are drawn: the
//! newest ones while running, or a scrolled window of the final dump.
//!
//! While the session runs, a value above its threshold gets its quantity's
//! highlight background with contrast-matched text. The final dump after
//! stopping is drawn plain.

use core::fmt::Write;

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, text::Text};
use heapless::String;

use crate::{
    colors::{BLACK, WHITE},
    config::{SCREEN_WIDTH, TABLE_ROW_HEIGHT, TABLE_TOP, TABLE_VISIBLE_ROWS},
    monitor::Session,
    reading::Reading,
    styles::{LABEL_FONT, LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED},
    thresholds::{Quantity, Thresholds},
    widgets::primitives::{fill_area, label_color_for_bg},
};

// =============================================================================
// Column Layout
// =============================================================================

/// Right edge of the row number column.
const NUM_RIGHT: i32 = 34;

/// Left edge of the timestamp column.
const TIMESTAMP_X: i32 = 42;

/// Left edge of the first value cell.
const VALUES_X: i32 = 164;

/// Width of one value cell.
const VALUE_CELL_WIDTH: u32 = 104;

/// Padding between a value and the right edge of its cell.
const VALUE_PAD: i32 = 6;

/// Text baseline offset inside a row.
const BASELINE: i32 = 9;

/// Top of the column header row.
pub const HEADER_ROW_TOP: i32 = TABLE_TOP as i32 + 2;

/// Top of the first data row.
pub const FIRST_ROW_TOP: i32 = HEADER_ROW_TOP + TABLE_ROW_HEIGHT as i32;

const _: () = assert!(VALUES_X as u32 + 3 * VALUE_CELL_WIDTH <= SCREEN_WIDTH);

/// Left edge of the value cell for `quantity`.
const fn cell_x(quantity: Quantity) -> i32 { VALUES_X + (quantity.index() as u32 * VALUE_CELL_WIDTH) as i32 }

/// Top of data row `slot` (0 = first visible row).
pub const fn row_top(slot: usize) -> i32 { FIRST_ROW_TOP + (slot as u32 * TABLE_ROW_HEIGHT) as i32 }

// =============================================================================
// Drawing
// =============================================================================

/// Draw the column header and the visible rows of the session table.
///
/// `scroll` counts rows back from the newest and is clamped by the table.
pub fn draw_table<D>(
    display: &mut D,
    session: &Session,
    scroll: usize,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let rows_height = TABLE_ROW_HEIGHT * (TABLE_VISIBLE_ROWS as u32 + 1);
    fill_area(display, 0, HEADER_ROW_TOP, SCREEN_WIDTH, rows_height, BLACK);

    draw_column_header(display);

    let styled = session.is_styled();
    let thresholds = &session.settings().thresholds;
    let (first, rows) = session.table().window(TABLE_VISIBLE_ROWS, scroll);
    for (slot, reading) in rows.iter().enumerate() {
        draw_row(display, row_top(slot), first + slot + 1, reading, styled.then_some(thresholds));
    }
}

fn draw_column_header<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let y = HEADER_ROW_TOP + BASELINE;
    Text::with_text_style("#", Point::new(NUM_RIGHT, y), LABEL_STYLE_GRAY, RIGHT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style("TIMESTAMP", Point::new(TIMESTAMP_X, y), LABEL_STYLE_GRAY, LEFT_ALIGNED)
        .draw(display)
        .ok();
    for quantity in Quantity::ALL {
        let right = cell_x(quantity) + VALUE_CELL_WIDTH as i32 - VALUE_PAD;
        Text::with_text_style(quantity.label(), Point::new(right, y), LABEL_STYLE_GRAY, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

/// Draw one reading. `thresholds` is `None` for the unstyled dump.
fn draw_row<D>(
    display: &mut D,
    top: i32,
    number: usize,
    reading: &Reading,
    thresholds: Option<&Thresholds>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let y = top + BASELINE;

    let mut num: String<8> = String::new();
    let _ = write!(num, "{number}");
    Text::with_text_style(&num, Point::new(NUM_RIGHT, y), LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(&reading.timestamp_label(), Point::new(TIMESTAMP_X, y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    for quantity in Quantity::ALL {
        let value = reading.value(quantity);
        let x = cell_x(quantity);
        let highlight = thresholds.and_then(|t| t.cell_highlight(quantity, value));

        let text_color = highlight.map_or(WHITE, |bg| {
            fill_area(display, x, top, VALUE_CELL_WIDTH - 2, TABLE_ROW_HEIGHT, bg);
            label_color_for_bg(bg)
        });

        let mut s: String<16> = String::new();
        let _ = write!(s, "{value:.2}");
        Text::with_text_style(
            &s,
            Point::new(x + VALUE_CELL_WIDTH as i32 - VALUE_PAD, y),
            MonoTextStyle::new(LABEL_FONT, text_color),
            RIGHT_ALIGNED,
        )
        .draw(display)
        .ok();
    }
}
