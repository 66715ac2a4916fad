//! Time-series chart for one quantity.
//!
//! ```text
//! ┌──────────────────────────┐
//! │PRESSURE          THR 90  │  title + threshold legend
//! │ 98 ┤    o                │
//! │    │ o / \   o           │  line with point markers
//! │    ┼-- -- -- -- -- -- -- │  dashed red threshold
//! │ 52 ┤o     o-o            │
//! │    1    every 3 s     12 │  x-axis caption
//! └──────────────────────────┘
//! ```
//!
//! X is the 1-based tick index, spread across the full plot width. Y
//! auto-scales so both the data and the threshold are always visible.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{BLACK, GRAY, RED},
    config::{CHART_HEIGHT, CHART_TOP, CHART_WIDTH},
    session::SessionTable,
    styles::{CENTERED, LABEL_FONT, LABEL_STYLE_GRAY, LEFT_ALIGNED, RIGHT_ALIGNED},
    thresholds::{Quantity, Thresholds},
    widgets::primitives::{draw_dashed_hline, draw_marker, fill_area},
};

// =============================================================================
// Chart Layout Constants
// =============================================================================

/// Space left of the plot for y-axis labels (4 glyphs).
const PLOT_LEFT: i32 = 28;

/// Space above the plot for the title row.
const PLOT_TOP: i32 = 14;

/// Space right of the plot.
const PLOT_RIGHT: i32 = 6;

/// Space below the plot for the x-axis caption.
const PLOT_BOTTOM: i32 = 14;

/// Markers are skipped once points are closer than this many pixels.
const MARKER_MIN_SPACING: f32 = 4.0;

/// Legend style for threshold labels.
const LEGEND_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, RED);

const AXIS_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

// =============================================================================
// Scaling
// =============================================================================

/// Y-axis range of a chart.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ChartScale {
    pub lo: f32,
    pub hi: f32,
}

impl ChartScale {
    /// Range covering every value and the threshold, padded by 5%.
    ///
    /// A flat range (single point sitting on the threshold) widens to ±1.
    pub fn fit(
        values: impl IntoIterator<Item = f32>,
        threshold: f32,
    ) -> Self {
        let (lo, hi) = values
            .into_iter()
            .fold((threshold, threshold), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let span = hi - lo;
        if span < f32::EPSILON {
            return Self { lo: lo - 1.0, hi: hi + 1.0 };
        }
        let pad = span * 0.05;
        Self {
            lo: lo - pad,
            hi: hi + pad,
        }
    }

    /// Screen row of `value` for a plot spanning `top..=bottom`.
    pub fn y_for(
        &self,
        value: f32,
        top: i32,
        bottom: i32,
    ) -> i32 {
        let t = (value - self.lo) / (self.hi - self.lo);
        (bottom as f32 - t * (bottom - top) as f32).round() as i32
    }
}

/// Screen column of point `i` (zero-based) out of `count`, for a plot spanning `left..=right`.
///
/// A single point sits in the middle of the plot.
pub fn x_for(
    i: usize,
    count: usize,
    left: i32,
    right: i32,
) -> i32 {
    if count < 2 {
        return (left + right) / 2;
    }
    let step = (right - left) as f32 / (count - 1) as f32;
    (left + (i as f32 * step).round() as i32).min(right)
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the chart for `quantity` in its column of the chart row.
pub fn draw_chart<D>(
    display: &mut D,
    quantity: Quantity,
    table: &SessionTable,
    thresholds: &Thresholds,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let x0 = (quantity.index() as u32 * CHART_WIDTH) as i32;
    let y0 = CHART_TOP as i32;

    // Clear inside the dividers
    fill_area(display, x0 + 1, y0, CHART_WIDTH - 2, CHART_HEIGHT - 1, BLACK);

    let left = x0 + PLOT_LEFT;
    let right = x0 + CHART_WIDTH as i32 - PLOT_RIGHT - 1;
    let top = y0 + PLOT_TOP;
    let bottom = y0 + CHART_HEIGHT as i32 - PLOT_BOTTOM - 1;

    let color = quantity.line_color();
    let threshold = thresholds.get(quantity);
    let scale = ChartScale::fit(table.series(quantity), threshold);

    // Title and legend
    Text::with_text_style(
        quantity.label(),
        Point::new(x0 + 4, y0 + 10),
        MonoTextStyle::new(LABEL_FONT, color),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();
    let mut legend: String<12> = String::new();
    let _ = write!(legend, "THR {}", thresholds.raw(quantity));
    Text::with_text_style(&legend, Point::new(right, y0 + 10), LEGEND_STYLE, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    // Axes
    Line::new(Point::new(left - 1, top), Point::new(left - 1, bottom + 1))
        .into_styled(AXIS_STYLE)
        .draw(display)
        .ok();
    Line::new(Point::new(left - 1, bottom + 1), Point::new(right, bottom + 1))
        .into_styled(AXIS_STYLE)
        .draw(display)
        .ok();
    draw_axis_label(display, scale.hi, Point::new(left - 3, top + 6));
    draw_axis_label(display, scale.lo, Point::new(left - 3, bottom + 1));

    // Threshold line, drawn under the data
    draw_dashed_hline(display, left, right, scale.y_for(threshold, top, bottom), RED);

    // Series
    let count = table.len();
    let line_style = PrimitiveStyle::with_stroke(color, 1);
    let spacing = if count > 1 { (right - left) as f32 / (count - 1) as f32 } else { f32::MAX };
    let mut prev: Option<Point> = None;
    for (i, value) in table.series(quantity).enumerate() {
        let point = Point::new(x_for(i, count, left, right), scale.y_for(value, top, bottom));
        if let Some(p) = prev {
            Line::new(p, point).into_styled(line_style).draw(display).ok();
        }
        if spacing >= MARKER_MIN_SPACING {
            draw_marker(display, point, color);
        }
        prev = Some(point);
    }

    // X-axis caption
    let caption_y = y0 + CHART_HEIGHT as i32 - 3;
    Text::with_text_style("every 3 s", Point::new((left + right) / 2, caption_y), LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();
    if count > 0 {
        let mut last: String<8> = String::new();
        let _ = write!(last, "{count}");
        Text::with_text_style("1", Point::new(left, caption_y), LABEL_STYLE_GRAY, LEFT_ALIGNED)
            .draw(display)
            .ok();
        Text::with_text_style(&last, Point::new(right, caption_y), LABEL_STYLE_GRAY, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_axis_label<D>(
    display: &mut D,
    value: f32,
    pos: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut s: String<8> = String::new();
    let _ = write!(s, "{value:.0}");
    Text::with_text_style(&s, pos, LABEL_STYLE_GRAY, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}
