//! Monitor page body.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ COMPRESSOR MONITOR           RUN 00:00:12 / 00:01:00  ROWS 5 │ header
//! ├────────────────────┬────────────────────┬────────────────────┤
//! │ PRESSURE    THR 90 │ TEMPERATURE THR 30 │ VIBRATION    THR 8 │
//! │   charts           │                    │                    │ 130px
//! ├────────────────────┴────────────────────┴────────────────────┤
//! │  #  TIMESTAMP            PRESSURE  TEMPERATURE  VIBRATION    │
//! │  1  2024-05-01 09:30:00     95.12        25.40       3.08    │ 11 rows
//! │ ...                                                          │
//! │ banner: key hints or stop message                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, text::Text};

use crate::{
    colors::{BLACK, ORANGE},
    config::{SCREEN_HEIGHT, SCREEN_WIDTH, TABLE_ROW_HEIGHT},
    monitor::{MonitorState, Session, StopReason},
    styles::{LABEL_FONT, LABEL_STYLE_GRAY, LEFT_ALIGNED},
    thresholds::Quantity,
    widgets::{draw_chart, draw_dividers, draw_table, fill_area},
};

/// Top of the status banner under the table.
const BANNER_TOP: i32 = (SCREEN_HEIGHT - TABLE_ROW_HEIGHT - 4) as i32;

const BANNER_POS: Point = Point::new(6, BANNER_TOP + 9);

const BANNER_STYLE_ORANGE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(LABEL_FONT, ORANGE);

/// Shown when the session was started with a zero duration.
pub const NO_BUDGET_MESSAGE: &str = "Monitoring time is zero. No data will be generated.";

/// Shown once the run budget is used up.
pub const STOPPED_MESSAGE: &str = "Monitoring stopped: time limit reached. UP/DOWN scroll, R restart, S setup";

/// Key hints while readings are arriving.
pub const RUNNING_HINTS: &str = "R refresh   S setup   H help   ESC quit";

/// Banner text and whether it is a stop message.
pub const fn banner_text(state: MonitorState) -> (&'static str, bool) {
    match state {
        MonitorState::Stopped(StopReason::NoBudget) => (NO_BUDGET_MESSAGE, true),
        MonitorState::Stopped(StopReason::BudgetExhausted) => (STOPPED_MESSAGE, true),
        MonitorState::Idle | MonitorState::Running => (RUNNING_HINTS, false),
    }
}

/// Draw charts, table and banner for a session.
pub fn draw_monitor_body<D>(
    display: &mut D,
    session: &Session,
    scroll: usize,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let thresholds = &session.settings().thresholds;
    for quantity in Quantity::ALL {
        draw_chart(display, quantity, session.table(), thresholds);
    }
    draw_dividers(display);
    draw_table(display, session, scroll);

    fill_area(display, 0, BANNER_TOP, SCREEN_WIDTH, TABLE_ROW_HEIGHT, BLACK);
    let (text, alert) = banner_text(session.state());
    let style = if alert { BANNER_STYLE_ORANGE } else { LABEL_STYLE_GRAY };
    Text::with_text_style(text, BANNER_POS, style, LEFT_ALIGNED)
        .draw(display)
        .ok();
}
