//! Keyboard input handling.
//!
//! Converts simulator key presses into [`Action`]s for the current page.
//! Mapping is a pure function so it can be tested without a window.
//!
//! | Key | Page | Action |
//! |-----|------|--------|
//! | Up / Down | Setup | Select control |
//! | Left / Right | Setup | Adjust by 1 |
//! | PageDown / PageUp | Setup | Adjust by 10 |
//! | Enter | Setup | Start monitoring |
//! | R | Monitor | Refresh (restart the session) |
//! | S | Monitor | Back to setup |
//! | Up / Down / PageUp / PageDown | Monitor (stopped) | Scroll the table |
//! | H | Any | Toggle help |
//! | Esc | Any | Quit |
//!
//! OS key repeat is honoured for selection, adjustment and scrolling so
//! holding a key sweeps a slider. Everything else ignores repeats to avoid
//! toggle spam.

use embedded_graphics_simulator::sdl2::Keycode;

use crate::config::TABLE_VISIBLE_ROWS;
use crate::controls::COARSE_STEP;
use crate::pages::Page;

/// Something the user asked for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    SelectPrev,
    SelectNext,
    /// Change the selected setup control by this amount.
    Adjust(i32),
    /// Start a session with the current setup values.
    Start,
    /// Restart the session with the same settings.
    Refresh,
    /// Discard the session and return to the setup page.
    BackToSetup,
    /// Scroll the stopped table; positive moves towards older rows.
    Scroll(i32),
    ToggleHelp,
    Quit,
}

impl Action {
    /// Whether holding the key should repeat this action.
    const fn repeats(self) -> bool { matches!(self, Self::SelectPrev | Self::SelectNext | Self::Adjust(_) | Self::Scroll(_)) }
}

const PAGE_SCROLL: i32 = TABLE_VISIBLE_ROWS as i32;
const COARSE: i32 = COARSE_STEP as i32;

/// Map a key press to an action.
///
/// `table_scrollable` is true on the monitor page once the session has
/// stopped; scrolling keys do nothing while readings are still arriving.
pub fn map_key(
    keycode: Keycode,
    repeat: bool,
    page: Page,
    table_scrollable: bool,
) -> Option<Action> {
    let action = match (page, keycode) {
        (_, Keycode::ESCAPE) => Action::Quit,
        (_, Keycode::H) => Action::ToggleHelp,

        (Page::Setup, Keycode::UP) => Action::SelectPrev,
        (Page::Setup, Keycode::DOWN) => Action::SelectNext,
        (Page::Setup, Keycode::LEFT) => Action::Adjust(-1),
        (Page::Setup, Keycode::RIGHT) => Action::Adjust(1),
        (Page::Setup, Keycode::PAGEDOWN) => Action::Adjust(-COARSE),
        (Page::Setup, Keycode::PAGEUP) => Action::Adjust(COARSE),
        (Page::Setup, Keycode::RETURN | Keycode::KP_ENTER) => Action::Start,

        (Page::Monitor, Keycode::R) => Action::Refresh,
        (Page::Monitor, Keycode::S) => Action::BackToSetup,
        (Page::Monitor, Keycode::UP) if table_scrollable => Action::Scroll(1),
        (Page::Monitor, Keycode::DOWN) if table_scrollable => Action::Scroll(-1),
        (Page::Monitor, Keycode::PAGEUP) if table_scrollable => Action::Scroll(PAGE_SCROLL),
        (Page::Monitor, Keycode::PAGEDOWN) if table_scrollable => Action::Scroll(-PAGE_SCROLL),

        _ => return None,
    };

    (!repeat || action.repeats()).then_some(action)
}
