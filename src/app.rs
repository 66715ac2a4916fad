//! Application state and per-frame logic.
//!
//! [`App`] owns everything the window loop mutates: current page, setup
//! form, the optional monitoring session, the reading source, the active
//! popup and render tracking. `main` drives it once per frame:
//!
//! 1. [`App::handle_key`] for each key press
//! 2. [`App::update`] to poll the session ticker and expire popups
//! 3. [`App::draw`] to redraw whatever is stale
//!
//! All three take `now` explicitly, so tests step through a session with
//! synthetic instants instead of sleeping.

use std::time::Instant;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_graphics_simulator::sdl2::Keycode;
use log::{debug, info};

use crate::colors::BLACK;
use crate::config::TABLE_VISIBLE_ROWS;
use crate::controls::SetupForm;
use crate::error::SettingsError;
use crate::input::{Action, map_key};
use crate::monitor::{MonitorState, Session, TickOutcome};
use crate::pages::Page;
use crate::reading::{ReadingSource, SimulatedCompressor};
use crate::render::{HeaderStatus, Popup, RenderState};
use crate::screens::{draw_help_page, draw_monitor_body, draw_setup_page};
use crate::session::Settings;
use crate::widgets::{draw_header, draw_popup, session_status_text};

/// Whole-application state.
pub struct App<S = SimulatedCompressor> {
    page: Page,
    /// Page to return to when help closes.
    help_return: Page,
    form: SetupForm,
    session: Option<Session>,
    source: S,
    popup: Option<Popup>,
    render: RenderState,
    /// Rows scrolled back from the newest (stopped sessions only).
    scroll: usize,
    quit: bool,
}

impl App<SimulatedCompressor> {
    /// Create the application with the simulated compressor.
    pub fn new() -> Self { Self::with_source(SimulatedCompressor::new()) }
}

impl Default for App<SimulatedCompressor> {
    fn default() -> Self { Self::new() }
}

impl<S: ReadingSource> App<S> {
    /// Create the application with a custom reading source.
    pub const fn with_source(source: S) -> Self {
        Self {
            page: Page::Setup,
            help_return: Page::Setup,
            form: SetupForm::new(),
            session: None,
            source,
            popup: None,
            render: RenderState::new(),
            scroll: 0,
            quit: false,
        }
    }

    #[inline]
    pub const fn page(&self) -> Page { self.page }

    #[inline]
    pub const fn form(&self) -> &SetupForm { &self.form }

    #[inline]
    pub const fn session(&self) -> Option<&Session> { self.session.as_ref() }

    #[inline]
    pub const fn popup(&self) -> Option<&Popup> { self.popup.as_ref() }

    #[inline]
    pub const fn scroll(&self) -> usize { self.scroll }

    #[inline]
    pub const fn should_quit(&self) -> bool { self.quit }

    /// Whether the monitor table accepts scrolling keys.
    fn table_scrollable(&self) -> bool {
        self.page == Page::Monitor
            && self
                .session
                .as_ref()
                .is_some_and(|s| matches!(s.state(), MonitorState::Stopped(_)))
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a key press from the window.
    pub fn handle_key(
        &mut self,
        keycode: Keycode,
        repeat: bool,
        now: Instant,
    ) -> Result<(), SettingsError> {
        match map_key(keycode, repeat, self.page, self.table_scrollable()) {
            Some(action) => self.handle(action, now),
            None => Ok(()),
        }
    }

    /// Apply one action.
    ///
    /// Only starting a session can fail, when the form holds values outside
    /// the accepted ranges.
    pub fn handle(
        &mut self,
        action: Action,
        now: Instant,
    ) -> Result<(), SettingsError> {
        debug!("Action {action:?} on {} page", self.page.title());
        match action {
            Action::Quit => {
                info!("Quit requested");
                self.quit = true;
            }
            Action::ToggleHelp => {
                if self.page != Page::Help {
                    self.help_return = self.page;
                }
                self.switch_page(self.page.toggle_help(self.help_return));
            }
            Action::SelectPrev => {
                self.form.select_prev();
                self.render.mark_body_dirty();
            }
            Action::SelectNext => {
                self.form.select_next();
                self.render.mark_body_dirty();
            }
            Action::Adjust(delta) => {
                self.form.adjust(delta);
                self.render.mark_body_dirty();
            }
            Action::Start => {
                let settings = self.form.settings()?;
                self.start_session(settings, now);
                self.switch_page(Page::Monitor);
            }
            Action::Refresh => {
                if let Some(settings) = self.session.as_ref().map(|s| *s.settings()) {
                    info!("Session refreshed");
                    self.start_session(settings, now);
                    self.popup = Some(Popup::Restarted(now));
                }
            }
            Action::BackToSetup => {
                if self.session.take().is_some() {
                    info!("Session discarded, back to setup");
                }
                self.popup = None;
                self.switch_page(Page::Setup);
            }
            Action::Scroll(delta) => {
                if let Some(session) = &self.session {
                    let max = session.table().max_scroll(TABLE_VISIBLE_ROWS);
                    self.scroll = self.scroll.saturating_add_signed(delta as isize).min(max);
                    self.render.mark_body_dirty();
                }
            }
        }
        Ok(())
    }

    /// Replace any session with a new one and start it at `now`.
    fn start_session(
        &mut self,
        settings: Settings,
        now: Instant,
    ) {
        let mut session = Session::new(settings);
        session.start(now);
        self.session = Some(session);
        self.scroll = 0;
        self.render.mark_body_dirty();
    }

    fn switch_page(
        &mut self,
        page: Page,
    ) {
        if page != self.page {
            self.page = page;
            self.render.mark_display_cleared();
        }
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Advance the session and expire popups.
    ///
    /// The session keeps ticking while another page is shown.
    pub fn update(
        &mut self,
        now: Instant,
    ) {
        if let Some(session) = self.session.as_mut() {
            match session.poll(&mut self.source, now) {
                Some(TickOutcome::Recorded { .. }) => self.render.mark_body_dirty(),
                Some(TickOutcome::Stopped { .. }) => {
                    self.popup = Some(Popup::Stopped(now));
                    self.render.mark_body_dirty();
                }
                Some(TickOutcome::Ignored) | None => {}
            }
        }

        if self.popup.is_some_and(|p| p.is_expired_at(now)) {
            self.popup = None;
        }
        self.render.update_popup(self.popup.as_ref());
    }

    // =========================================================================
    // Draw
    // =========================================================================

    fn header_status(
        &self,
        now: Instant,
    ) -> HeaderStatus {
        match (&self.session, self.page) {
            (Some(session), Page::Monitor) => HeaderStatus {
                elapsed_secs: session
                    .elapsed_secs(now)
                    .min(session.settings().budget.as_secs()),
                rows: session.table().len(),
                stopped: matches!(session.state(), MonitorState::Stopped(_)),
            },
            _ => HeaderStatus::default(),
        }
    }

    /// Redraw the stale parts of the display.
    pub fn draw<D>(
        &mut self,
        display: &mut D,
        now: Instant,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.render.needs_clear() {
            display.clear(BLACK).ok();
        }

        let status = self.header_status(now);
        if self.render.check_header_dirty(status) {
            match (&self.session, self.page) {
                (Some(session), Page::Monitor) => {
                    draw_header(display, &session_status_text(status, session.settings().budget.as_secs()));
                }
                (_, page) => draw_header(display, page.title()),
            }
        }

        if self.render.need_body() {
            match (&self.session, self.page) {
                (_, Page::Setup) => draw_setup_page(display, &self.form),
                (Some(session), Page::Monitor) => draw_monitor_body(display, session, self.scroll),
                (None, Page::Monitor) => {}
                (_, Page::Help) => draw_help_page(display),
            }
            self.render.mark_body_drawn();
        }

        // Popups sit on top of the monitor page only
        if let (Some(popup), Page::Monitor) = (&self.popup, self.page) {
            draw_popup(display, popup.kind());
        }

        self.render.end_frame();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
