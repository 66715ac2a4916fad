//! Render state tracking for selective redraws.
//!
//! Nothing on screen animates between monitoring ticks, so most frames draw
//! nothing at all. This module decides what is stale:
//!
//! | Element | Redrawn when |
//! |---------|--------------|
//! | Header | Status text changes (elapsed second, row count, state) |
//! | Page body | Tick recorded, input handled, scroll moved |
//! | Everything | First frame, page switch, popup closed or switched |
//!
//! # Popup Cleanup
//!
//! When a popup closes, the display is cleared and every element is redrawn
//! so the popup border does not linger over the charts.

use std::time::Instant;

use crate::config::POPUP_DURATION;

// =============================================================================
// Popups
// =============================================================================

/// Active popup with the instant it was shown.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "SESSION RESTARTED" after a refresh.
    Restarted(Instant),
    /// "MONITORING STOPPED" when the run budget is used up.
    Stopped(Instant),
}

/// Popup variant without its timestamp.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PopupKind {
    Restarted,
    Stopped,
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Restarted(t) | Self::Stopped(t) => *t,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PopupKind {
        match self {
            Self::Restarted(_) => PopupKind::Restarted,
            Self::Stopped(_) => PopupKind::Stopped,
        }
    }

    /// Check if this popup has been visible for [`POPUP_DURATION`] at `now`.
    #[inline]
    pub fn is_expired_at(
        &self,
        now: Instant,
    ) -> bool {
        now.saturating_duration_since(self.start_time()) >= POPUP_DURATION
    }
}

// =============================================================================
// Header Status
// =============================================================================

/// Everything the header shows, compared frame to frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct HeaderStatus {
    pub elapsed_secs: u64,
    pub rows: usize,
    pub stopped: bool,
}

// =============================================================================
// Render State
// =============================================================================

/// Tracks which parts of the display are stale.
pub struct RenderState {
    /// Previous header contents, `None` until drawn once.
    prev_header: Option<HeaderStatus>,

    /// Previous popup kind, for detecting close and switch.
    prev_popup_kind: Option<PopupKind>,

    /// Popup closed or switched this frame.
    popup_just_closed: bool,

    /// Page body needs redrawing.
    body_dirty: bool,

    /// First frame (nothing drawn yet).
    first_frame: bool,

    /// Display was cleared for a page switch.
    display_cleared: bool,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            prev_header: None,
            prev_popup_kind: None,
            popup_just_closed: false,
            body_dirty: true,
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Whether the whole display must be cleared before drawing this frame.
    #[inline]
    pub const fn needs_clear(&self) -> bool { self.first_frame || self.popup_just_closed || self.display_cleared }

    /// Check if the header must be redrawn, remembering `status`.
    pub fn check_header_dirty(
        &mut self,
        status: HeaderStatus,
    ) -> bool {
        let dirty = self.needs_clear() || self.prev_header != Some(status);
        self.prev_header = Some(status);
        dirty
    }

    /// Request a page body redraw.
    #[inline]
    pub const fn mark_body_dirty(&mut self) { self.body_dirty = true; }

    /// Whether the page body must be redrawn.
    #[inline]
    pub const fn need_body(&self) -> bool { self.body_dirty || self.needs_clear() }

    /// Mark the page body as drawn.
    #[inline]
    pub const fn mark_body_drawn(&mut self) { self.body_dirty = false; }

    /// Update popup tracking with the current popup.
    ///
    /// Closing or switching popups both need a clear, since popup sizes differ
    /// and the old border would otherwise remain.
    pub fn update_popup(
        &mut self,
        popup: Option<&Popup>,
    ) {
        let current_kind = popup.map(Popup::kind);
        let was_visible = self.prev_popup_kind.is_some();
        if current_kind != self.prev_popup_kind && was_visible {
            self.popup_just_closed = true;
        }
        self.prev_popup_kind = current_kind;
    }

    #[inline]
    pub const fn popup_just_closed(&self) -> bool { self.popup_just_closed }

    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Mark that the display was cleared for a page switch.
    pub const fn mark_display_cleared(&mut self) {
        self.display_cleared = true;
        self.body_dirty = true;
    }

    /// Reset per-frame flags.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.popup_just_closed = false;
        self.display_cleared = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn status(elapsed_secs: u64) -> HeaderStatus {
        HeaderStatus {
            elapsed_secs,
            rows: 1,
            stopped: false,
        }
    }

    /// Render state as it is after the first frame was fully drawn.
    fn settled() -> RenderState {
        let mut state = RenderState::new();
        state.check_header_dirty(status(0));
        state.mark_body_drawn();
        state.end_frame();
        state
    }

    #[test]
    fn test_first_frame_draws_everything() {
        let mut state = RenderState::new();
        assert!(state.is_first_frame());
        assert!(state.needs_clear());
        assert!(state.need_body());
        assert!(state.check_header_dirty(HeaderStatus::default()));
    }

    #[test]
    fn test_settled_state_draws_nothing() {
        let mut state = settled();
        assert!(!state.needs_clear());
        assert!(!state.need_body(), "Body is clean until something changes");
        assert!(!state.check_header_dirty(status(0)), "Same header status is not dirty");
    }

    #[test]
    fn test_header_dirty_on_status_change() {
        let mut state = settled();
        assert!(state.check_header_dirty(status(1)), "New elapsed second redraws the header");
        assert!(!state.check_header_dirty(status(1)));
        assert!(state.check_header_dirty(HeaderStatus {
            stopped: true,
            ..status(1)
        }));
    }

    #[test]
    fn test_body_dirty_cycle() {
        let mut state = settled();
        state.mark_body_dirty();
        assert!(state.need_body());
        state.mark_body_drawn();
        assert!(!state.need_body());
    }

    #[test]
    fn test_popup_close_forces_clear() {
        let mut state = settled();
        let popup = Popup::Restarted(Instant::now());
        state.update_popup(Some(&popup));
        assert!(!state.popup_just_closed(), "Showing a popup needs no clear");

        state.update_popup(None);
        assert!(state.popup_just_closed());
        assert!(state.needs_clear());
        assert!(state.need_body(), "Body redraws after the clear");
        assert!(state.check_header_dirty(status(0)), "Header redraws after the clear");

        state.end_frame();
        assert!(!state.popup_just_closed());
    }

    #[test]
    fn test_popup_switch_forces_clear() {
        let mut state = settled();
        let now = Instant::now();
        state.update_popup(Some(&Popup::Restarted(now)));
        state.update_popup(Some(&Popup::Stopped(now)));
        assert!(state.popup_just_closed(), "Switching popup kind clears remnants");
    }

    #[test]
    fn test_popup_same_kind_no_clear() {
        let mut state = settled();
        let now = Instant::now();
        state.update_popup(Some(&Popup::Stopped(now)));
        state.end_frame();
        state.update_popup(Some(&Popup::Stopped(now + Duration::from_millis(20))));
        assert!(!state.popup_just_closed());
    }

    #[test]
    fn test_display_cleared() {
        let mut state = settled();
        state.mark_display_cleared();
        assert!(state.needs_clear());
        assert!(state.need_body());
        state.mark_body_drawn();
        state.end_frame();
        assert!(!state.needs_clear());
        assert!(!state.need_body());
    }

    #[test]
    fn test_popup_expiry() {
        let start = Instant::now();
        let popup = Popup::Stopped(start);
        assert!(!popup.is_expired_at(start + POPUP_DURATION - Duration::from_millis(1)));
        assert!(popup.is_expired_at(start + POPUP_DURATION));
        assert_eq!(popup.kind(), PopupKind::Stopped);
    }
}
