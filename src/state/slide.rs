//! Drag-session state for the slide-to-confirm control.
//!
//! Pure state machine; the component wires it to DOM events. One session
//! runs from pointer/touch-down to release. Crossing the completion
//! threshold fires the caller's action exactly once per session.

/// Pixels short of the track's far edge that still count as "reached",
/// so the user need not drag to the exact last pixel.
pub const COMPLETION_MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOutcome {
    /// Offset tracked (or the event was ignored); nothing to do.
    Tracking,
    /// Threshold crossed for the first time this session; invoke the
    /// completion action now.
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlideSession {
    /// Horizontal displacement of the handle, clamped to [0, track width].
    pub offset: f64,
    pub dragging: bool,
    /// Set when the threshold has been crossed; blocks duplicate
    /// invocations and keeps the handle pinned while the action resolves.
    pub committed: bool,
}

impl SlideSession {
    /// Start a drag. Ignored while the caller's action is still in flight.
    pub fn begin(&mut self, is_loading: bool) -> bool {
        if is_loading {
            return false;
        }
        self.dragging = true;
        true
    }

    /// Track a pointer move. `client_x` is the pointer's horizontal client
    /// coordinate; `rect_left` and `track_width` come from the container's
    /// bounding box measured at event time, which keeps the control
    /// resolution-independent.
    pub fn drag_to(&mut self, client_x: f64, rect_left: f64, track_width: f64) -> SlideOutcome {
        if !self.dragging || self.committed {
            return SlideOutcome::Tracking;
        }
        let position = (client_x - rect_left).clamp(0.0, track_width);
        self.offset = position;
        if position >= track_width - COMPLETION_MARGIN {
            self.committed = true;
            return SlideOutcome::Completed;
        }
        SlideOutcome::Tracking
    }

    /// End the drag. Below the threshold the handle snaps back to rest;
    /// past it the handle stays pinned while the action resolves.
    pub fn release(&mut self, track_width: f64) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        if self.offset < track_width - COMPLETION_MARGIN {
            self.offset = 0.0;
        }
    }

    /// The completion action failed; snap back to idle so the user can retry.
    pub fn fail(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: f64 = 280.0;
    const LEFT: f64 = 0.0;

    #[test]
    fn released_below_threshold_resets_without_completing() {
        let mut s = SlideSession::default();
        assert!(s.begin(false));
        assert_eq!(s.drag_to(200.0, LEFT, TRACK), SlideOutcome::Tracking);
        assert_eq!(s.offset, 200.0);
        s.release(TRACK);
        assert_eq!(s.offset, 0.0);
        assert!(!s.dragging);
        assert!(!s.committed);
    }

    #[test]
    fn threshold_completes_exactly_once() {
        let mut s = SlideSession::default();
        s.begin(false);
        assert_eq!(s.drag_to(271.0, LEFT, TRACK), SlideOutcome::Completed);
        // Further moves past the threshold must not re-fire.
        assert_eq!(s.drag_to(275.0, LEFT, TRACK), SlideOutcome::Tracking);
        assert_eq!(s.drag_to(280.0, LEFT, TRACK), SlideOutcome::Tracking);
        assert!(s.committed);
    }

    #[test]
    fn committed_handle_stays_pinned_through_release() {
        let mut s = SlideSession::default();
        s.begin(false);
        s.drag_to(272.0, LEFT, TRACK);
        s.release(TRACK);
        assert!(s.committed);
        assert_eq!(s.offset, 272.0);
        assert!(!s.dragging);
    }

    #[test]
    fn offset_is_clamped_to_track_bounds() {
        let mut s = SlideSession::default();
        s.begin(false);
        s.drag_to(-40.0, LEFT, TRACK);
        assert_eq!(s.offset, 0.0);
        let mut s = SlideSession::default();
        s.begin(false);
        s.drag_to(500.0, 100.0, TRACK);
        assert_eq!(s.offset, TRACK);
    }

    #[test]
    fn failure_resets_to_idle_and_allows_retry() {
        let mut s = SlideSession::default();
        s.begin(false);
        assert_eq!(s.drag_to(271.0, LEFT, TRACK), SlideOutcome::Completed);
        s.fail();
        assert_eq!(s, SlideSession::default());
        // A fresh drag to the threshold completes again.
        s.begin(false);
        assert_eq!(s.drag_to(278.0, LEFT, TRACK), SlideOutcome::Completed);
    }

    #[test]
    fn failure_ends_the_session_even_while_still_held() {
        let mut s = SlideSession::default();
        s.begin(false);
        assert_eq!(s.drag_to(275.0, LEFT, TRACK), SlideOutcome::Completed);
        // The pointer is still down when the action rejects.
        s.fail();
        assert!(!s.dragging);
        // The eventual release finds no active drag and changes nothing.
        s.release(TRACK);
        assert_eq!(s, SlideSession::default());
    }

    #[test]
    fn drag_start_is_ignored_while_loading() {
        let mut s = SlideSession::default();
        assert!(!s.begin(true));
        assert!(!s.dragging);
        // Moves without an active drag change nothing.
        assert_eq!(s.drag_to(275.0, LEFT, TRACK), SlideOutcome::Tracking);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn moves_account_for_container_left_edge() {
        let mut s = SlideSession::default();
        s.begin(false);
        // Container starts at x=50; pointer at 120 means 70px of travel.
        s.drag_to(120.0, 50.0, TRACK);
        assert_eq!(s.offset, 70.0);
    }
}
