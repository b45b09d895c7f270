//! Session-lifetime navigation blackboard.
//!
//! Every component reads this record; writes go through the named mutators
//! below. The transition fields (`current_mode`, `is_transitioning`,
//! `shutter_open`) are only writable from inside `core`, which in practice
//! means the shutter choreographer.

use super::focus::{FocusClaims, FocusToken};
use super::mode::Mode;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorPosition {
    pub x: f32,
    pub y: f32,
}

/// Outcome of asking for a mode change. None of these are errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeRequest {
    Accepted,
    AlreadyCurrent,
    Busy,
}

#[derive(Clone, Debug)]
pub struct NavigationState {
    current_mode: Mode,
    is_transitioning: bool,
    shutter_open: bool,
    cursor: CursorPosition,
    focus: FocusClaims,
    audio_enabled: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_mode: Mode::default(),
            is_transitioning: false,
            shutter_open: true,
            cursor: CursorPosition::default(),
            focus: FocusClaims::default(),
            audio_enabled: true,
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------- reads ----------------

    #[inline]
    pub fn current_mode(&self) -> Mode {
        self.current_mode
    }
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }
    #[inline]
    pub fn shutter_open(&self) -> bool {
        self.shutter_open
    }
    #[inline]
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }
    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }
    pub fn focus_target(&self) -> Option<&str> {
        self.focus.target()
    }
    pub fn focus_holder(&self) -> Option<FocusToken> {
        self.focus.holder()
    }
    #[inline]
    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    // ---------------- mutators ----------------

    /// Evaluate the transition guard for `mode`. Nothing is mutated; an
    /// accepted request still has to be handed to the choreographer.
    pub fn request_mode_change(&self, mode: Mode) -> ModeRequest {
        if self.is_transitioning {
            ModeRequest::Busy
        } else if mode == self.current_mode {
            ModeRequest::AlreadyCurrent
        } else {
            ModeRequest::Accepted
        }
    }

    pub(super) fn begin_transition(&mut self) {
        self.is_transitioning = true;
    }

    pub(super) fn end_transition(&mut self) {
        self.is_transitioning = false;
    }

    pub(super) fn set_shutter(&mut self, open: bool) {
        self.shutter_open = open;
    }

    /// Swap the active mode. Only legal while the shutter is closed.
    pub(super) fn commit_mode(&mut self, mode: Mode) {
        debug_assert!(!self.shutter_open, "mode committed with the shutter open");
        self.current_mode = mode;
        // objects of the old mode are gone, and so are their claims
        self.focus.clear();
    }

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor = CursorPosition { x, y };
    }

    /// Claim or release focus on behalf of `claimant`. Returns true when the
    /// state went from unfocused to focused.
    pub fn set_focus(&mut self, claimant: FocusToken, focused: bool, target: Option<String>) -> bool {
        let was_focused = self.focus.is_focused();
        if focused {
            self.focus.claim(claimant, target);
            log::debug!("[focus] claim {:?} -> {:?}", claimant, self.focus.target());
        } else if self.focus.release(claimant) {
            log::debug!("[focus] release {:?}", claimant);
        }
        !was_focused && self.focus.is_focused()
    }

    pub fn toggle_audio(&mut self) -> bool {
        self.audio_enabled = !self.audio_enabled;
        log::info!("[audio] enabled={}", self.audio_enabled);
        self.audio_enabled
    }
}
