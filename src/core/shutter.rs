//! Shutter choreography: close -> swap -> open, as a tagged state machine with
//! exactly one scheduled deadline per state.
//!
//! Time is injected in milliseconds. `advance` fires every step whose deadline
//! has passed, in order, and each step is scheduled from the previous step's
//! deadline rather than from `now`, so a late tick replays the sequence with
//! the same relative timing instead of skipping or stalling it.

use super::constants::{SHUTTER_CLOSE_MS, SHUTTER_OPEN_MS, SHUTTER_SWAP_PAUSE_MS};
use super::cue::Cue;
use super::mode::Mode;
use super::nav::NavigationState;
use super::tween::Easing;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShutterTiming {
    pub close_ms: f64,
    pub swap_pause_ms: f64,
    pub open_ms: f64,
}

impl Default for ShutterTiming {
    fn default() -> Self {
        Self {
            close_ms: SHUTTER_CLOSE_MS,
            swap_pause_ms: SHUTTER_SWAP_PAUSE_MS,
            open_ms: SHUTTER_OPEN_MS,
        }
    }
}

impl ShutterTiming {
    pub fn total_ms(&self) -> f64 {
        self.close_ms + self.swap_pause_ms + self.open_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShutterPhase {
    Open,
    Closing { target: Mode, until_ms: f64 },
    Swapping { until_ms: f64 },
    Opening { until_ms: f64 },
}

/// What a step did, for callers that react to the swap (scene rebuild).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShutterEvent {
    Committed(Mode),
    Reopened,
    Completed,
}

/// Timestamps of one full transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionRecord {
    pub closed_ms: f64,
    pub committed_ms: f64,
    pub reopened_ms: f64,
    pub completed_ms: f64,
}

#[derive(Clone, Debug)]
pub struct ShutterChoreographer {
    timing: ShutterTiming,
    phase: ShutterPhase,
    // at most one request parked while busy; latest wins
    pending: Option<Mode>,
    current: TransitionRecord,
    last: Option<TransitionRecord>,
}

impl Default for ShutterChoreographer {
    fn default() -> Self {
        Self::new(ShutterTiming::default())
    }
}

impl ShutterChoreographer {
    pub fn new(timing: ShutterTiming) -> Self {
        Self {
            timing,
            phase: ShutterPhase::Open,
            pending: None,
            current: TransitionRecord::default(),
            last: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> ShutterPhase {
        self.phase
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == ShutterPhase::Open
    }

    pub fn timing(&self) -> ShutterTiming {
        self.timing
    }

    pub fn pending(&self) -> Option<Mode> {
        self.pending
    }

    pub fn last_record(&self) -> Option<TransitionRecord> {
        self.last
    }

    /// Start closing toward `mode`. While a sequence is in flight the request
    /// is parked and honoured after it completes. Returns true if a sequence
    /// started now.
    pub fn transition_to(
        &mut self,
        nav: &mut NavigationState,
        mode: Mode,
        now_ms: f64,
        cues: &mut Vec<Cue>,
    ) -> bool {
        if !self.is_idle() {
            log::debug!("[shutter] busy, parking request for {:?}", mode);
            self.pending = Some(mode);
            return false;
        }
        nav.begin_transition();
        nav.set_shutter(false);
        cues.push(Cue::Click);
        self.current = TransitionRecord {
            closed_ms: now_ms,
            ..TransitionRecord::default()
        };
        self.phase = ShutterPhase::Closing {
            target: mode,
            until_ms: now_ms + self.timing.close_ms,
        };
        log::debug!("[shutter] closing toward {:?}", mode);
        true
    }

    pub fn next_deadline(&self) -> Option<f64> {
        match self.phase {
            ShutterPhase::Open => None,
            ShutterPhase::Closing { until_ms, .. }
            | ShutterPhase::Swapping { until_ms }
            | ShutterPhase::Opening { until_ms } => Some(until_ms),
        }
    }

    /// Fire every step whose deadline is at or before `now_ms`.
    pub fn advance(
        &mut self,
        nav: &mut NavigationState,
        now_ms: f64,
        cues: &mut Vec<Cue>,
        events: &mut Vec<ShutterEvent>,
    ) {
        while let Some(deadline) = self.next_deadline() {
            if now_ms < deadline {
                break;
            }
            self.step(nav, deadline, cues, events);
        }
    }

    fn step(
        &mut self,
        nav: &mut NavigationState,
        at_ms: f64,
        cues: &mut Vec<Cue>,
        events: &mut Vec<ShutterEvent>,
    ) {
        match self.phase {
            ShutterPhase::Open => {}
            ShutterPhase::Closing { target, .. } => {
                cues.push(Cue::ShutterClose);
                nav.commit_mode(target);
                self.current.committed_ms = at_ms;
                events.push(ShutterEvent::Committed(target));
                log::info!("[shutter] mode committed: {}", target.label());
                self.phase = ShutterPhase::Swapping {
                    until_ms: at_ms + self.timing.swap_pause_ms,
                };
            }
            ShutterPhase::Swapping { .. } => {
                nav.set_shutter(true);
                cues.push(Cue::ShutterOpen);
                self.current.reopened_ms = at_ms;
                events.push(ShutterEvent::Reopened);
                self.phase = ShutterPhase::Opening {
                    until_ms: at_ms + self.timing.open_ms,
                };
            }
            ShutterPhase::Opening { .. } => {
                nav.end_transition();
                self.current.completed_ms = at_ms;
                self.last = Some(self.current);
                events.push(ShutterEvent::Completed);
                self.phase = ShutterPhase::Open;
                log::debug!("[shutter] open");
                if let Some(next) = self.pending.take() {
                    if next != nav.current_mode() {
                        self.transition_to(nav, next, at_ms, cues);
                    }
                }
            }
        }
    }

    /// Drop any in-flight or parked sequence and leave the shutter open.
    pub fn cancel(&mut self, nav: &mut NavigationState) {
        self.pending = None;
        if !self.is_idle() {
            log::debug!("[shutter] cancelled in {:?}", self.phase);
        }
        self.phase = ShutterPhase::Open;
        nav.set_shutter(true);
        nav.end_transition();
    }

    /// Iris openness in [0, 1], 1 meaning fully open.
    pub fn aperture(&self, now_ms: f64) -> f32 {
        match self.phase {
            ShutterPhase::Open => 1.0,
            ShutterPhase::Closing { until_ms, .. } => {
                let t = progress(until_ms, self.timing.close_ms, now_ms);
                1.0 - Easing::Power2In.apply(t)
            }
            ShutterPhase::Swapping { .. } => 0.0,
            ShutterPhase::Opening { until_ms } => {
                let t = progress(until_ms, self.timing.open_ms, now_ms);
                Easing::Power2Out.apply(t)
            }
        }
    }
}

#[inline]
fn progress(until_ms: f64, duration_ms: f64, now_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (1.0 - (until_ms - now_ms) / duration_ms).clamp(0.0, 1.0) as f32
}
