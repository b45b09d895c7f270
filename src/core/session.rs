//! One explicitly owned session: navigation state plus every component that
//! reads or drives it. The browser layer keeps a single `Session` behind an
//! `Rc<RefCell<_>>`; tests build as many independent ones as they like.
//!
//! Time is always injected (`now_ms`, e.g. `performance.now()`), and audio
//! cues are appended to a caller-provided buffer only while audio is enabled.

use super::carousel::PortfolioFocus;
use super::constants::DEFAULT_SEED;
use super::cue::Cue;
use super::cursor::{Capabilities, CursorTracker};
use super::focus::FocusToken;
use super::keys::{key_intent, KeyIntent};
use super::mode::Mode;
use super::nav::{ModeRequest, NavigationState};
use super::reticle::{Reticle, ReticleView};
use super::scenes::{build_scene, object_id};
use super::selector::{DialGeometry, ModeSelector};
use super::shutter::{ShutterChoreographer, ShutterEvent, ShutterTiming};
use super::sim::{viewport_to_ndc, FrameInput, ObjectId, RenderInstance, SceneObjectSimulator, SimParams};

/// Focus claim held by the portfolio strip itself, separate from per-card hover claims.
pub const PORTFOLIO_STRIP_TOKEN: FocusToken = FocusToken(u32::MAX);

// longest frame step fed to the simulation
const MAX_FRAME_DT_SEC: f32 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub timing: ShutterTiming,
    pub sim: SimParams,
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timing: ShutterTiming::default(),
            sim: SimParams::default(),
            seed: DEFAULT_SEED,
        }
    }
}

pub struct Session {
    seed: u64,
    nav: NavigationState,
    shutter: ShutterChoreographer,
    selector: ModeSelector,
    tracker: CursorTracker,
    reticle: Reticle,
    sim: SceneObjectSimulator,
    portfolio: PortfolioFocus,
    viewport: [f32; 2],
    start_ms: f64,
    last_tick_ms: f64,
    image_requests: Vec<(ObjectId, &'static str)>,
    scratch_cues: Vec<Cue>,
    scratch_events: Vec<ShutterEvent>,
}

impl Session {
    pub fn new(config: SessionConfig, now_ms: f64) -> Self {
        let nav = NavigationState::new();
        let initial = nav.current_mode();
        let mut session = Self {
            seed: config.seed,
            nav,
            shutter: ShutterChoreographer::new(config.timing),
            selector: ModeSelector::new(initial),
            tracker: CursorTracker::new(),
            reticle: Reticle::default(),
            sim: SceneObjectSimulator::new(config.sim),
            portfolio: PortfolioFocus::new(0),
            viewport: [1.0, 1.0],
            start_ms: now_ms,
            last_tick_ms: now_ms,
            image_requests: Vec::new(),
            scratch_cues: Vec::new(),
            scratch_events: Vec::new(),
        };
        session.rebuild_scene(initial);
        // nothing to announce at start-up
        session.scratch_cues.clear();
        log::info!("[session] started in {} (seed {})", initial.label(), session.seed);
        session
    }

    // ---------------- reads ----------------

    #[inline]
    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn shutter(&self) -> &ShutterChoreographer {
        &self.shutter
    }

    pub fn selector(&self) -> &ModeSelector {
        &self.selector
    }

    pub fn tracker(&self) -> &CursorTracker {
        &self.tracker
    }

    pub fn sim(&self) -> &SceneObjectSimulator {
        &self.sim
    }

    pub fn portfolio(&self) -> &PortfolioFocus {
        &self.portfolio
    }

    /// Seconds since the session started; the clock every tween runs on.
    #[inline]
    pub fn session_sec(&self, now_ms: f64) -> f32 {
        ((now_ms - self.start_ms) / 1000.0) as f32
    }

    pub fn aperture(&self, now_ms: f64) -> f32 {
        self.shutter.aperture(now_ms)
    }

    pub fn dial_rotation(&self, now_ms: f64) -> f32 {
        self.selector.rotation(self.session_sec(now_ms))
    }

    pub fn reticle_view(&self, now_ms: f64) -> ReticleView {
        self.reticle
            .view(self.tracker.is_visible(), self.tracker.state(), self.session_sec(now_ms))
    }

    /// Render instances for the active mode. Empty while the iris is fully
    /// shut so the swap is never visible.
    pub fn instances(&self, now_ms: f64) -> impl Iterator<Item = RenderInstance> + '_ {
        let hidden = self.shutter.aperture(now_ms) <= 0.0;
        let t = self.session_sec(now_ms);
        self.sim.instances(t).filter(move |_| !hidden)
    }

    /// Earliest pending choreography deadline.
    pub fn next_deadline(&self) -> Option<f64> {
        self.shutter.next_deadline()
    }

    /// Images the current scene is waiting for. Drained by the browser layer.
    pub fn take_image_requests(&mut self) -> Vec<(ObjectId, &'static str)> {
        std::mem::take(&mut self.image_requests)
    }

    // ---------------- configuration ----------------

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = [width.max(1.0), height.max(1.0)];
    }

    pub fn set_dial(&mut self, dial: DialGeometry) {
        self.selector.set_dial(dial);
    }

    // ---------------- mode changes ----------------

    /// Guarded entry used by every input style.
    pub fn request_mode_change(&mut self, mode: Mode, now_ms: f64, cues: &mut Vec<Cue>) -> ModeRequest {
        let outcome = self.nav.request_mode_change(mode);
        match outcome {
            ModeRequest::Accepted => {
                log::debug!("[session] mode change {:?} -> {:?}", self.nav.current_mode(), mode);
                self.shutter
                    .transition_to(&mut self.nav, mode, now_ms, &mut self.scratch_cues);
                self.flush_cues(cues);
            }
            ModeRequest::Busy => log::debug!("[session] dropped request for {:?}: busy", mode),
            ModeRequest::AlreadyCurrent => {}
        }
        outcome
    }

    /// Drop in-flight choreography and leave the shutter open.
    pub fn cancel_pending(&mut self) {
        self.shutter.cancel(&mut self.nav);
    }

    pub fn toggle_audio(&mut self) -> bool {
        self.nav.toggle_audio()
    }

    // ---------------- frame ----------------

    /// Fire every due choreography step, then advance the simulation, reticle
    /// and dial by the time elapsed since the previous tick.
    pub fn tick(&mut self, now_ms: f64, cues: &mut Vec<Cue>) {
        self.scratch_events.clear();
        self.shutter
            .advance(&mut self.nav, now_ms, &mut self.scratch_cues, &mut self.scratch_events);
        let mut events = std::mem::take(&mut self.scratch_events);
        for event in events.drain(..) {
            if let ShutterEvent::Committed(mode) = event {
                self.rebuild_scene(mode);
                self.selector.on_mode_committed(mode, self.session_sec(now_ms));
            }
        }
        self.scratch_events = events;

        let dt_sec = (((now_ms - self.last_tick_ms) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT_SEC);
        self.last_tick_ms = self.last_tick_ms.max(now_ms);
        let time_sec = self.session_sec(now_ms);
        let cursor = self.nav.cursor();
        let input = FrameInput {
            cursor_ndc: viewport_to_ndc(cursor.x, cursor.y, self.viewport[0], self.viewport[1]),
            time_sec,
            dt_sec,
        };
        self.sim.step(&input);
        // the reticle is placed on the first real pointer position, not the origin
        if self.tracker.has_position() {
            self.reticle.update(cursor, self.nav.is_focused(), dt_sec, time_sec);
        }
        self.flush_cues(cues);
    }

    fn rebuild_scene(&mut self, mode: Mode) {
        let layout = build_scene(mode, self.seed, self.sim.params());
        let count = layout.objects.len();
        self.sim.load(layout.objects);
        self.image_requests = layout.images;
        self.portfolio = PortfolioFocus::new(if mode == Mode::Portfolio { count } else { 0 });
        if mode == Mode::Portfolio {
            self.apply_portfolio_focus();
        }
    }

    /// Push the strip's anchors to the cards and move the strip's focus claim
    /// to the focused card. Every focus move locks with a cue.
    fn apply_portfolio_focus(&mut self) {
        for anchor in self.portfolio.anchors() {
            self.sim.set_anchor(
                object_id(Mode::Portfolio, anchor.index),
                anchor.position,
                anchor.scale,
                anchor.opacity,
            );
        }
        let label = self
            .sim
            .spec(object_id(Mode::Portfolio, self.portfolio.index()))
            .map(|s| s.label.clone());
        self.nav.set_focus(PORTFOLIO_STRIP_TOKEN, true, label);
        self.scratch_cues.push(Cue::FocusLock);
    }

    // ---------------- pointer ----------------

    /// Pointer moved to viewport `(x, y)`. `dom_caps` are the capabilities of
    /// the element under the pointer, `hit` the scene object picked there.
    /// Nothing can be hovered while the iris is shut. In PORTFOLIO, entering a
    /// card moves the strip focus to it.
    pub fn pointer_move(
        &mut self,
        x: f32,
        y: f32,
        dom_caps: Capabilities,
        hit: Option<ObjectId>,
        now_ms: f64,
        cues: &mut Vec<Cue>,
    ) {
        let hit = if self.shutter.aperture(now_ms) <= 0.0 { None } else { hit };
        if let Some(entered) = self.set_hovered(hit, now_ms) {
            self.focus_portfolio_card(entered);
        }
        let object_caps = self
            .sim
            .hovered()
            .and_then(|id| self.sim.spec(id))
            .map(|s| s.caps)
            .unwrap_or(Capabilities::NONE);
        let caps = dom_caps.union(object_caps);
        self.tracker.on_pointer_move(&mut self.nav, x, y, caps);
        if let Some(mode) = self.selector.on_drag_move(&self.nav, x, y) {
            self.request_mode_change(mode, now_ms, cues);
        }
        self.flush_cues(cues);
    }

    pub fn pointer_leave(&mut self, now_ms: f64) {
        self.tracker.on_pointer_leave();
        self.set_hovered(None, now_ms);
        self.selector.on_drag_end();
    }

    pub fn pointer_enter(&mut self) {
        self.tracker.on_pointer_enter();
    }

    /// Returns true if the press started a dial drag. A press on a portfolio
    /// card brings that card into focus.
    pub fn pointer_down(&mut self, x: f32, y: f32, cues: &mut Vec<Cue>) -> bool {
        if self.selector.on_drag_start(&self.nav, x, y) {
            return true;
        }
        if let Some(id) = self.sim.hovered() {
            self.focus_portfolio_card(id);
            self.flush_cues(cues);
        }
        false
    }

    /// Bring portfolio card `id` into focus. Ignored outside PORTFOLIO and
    /// while a transition is running.
    fn focus_portfolio_card(&mut self, id: ObjectId) {
        if self.nav.current_mode() != Mode::Portfolio || self.nav.is_transitioning() {
            return;
        }
        let Some(index) = id.checked_sub(object_id(Mode::Portfolio, 0)) else {
            return;
        };
        if self.portfolio.select(index as usize) {
            self.apply_portfolio_focus();
        }
    }

    pub fn pointer_up(&mut self) {
        self.selector.on_drag_end();
    }

    pub fn dial_sector_click(&mut self, index: usize, now_ms: f64, cues: &mut Vec<Cue>) -> bool {
        match self.selector.on_sector_click(&self.nav, index) {
            Some(mode) => self.request_mode_change(mode, now_ms, cues) == ModeRequest::Accepted,
            None => false,
        }
    }

    /// One wheel event at viewport `(x, y)`. Over the dial it always steps
    /// modes; elsewhere in PORTFOLIO it steps the focused card instead.
    pub fn wheel(&mut self, x: f32, y: f32, delta_y: f64, now_ms: f64, cues: &mut Vec<Cue>) -> bool {
        let over_dial = self.selector.is_over_dial(x, y);
        if !over_dial && self.nav.current_mode() == Mode::Portfolio {
            if self.nav.is_transitioning() || delta_y == 0.0 {
                return false;
            }
            let changed = self.portfolio.step(if delta_y > 0.0 { 1 } else { -1 });
            if changed {
                self.apply_portfolio_focus();
                self.flush_cues(cues);
            }
            return changed;
        }
        match self.selector.on_wheel(&self.nav, delta_y) {
            Some(mode) => self.request_mode_change(mode, now_ms, cues) == ModeRequest::Accepted,
            None => false,
        }
    }

    // ---------------- keyboard ----------------

    /// Handle a key. Returns the intent so the caller can react to the
    /// browser-side ones (HUD toggle, default-action suppression).
    pub fn key(&mut self, key: &str, now_ms: f64, cues: &mut Vec<Cue>) -> Option<KeyIntent> {
        let intent = key_intent(key)?;
        match intent {
            KeyIntent::Step(direction) => {
                if let Some(mode) = self.selector.on_step(&self.nav, direction) {
                    self.request_mode_change(mode, now_ms, cues);
                }
            }
            KeyIntent::Select(mode) => {
                self.request_mode_change(mode, now_ms, cues);
            }
            KeyIntent::ToggleAudio => {
                self.toggle_audio();
            }
            KeyIntent::ToggleHud => {}
        }
        Some(intent)
    }

    // ---------------- resources ----------------

    pub fn mark_loaded(&mut self, id: ObjectId, now_ms: f64) {
        let t = self.session_sec(now_ms);
        self.sim.mark_loaded(id, t);
    }

    // ---------------- internals ----------------

    /// Returns the object the pointer just entered, if any.
    fn set_hovered(&mut self, hit: Option<ObjectId>, now_ms: f64) -> Option<ObjectId> {
        let change = self.sim.set_hovered(hit, self.session_sec(now_ms));
        if let Some(left) = change.left {
            self.nav.set_focus(FocusToken(left), false, None);
        }
        if let Some(entered) = change.entered {
            let label = self.sim.spec(entered).map(|s| s.label.clone());
            if self.nav.set_focus(FocusToken(entered), true, label) {
                self.scratch_cues.push(Cue::FocusLock);
            }
        }
        change.entered
    }

    fn flush_cues(&mut self, out: &mut Vec<Cue>) {
        if self.nav.audio_enabled() {
            out.append(&mut self.scratch_cues);
        } else {
            self.scratch_cues.clear();
        }
    }
}
