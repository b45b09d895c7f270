//! Turns dial drags, dial clicks and wheel steps into one normalized
//! "change to mode X" intent. Every input style goes through the same guard,
//! so nothing comes out of here while a transition is in flight.

use super::constants::{DIAL_ELASTIC_PERIOD, DIAL_SETTLE_SEC};
use super::mode::{Mode, MODE_COUNT};
use super::nav::{ModeRequest, NavigationState};
use super::tween::{Easing, Tween};

/// Dial position in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialGeometry {
    pub center: [f32; 2],
    pub radius: f32,
}

impl DialGeometry {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.center[0];
        let dy = y - self.center[1];
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Pointer angle around the centre in degrees, screen orientation (y down).
    pub fn angle_deg(&self, x: f32, y: f32) -> f32 {
        (y - self.center[1]).atan2(x - self.center[0]).to_degrees()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct DragState {
    active: bool,
    start_angle: f32,
}

#[derive(Clone, Debug)]
pub struct ModeSelector {
    dial: Option<DialGeometry>,
    drag: DragState,
    rotation: Tween,
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

impl ModeSelector {
    pub fn new(initial: Mode) -> Self {
        Self {
            dial: None,
            drag: DragState::default(),
            rotation: Tween::settled(
                initial.dial_rotation(),
                Easing::ElasticOut(DIAL_ELASTIC_PERIOD),
                DIAL_SETTLE_SEC,
            ),
        }
    }

    pub fn set_dial(&mut self, dial: DialGeometry) {
        self.dial = Some(dial);
    }

    pub fn dial(&self) -> Option<DialGeometry> {
        self.dial
    }

    pub fn is_over_dial(&self, x: f32, y: f32) -> bool {
        self.dial.map(|d| d.contains(x, y)).unwrap_or(false)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Displayed dial rotation in degrees.
    pub fn rotation(&self, now_sec: f32) -> f32 {
        self.rotation.value(now_sec)
    }

    /// Spin the dial so `mode` sits under the notch.
    pub fn on_mode_committed(&mut self, mode: Mode, now_sec: f32) {
        self.rotation.retarget(mode.dial_rotation(), now_sec);
    }

    // ---------------- dial drag ----------------

    /// Returns true if the press landed on the dial and a drag began.
    pub fn on_drag_start(&mut self, nav: &NavigationState, x: f32, y: f32) -> bool {
        let Some(dial) = self.dial else {
            return false;
        };
        if !dial.contains(x, y) {
            return false;
        }
        self.drag = DragState {
            active: true,
            start_angle: dial.angle_deg(x, y) - nav.current_mode().dial_rotation(),
        };
        true
    }

    pub fn on_drag_move(&mut self, nav: &NavigationState, x: f32, y: f32) -> Option<Mode> {
        if !self.drag.active {
            return None;
        }
        let dial = self.dial?;
        let rotation = dial.angle_deg(x, y) - self.drag.start_angle;
        let candidate = Mode::from_index(nearest_sector(rotation) as i64);
        guard(nav, candidate)
    }

    pub fn on_drag_end(&mut self) {
        self.drag.active = false;
    }

    // ---------------- dial click ----------------

    pub fn on_sector_click(&self, nav: &NavigationState, index: usize) -> Option<Mode> {
        if index >= MODE_COUNT {
            return None;
        }
        guard(nav, Mode::from_index(index as i64))
    }

    // ---------------- wheel ----------------

    /// One step per event by the sign of `delta_y`, wrapping at both ends.
    /// A zero delta (horizontal-only scroll) does nothing.
    pub fn on_wheel(&self, nav: &NavigationState, delta_y: f64) -> Option<Mode> {
        let direction = if delta_y > 0.0 {
            1
        } else if delta_y < 0.0 {
            -1
        } else {
            return None;
        };
        guard(nav, nav.current_mode().step(direction))
    }

    /// Keyboard and other discrete steppers share the wheel's stepping rule.
    pub fn on_step(&self, nav: &NavigationState, direction: i32) -> Option<Mode> {
        if direction == 0 {
            return None;
        }
        guard(nav, nav.current_mode().step(direction))
    }
}

/// Sector index nearest to a dial rotation given in degrees.
pub fn nearest_sector(rotation_deg: f32) -> usize {
    let sector = Mode::sector_degrees();
    let normalized = (-rotation_deg).rem_euclid(360.0);
    ((normalized / sector).round() as usize) % MODE_COUNT
}

#[inline]
fn guard(nav: &NavigationState, candidate: Mode) -> Option<Mode> {
    match nav.request_mode_change(candidate) {
        ModeRequest::Accepted => Some(candidate),
        ModeRequest::AlreadyCurrent | ModeRequest::Busy => None,
    }
}
