//! Focus reticle model: a pair of smoothed followers chasing the cursor and
//! an inner ring that tightens while something holds focus.

use super::constants::{
    RETICLE_FOCUS_SCALE, RETICLE_SCALE_TWEEN_SEC, RETICLE_TAU_SEC, RETICLE_TRAIL_TAU_SEC,
};
use super::cursor::CursorState;
use super::nav::CursorPosition;
use super::tween::{approach_alpha, Easing, Tween};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReticleView {
    pub visible: bool,
    pub reticle: [f32; 2],
    pub trail: [f32; 2],
    pub inner_scale: f32,
    pub focused: bool,
    pub state: CursorState,
}

#[derive(Clone, Debug)]
pub struct Reticle {
    reticle: [f32; 2],
    trail: [f32; 2],
    inner_scale: Tween,
    initialized: bool,
    focused: bool,
}

impl Default for Reticle {
    fn default() -> Self {
        Self {
            reticle: [0.0, 0.0],
            trail: [0.0, 0.0],
            inner_scale: Tween::settled(1.0, Easing::Power2Out, RETICLE_SCALE_TWEEN_SEC),
            initialized: false,
            focused: false,
        }
    }
}

impl Reticle {
    pub fn update(&mut self, cursor: CursorPosition, focused: bool, dt_sec: f32, now_sec: f32) {
        let target = [cursor.x, cursor.y];
        if !self.initialized {
            // first sighting snaps instead of sliding in from the corner
            self.reticle = target;
            self.trail = target;
            self.initialized = true;
        } else {
            follow(&mut self.reticle, target, approach_alpha(dt_sec, RETICLE_TAU_SEC));
            follow(&mut self.trail, target, approach_alpha(dt_sec, RETICLE_TRAIL_TAU_SEC));
        }
        if focused != self.focused {
            self.focused = focused;
            let (scale, easing) = if focused {
                (RETICLE_FOCUS_SCALE, Easing::BackOut(2.0))
            } else {
                (1.0, Easing::Power2Out)
            };
            self.inner_scale = Tween::settled(self.inner_scale.value(now_sec), easing, RETICLE_SCALE_TWEEN_SEC);
            self.inner_scale.retarget(scale, now_sec);
        }
    }

    pub fn view(&self, visible: bool, state: CursorState, now_sec: f32) -> ReticleView {
        ReticleView {
            visible: visible && self.initialized,
            reticle: self.reticle,
            trail: self.trail,
            inner_scale: self.inner_scale.value(now_sec),
            focused: self.focused,
            state,
        }
    }
}

#[inline]
fn follow(pos: &mut [f32; 2], target: [f32; 2], alpha: f32) {
    pos[0] += (target[0] - pos[0]) * alpha;
    pos[1] += (target[1] - pos[1]) * alpha;
}
