//! Easing curves and small time-based tweens shared by the choreography,
//! the dial, hover emphasis and the reticle.

use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    Power2In,
    Power2Out,
    /// Overshoot amount as in `back.out(s)`.
    BackOut(f32),
    /// Period as in `elastic.out(1, p)`.
    ElasticOut(f32),
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2In => t * t * t,
            Easing::Power2Out => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::BackOut(s) => {
                let u = t - 1.0;
                u * u * ((s + 1.0) * u + s) + 1.0
            }
            Easing::ElasticOut(period) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = period / 4.0;
                2.0_f32.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / period).sin() + 1.0
            }
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Exponential approach factor for a time constant, frame-rate independent.
#[inline]
pub fn approach_alpha(dt_sec: f32, tau_sec: f32) -> f32 {
    if tau_sec <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt_sec.max(0.0) / tau_sec).exp()
}

/// Scalar tween from the value at retarget time toward `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start_sec: f32,
    duration_sec: f32,
    easing: Easing,
}

impl Tween {
    pub fn settled(value: f32, easing: Easing, duration_sec: f32) -> Self {
        Self {
            from: value,
            to: value,
            start_sec: 0.0,
            duration_sec,
            easing,
        }
    }

    pub fn value(&self, now_sec: f32) -> f32 {
        if self.duration_sec <= 0.0 {
            return self.to;
        }
        let t = (now_sec - self.start_sec) / self.duration_sec;
        lerp(self.from, self.to, self.easing.apply(t))
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_done(&self, now_sec: f32) -> bool {
        now_sec - self.start_sec >= self.duration_sec
    }

    /// Start a new leg toward `to` from wherever the tween currently is.
    /// Retargeting to the current target is a no-op so the leg keeps its timing.
    pub fn retarget(&mut self, to: f32, now_sec: f32) {
        if (to - self.to).abs() <= f32::EPSILON {
            return;
        }
        self.from = self.value(now_sec);
        self.to = to;
        self.start_sec = now_sec;
    }
}
