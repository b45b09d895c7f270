use crate::core::cue::{Chirp, Cue};
use web_sys as web;

// exponential ramps cannot reach zero
const GAIN_FLOOR: f32 = 0.01;

/// Plays cues through one lazily created `AudioContext`.
///
/// Every failure (no context, autoplay suspension, node creation) is logged
/// once at `warn` and otherwise swallowed; cues never report back.
#[derive(Default)]
pub struct CuePlayer {
    ctx: Option<web::AudioContext>,
    master: Option<web::GainNode>,
    failed: bool,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Option<web::GainNode> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Some(g)
        }
        Err(e) => {
            log::warn!("{} GainNode error: {:?}", label, e);
            None
        }
    }
}

impl CuePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a suspended context; browsers only allow this from a user gesture.
    pub fn resume(&mut self) {
        if let Some(ctx) = self.context() {
            _ = ctx.resume();
        }
    }

    pub fn play_all(&mut self, cues: &[Cue]) {
        for &cue in cues {
            self.play(cue);
        }
    }

    pub fn play(&mut self, cue: Cue) {
        let Some(ctx) = self.context() else {
            return;
        };
        let Some(master) = self.master.clone() else {
            return;
        };
        let now = ctx.current_time();
        for c in cue.chirps() {
            play_chirp(&ctx, &master, now, &c);
        }
        log::debug!("[audio] {}", cue.name());
    }

    fn context(&mut self) -> Option<web::AudioContext> {
        if self.ctx.is_none() && !self.failed {
            match web::AudioContext::new() {
                Ok(ctx) => {
                    self.master = create_gain(&ctx, 0.8, "Master");
                    if let Some(m) = &self.master {
                        _ = m.connect_with_audio_node(&ctx.destination());
                    }
                    self.ctx = Some(ctx);
                }
                Err(e) => {
                    log::warn!("AudioContext error: {:?}", e);
                    self.failed = true;
                }
            }
        }
        self.ctx.clone()
    }
}

fn play_chirp(audio_ctx: &web::AudioContext, master: &web::GainNode, now: f64, chirp: &Chirp) {
    let Ok(src) = web::OscillatorNode::new(audio_ctx) else {
        return;
    };
    let Some(g) = create_gain(audio_ctx, 0.0, "Cue") else {
        return;
    };
    src.set_type(web::OscillatorType::Sine);
    let t0 = now + chirp.offset_sec;
    let t1 = t0 + chirp.duration_sec;
    _ = src.frequency().set_value_at_time(chirp.from_hz, t0);
    if (chirp.to_hz - chirp.from_hz).abs() > f32::EPSILON {
        _ = src
            .frequency()
            .exponential_ramp_to_value_at_time(chirp.to_hz.max(1.0), t1);
    }
    _ = g.gain().set_value_at_time(chirp.gain, t0);
    _ = g.gain().exponential_ramp_to_value_at_time(GAIN_FLOOR, t1);
    _ = src.connect_with_audio_node(&g);
    _ = g.connect_with_audio_node(master);
    _ = src.start_with_when(t0);
    _ = src.stop_with_when(t1);
}
