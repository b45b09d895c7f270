// The main crate is wasm-only, so host tests mount the browser-free core directly.
#![allow(dead_code)]

#[path = "../../src/core/mod.rs"]
pub mod camera_core;

use camera_core::cue::Cue;
use camera_core::{Session, SessionConfig};

/// A session started at t = 0 with default tuning.
pub fn session() -> Session {
    Session::new(SessionConfig::default(), 0.0)
}

/// Tick `session` at `now_ms` and return the cues it emitted.
pub fn tick(session: &mut Session, now_ms: f64) -> Vec<Cue> {
    let mut cues = Vec::new();
    session.tick(now_ms, &mut cues);
    cues
}
