use smallvec::{smallvec, SmallVec};

/// Named audio cues. Playback is fire-and-forget and owned by the browser layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Click,
    ShutterClose,
    ShutterOpen,
    FocusLock,
}

/// One sine sweep with an exponential decay. Times in seconds from the cue start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chirp {
    pub offset_sec: f64,
    pub duration_sec: f64,
    pub from_hz: f32,
    pub to_hz: f32,
    pub gain: f32,
}

const fn chirp(offset_sec: f64, duration_sec: f64, from_hz: f32, to_hz: f32, gain: f32) -> Chirp {
    Chirp {
        offset_sec,
        duration_sec,
        from_hz,
        to_hz,
        gain,
    }
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::Click => "click",
            Cue::ShutterClose => "shutterClose",
            Cue::ShutterOpen => "shutterOpen",
            Cue::FocusLock => "focusLock",
        }
    }

    /// Synthesis recipe for the cue.
    pub fn chirps(self) -> SmallVec<[Chirp; 2]> {
        match self {
            // mechanical detent
            Cue::Click => smallvec![chirp(0.0, 0.05, 2000.0, 100.0, 0.3)],
            // mirror up, then curtain
            Cue::ShutterClose => smallvec![
                chirp(0.0, 0.03, 3000.0, 50.0, 0.4),
                chirp(0.05, 0.03, 4000.0, 80.0, 0.5),
            ],
            Cue::ShutterOpen => smallvec![chirp(0.0, 0.06, 1200.0, 200.0, 0.2)],
            Cue::FocusLock => smallvec![
                chirp(0.0, 0.1, 2400.0, 2400.0, 0.15),
                chirp(0.12, 0.1, 2400.0, 2400.0, 0.15),
            ],
        }
    }
}
