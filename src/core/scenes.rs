//! Per-mode object sets. Every layout is rebuilt from the session seed when
//! its mode is committed, so nothing survives a mode change.

use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::PI;

use super::constants::{CARD_SPACING, HOME_FRAME_COUNT};
use super::cursor::Capabilities;
use super::mode::Mode;
use super::sim::{Motion, ObjectId, ObjectSpec, ObjectState, ResourceState, SimParams};

/// Portfolio cards: title and the remote image gating each card.
pub const PORTFOLIO_CARDS: [(&str, [f32; 3], &str); 6] = [
    ("ETERNAL VOWS", [0.831, 0.686, 0.216], "https://images.unsplash.com/photo-1519741497674-611481863552?w=800&h=600&fit=crop"),
    ("MIDNIGHT BLOOM", [0.608, 0.349, 0.714], "https://images.unsplash.com/photo-1606216794074-735e91aa2c92?w=800&h=600&fit=crop"),
    ("GOLDEN HOUR", [0.902, 0.494, 0.133], "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=800&h=600&fit=crop"),
    ("URBAN ELEGANCE", [0.204, 0.596, 0.859], "https://images.unsplash.com/photo-1465495976277-4387d4b0b4c6?w=800&h=600&fit=crop"),
    ("TIMELESS LOVE", [0.906, 0.298, 0.235], "https://images.unsplash.com/photo-1529636798458-92182e662485?w=800&h=600&fit=crop"),
    ("SILK & SHADOWS", [0.102, 0.737, 0.612], "https://images.unsplash.com/photo-1591604466107-ec97de577aff?w=800&h=600&fit=crop"),
];

const FILM_REELS: [(&str, [f32; 3]); 5] = [
    ("WHISPERS OF FOREVER", [0.788, 0.635, 0.153]),
    ("DAWN CEREMONY", [0.545, 0.271, 0.075]),
    ("SILK DREAMS", [0.290, 0.055, 0.306]),
    ("GOLDEN PROMISES", [0.173, 0.243, 0.314]),
    ("ETERNAL FRAMES", [0.102, 0.322, 0.463]),
];

const SERVICE_PARTS: [(&str, [f32; 3], [f32; 3]); 5] = [
    ("VISION & FRAMING", [0.0, 0.0, 1.5], [0.204, 0.596, 0.859]),
    ("CINEMATOGRAPHY", [0.0, 0.0, 0.0], [0.608, 0.349, 0.714]),
    ("TIMING & EMOTION", [-2.2, 1.4, 0.4], [0.906, 0.298, 0.235]),
    ("LIGHTING MASTERY", [0.0, 2.4, 0.2], [0.953, 0.612, 0.071]),
    ("ALBUMS & DELIVERY", [2.4, -0.4, 0.3], [0.102, 0.737, 0.612]),
];

const TEAM: [&str; 3] = ["ALEX CHEN", "MAYA PATEL", "JAMES WRIGHT"];

const CONTACT_PANELS: [(&str, [f32; 3]); 3] = [
    ("NAME", [0.0, 1.3, 0.1]),
    ("EMAIL", [0.0, 0.0, 0.1]),
    ("MESSAGE", [0.0, -1.3, 0.1]),
];

pub struct SceneLayout {
    pub mode: Mode,
    pub objects: Vec<(ObjectSpec, ObjectState)>,
    /// Objects waiting on a remote image, with the image URL.
    pub images: Vec<(ObjectId, &'static str)>,
}

/// Stable across modes so focus tokens never collide.
#[inline]
pub fn object_id(mode: Mode, index: usize) -> ObjectId {
    (mode.index() as u32) * 1000 + index as u32
}

pub fn build_scene(mode: Mode, seed: u64, params: &SimParams) -> SceneLayout {
    // one independent stream per mode
    let mix = seed ^ (mode.index() as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut rng = StdRng::seed_from_u64(mix);
    let mut layout = SceneLayout {
        mode,
        objects: Vec::new(),
        images: Vec::new(),
    };
    let tween = params.hover_tween_sec;
    match mode {
        Mode::Home => {
            for i in 0..HOME_FRAME_COUNT {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 20.0,
                    (rng.gen::<f32>() - 0.5) * 15.0,
                    (rng.gen::<f32>() - 0.5) * 10.0 - 5.0,
                );
                let spec = ObjectSpec {
                    id: object_id(mode, i),
                    label: format!("Frame {}", i + 1),
                    caps: Capabilities::INTERACTIVE,
                    motion: Motion::Floating,
                    color: hsl_to_rgb(0.08 + rng.gen::<f32>() * 0.08, 0.25, 0.55 + rng.gen::<f32>() * 0.2),
                    half_size: [0.6, 0.45],
                    base_scale: 0.5 + rng.gen::<f32>() * 0.5,
                    rest_rotation: Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, rng.gen::<f32>() * PI),
                    phase: i as f32,
                };
                layout.objects.push((spec, ObjectState::at(position, ResourceState::Ready, tween)));
            }
        }
        Mode::Portfolio => {
            let mid = (PORTFOLIO_CARDS.len() as f32 - 1.0) * 0.5;
            for (i, (title, color, url)) in PORTFOLIO_CARDS.iter().enumerate() {
                let id = object_id(mode, i);
                let position = Vec3::new((i as f32 - mid) * CARD_SPACING, 0.0, 0.0);
                let spec = anchored(id, title, *color, [1.2, 0.9], 0.0, &mut rng);
                layout.objects.push((spec, ObjectState::at(position, ResourceState::Pending, tween)));
                layout.images.push((id, *url));
            }
        }
        Mode::Films => {
            let mid = (FILM_REELS.len() as f32 - 1.0) * 0.5;
            for (i, (title, color)) in FILM_REELS.iter().enumerate() {
                let position = Vec3::new((i as f32 - mid) * 2.6, 0.3, -1.0);
                let spec = anchored(object_id(mode, i), title, *color, [1.1, 0.62], 0.0, &mut rng);
                layout.objects.push((spec, ObjectState::at(position, ResourceState::Ready, tween)));
            }
        }
        Mode::Services => {
            for (i, (name, pos, color)) in SERVICE_PARTS.iter().enumerate() {
                let spec = anchored(object_id(mode, i), name, *color, [0.7, 0.7], 0.15, &mut rng);
                layout
                    .objects
                    .push((spec, ObjectState::at(Vec3::from(*pos), ResourceState::Ready, tween)));
            }
        }
        Mode::About => {
            for (i, name) in TEAM.iter().enumerate() {
                let position = Vec3::new((i as f32 - 1.0) * 3.2, 0.0, 0.0);
                let spec = anchored(object_id(mode, i), name, [0.92, 0.88, 0.80], [1.0, 1.3], 0.05, &mut rng);
                layout.objects.push((spec, ObjectState::at(position, ResourceState::Ready, tween)));
            }
        }
        Mode::Contact => {
            for (i, (field, pos)) in CONTACT_PANELS.iter().enumerate() {
                let mut spec = anchored(object_id(mode, i), field, [0.29, 0.87, 0.50], [2.6, 0.45], 0.0, &mut rng);
                spec.caps = Capabilities::CAPTURE;
                layout
                    .objects
                    .push((spec, ObjectState::at(Vec3::from(*pos), ResourceState::Ready, tween)));
            }
        }
    }
    log::debug!("[scene] {} built with {} objects", mode.label(), layout.objects.len());
    layout
}

fn anchored(
    id: ObjectId,
    label: &str,
    color: [f32; 3],
    half_size: [f32; 2],
    tilt: f32,
    rng: &mut StdRng,
) -> ObjectSpec {
    ObjectSpec {
        id,
        label: label.to_string(),
        caps: Capabilities::INTERACTIVE,
        motion: Motion::Anchored,
        color,
        half_size,
        base_scale: 1.0,
        rest_rotation: Vec3::new(0.0, (rng.gen::<f32>() - 0.5) * tilt, 0.0),
        phase: rng.gen::<f32>() * 2.0 * PI,
    }
}

/// h, s, l in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h.rem_euclid(1.0)) * 6.0;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c * 0.5;
    [r + m, g + m, b + m]
}
