// Sanity checks on tuning values. Both constant files are included directly
// because the main crate only builds for wasm.

#![allow(dead_code)]
#![allow(clippy::assertions_on_constants)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
fn shutter_phases_add_up_to_the_documented_sequence() {
    assert_eq!(SHUTTER_CLOSE_MS, 200.0);
    assert_eq!(SHUTTER_SWAP_PAUSE_MS, 150.0);
    assert_eq!(SHUTTER_OPEN_MS, 300.0);
    assert_eq!(SHUTTER_CLOSE_MS + SHUTTER_SWAP_PAUSE_MS + SHUTTER_OPEN_MS, 650.0);
}

#[test]
fn follow_time_constants_order_reticle_before_trail() {
    assert!(RETICLE_TAU_SEC > 0.0);
    assert!(RETICLE_TRAIL_TAU_SEC > RETICLE_TAU_SEC);
    assert!(RETICLE_FOCUS_SCALE < 1.0);
}

#[test]
fn simulation_bounds_are_sane() {
    assert!(REPEL_RADIUS > 0.0 && REPEL_GAIN > 0.0);
    assert!(REPEL_MIN_STEP > 0.0 && REPEL_MIN_STEP < REPEL_GAIN * REPEL_RADIUS);
    assert!(SAFE_FRACTION.iter().all(|f| *f > 0.0 && *f <= 1.0));
    assert!(SAFE_DEPTH[0] < SAFE_DEPTH[1]);
    assert!(EMISSIVE_IDLE < EMISSIVE_HOVER);
    assert!(DIAL_ZONE_RADIUS > 0.0 && DIAL_ZONE_CENTER[0].abs() <= 1.0 && DIAL_ZONE_CENTER[1].abs() <= 1.0);
}

#[test]
fn portfolio_strip_focus_sits_in_front() {
    assert!(CARD_FOCUS_Z > 0.0);
    assert!(CARD_FOCUS_SCALE > 1.0);
    assert!(CARD_SPACING > 2.0 * 1.2 * CARD_FOCUS_SCALE * 0.5);
}

#[test]
fn browser_constants() {
    assert!(CAMERA_Z > 0.0);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(VIGNETTE_STRENGTH_ABOUT > VIGNETTE_STRENGTH);
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_THRESHOLD < 1.0);
    let ids = [
        CANVAS_ID, DIAL_ID, DIAL_FACE_ID, RETICLE_ID, RETICLE_TRAIL_ID, RETICLE_INNER_ID,
        HUD_ID, HUD_MODE_ID, HUD_FOCUS_ID, HUD_REC_ID, HUD_AUDIO_ID,
    ];
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}
