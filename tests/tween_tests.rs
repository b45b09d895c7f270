mod common;

use common::camera_core::tween::{approach_alpha, lerp, Easing, Tween};

#[test]
fn every_easing_pins_its_endpoints() {
    for e in [
        Easing::Linear,
        Easing::Power2In,
        Easing::Power2Out,
        Easing::BackOut(1.7),
        Easing::ElasticOut(0.5),
    ] {
        assert!(e.apply(0.0).abs() < 1e-6, "{:?} at 0", e);
        assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", e);
        // input is clamped
        assert!((e.apply(2.0) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn back_and_elastic_overshoot() {
    let peak = (1..100)
        .map(|i| Easing::BackOut(2.0).apply(i as f32 / 100.0))
        .fold(0.0f32, f32::max);
    assert!(peak > 1.0);
    let peak = (1..100)
        .map(|i| Easing::ElasticOut(0.5).apply(i as f32 / 100.0))
        .fold(0.0f32, f32::max);
    assert!(peak > 1.0);
}

#[test]
fn retarget_continues_from_the_current_value() {
    let mut t = Tween::settled(0.0, Easing::Linear, 1.0);
    t.retarget(10.0, 0.0);
    assert!((t.value(0.5) - 5.0).abs() < 1e-5);
    t.retarget(0.0, 0.5);
    assert!((t.value(0.5) - 5.0).abs() < 1e-5);
    assert!((t.value(1.5) - 0.0).abs() < 1e-5);
    assert!(t.is_done(1.5));
    assert_eq!(t.target(), 0.0);
}

#[test]
fn retarget_to_same_target_keeps_timing() {
    let mut t = Tween::settled(0.0, Easing::Linear, 1.0);
    t.retarget(1.0, 0.0);
    t.retarget(1.0, 0.9);
    assert!((t.value(1.0) - 1.0).abs() < 1e-5);
}

#[test]
fn approach_alpha_is_frame_rate_independent() {
    assert_eq!(approach_alpha(0.0, 0.1), 0.0);
    assert_eq!(approach_alpha(0.016, 0.0), 1.0);
    // two half steps land where one full step does
    let a = approach_alpha(0.02, 0.1);
    let half = approach_alpha(0.01, 0.1);
    let two_halves = 1.0 - (1.0 - half) * (1.0 - half);
    assert!((a - two_halves).abs() < 1e-6);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
}
