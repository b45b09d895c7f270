mod common;

use common::camera_core::constants::HOME_FRAME_COUNT;
use common::camera_core::cursor::Capabilities;
use common::camera_core::mode::{Mode, MODES};
use common::camera_core::scenes::{build_scene, hsl_to_rgb, object_id, PORTFOLIO_CARDS};
use common::camera_core::sim::{Motion, ResourceState, SimParams};
use std::collections::HashSet;

#[test]
fn every_mode_has_its_object_set() {
    let params = SimParams::default();
    let counts: Vec<usize> = MODES
        .iter()
        .map(|&m| build_scene(m, 1, &params).objects.len())
        .collect();
    assert_eq!(counts, vec![HOME_FRAME_COUNT, 6, 5, 5, 3, 3]);
}

#[test]
fn only_home_frames_float() {
    let params = SimParams::default();
    for &mode in MODES.iter() {
        let layout = build_scene(mode, 3, &params);
        assert_eq!(layout.mode, mode);
        for (spec, _) in &layout.objects {
            let expected = if mode == Mode::Home {
                Motion::Floating
            } else {
                Motion::Anchored
            };
            assert_eq!(spec.motion, expected, "{:?} {}", mode, spec.label);
            assert!(spec.caps.interactive);
        }
    }
}

#[test]
fn layouts_are_deterministic_per_seed() {
    let params = SimParams::default();
    let a = build_scene(Mode::Home, 42, &params);
    let b = build_scene(Mode::Home, 42, &params);
    let c = build_scene(Mode::Home, 43, &params);
    assert_eq!(a.objects, b.objects);
    assert_ne!(a.objects, c.objects);
}

#[test]
fn home_frames_start_inside_the_scatter_volume() {
    let layout = build_scene(Mode::Home, 9, &SimParams::default());
    for (_, state) in &layout.objects {
        let p = state.position;
        assert!(p.x.abs() <= 10.0 && p.y.abs() <= 7.5);
        assert!((-10.0..=0.0).contains(&p.z));
        assert_eq!(state.resource, ResourceState::Ready);
    }
}

#[test]
fn portfolio_cards_wait_for_their_images() {
    let layout = build_scene(Mode::Portfolio, 5, &SimParams::default());
    assert_eq!(layout.images.len(), PORTFOLIO_CARDS.len());
    for (i, (spec, state)) in layout.objects.iter().enumerate() {
        assert_eq!(state.resource, ResourceState::Pending);
        assert_eq!(spec.label, PORTFOLIO_CARDS[i].0);
        assert_eq!(layout.images[i], (spec.id, PORTFOLIO_CARDS[i].2));
    }
    assert!(build_scene(Mode::Films, 5, &SimParams::default()).images.is_empty());
}

#[test]
fn contact_panels_are_capture_targets() {
    let layout = build_scene(Mode::Contact, 5, &SimParams::default());
    let labels: Vec<_> = layout.objects.iter().map(|(s, _)| s.label.as_str()).collect();
    assert_eq!(labels, vec!["NAME", "EMAIL", "MESSAGE"]);
    assert!(layout
        .objects
        .iter()
        .all(|(s, _)| s.caps == Capabilities::CAPTURE));
}

#[test]
fn object_ids_never_collide_across_modes() {
    let params = SimParams::default();
    let mut seen = HashSet::new();
    for &mode in MODES.iter() {
        for (spec, _) in build_scene(mode, 11, &params).objects {
            assert!(seen.insert(spec.id), "duplicate id {}", spec.id);
        }
    }
    assert_eq!(object_id(Mode::Portfolio, 2), 1002);
}

#[test]
fn hsl_conversion_hits_the_primaries() {
    assert_eq!(hsl_to_rgb(0.0, 0.0, 0.5), [0.5, 0.5, 0.5]);
    assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    assert!((green[1] - 1.0).abs() < 1e-5 && green[0].abs() < 1e-5);
}
