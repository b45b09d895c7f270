mod common;

use common::camera_core::cursor::Capabilities;
use common::camera_core::scenes::build_scene;
use common::camera_core::mode::Mode;
use common::camera_core::sim::*;
use glam::{Vec2, Vec3};

fn floating(id: ObjectId) -> ObjectSpec {
    ObjectSpec {
        id,
        label: format!("obj {}", id),
        caps: Capabilities::INTERACTIVE,
        motion: Motion::Floating,
        color: [1.0, 1.0, 1.0],
        half_size: [0.5, 0.5],
        base_scale: 1.0,
        rest_rotation: Vec3::ZERO,
        phase: 0.0,
    }
}

fn no_zones() -> SimParams {
    SimParams {
        zones: Vec::new(),
        ..SimParams::default()
    }
}

fn frame(cursor_ndc: Vec2, i: usize) -> FrameInput {
    FrameInput {
        cursor_ndc,
        time_sec: i as f32 / 60.0,
        dt_sec: 1.0 / 60.0,
    }
}

fn within_safe(p: Vec3, params: &SimParams) -> bool {
    let half = params.safe_half_extent();
    p.x.abs() <= half.x + 1e-5
        && p.y.abs() <= half.y + 1e-5
        && p.z >= params.safe_depth[0] - 1e-5
        && p.z <= params.safe_depth[1] + 1e-5
}

#[test]
fn repelled_object_ends_outside_the_radius_and_inside_the_safe_region() {
    let params = no_zones();
    let mut sim = SceneObjectSimulator::new(params.clone());
    sim.load(vec![(
        floating(1),
        ObjectState::at(Vec3::new(1.0, 0.5, 0.0), ResourceState::Ready, 0.3),
    )]);
    let cursor = params.project_cursor(Vec2::ZERO);
    for i in 0..2000 {
        sim.step(&frame(Vec2::ZERO, i));
        let p = sim.state(1).map(|s| s.position).unwrap_or_default();
        assert!(within_safe(p, &params), "left the safe region at frame {}", i);
    }
    let p = sim.state(1).map(|s| s.position).unwrap_or_default();
    assert!(p.distance(cursor) >= params.repel_radius - 1e-4);
}

#[test]
fn push_against_the_edge_is_clamped_every_frame() {
    let params = no_zones();
    let mut sim = SceneObjectSimulator::new(params.clone());
    sim.load(vec![(
        floating(1),
        ObjectState::at(Vec3::new(8.9, 7.9, 0.0), ResourceState::Ready, 0.3),
    )]);
    for i in 0..600 {
        sim.step(&frame(Vec2::new(0.85, 0.75), i));
        let p = sim.state(1).map(|s| s.position).unwrap_or_default();
        assert!(within_safe(p, &params));
    }
}

#[test]
fn out_of_bounds_start_is_clamped_on_the_first_step() {
    let params = no_zones();
    let spec = floating(1);
    let state = ObjectState::at(Vec3::new(50.0, -50.0, -40.0), ResourceState::Ready, 0.3);
    let next = next_state(&spec, &state, &frame(Vec2::new(-1.0, 1.0), 0), &params);
    assert!(within_safe(next.position, &params));
}

#[test]
fn hovered_objects_are_not_repelled() {
    let params = no_zones();
    let spec = floating(1);
    let mut state = ObjectState::at(Vec3::new(0.5, 0.0, 0.0), ResourceState::Ready, 0.3);
    state.hovered = true;
    let next = next_state(&spec, &state, &frame(Vec2::ZERO, 0), &params);
    assert_eq!(next.position, state.position);

    state.hovered = false;
    let next = next_state(&spec, &state, &frame(Vec2::ZERO, 0), &params);
    assert!(next.position.x > state.position.x);
}

#[test]
fn cursor_push_has_a_minimum_step_and_a_fallback_direction() {
    let params = SimParams::default();
    let near_edge = cursor_push(Vec3::new(4.999, 0.0, 0.0), Vec3::ZERO, &params);
    assert!((near_edge.length() - params.repel_min_step).abs() < 1e-6);
    let outside = cursor_push(Vec3::new(6.0, 0.0, 0.0), Vec3::ZERO, &params);
    assert_eq!(outside, Vec3::ZERO);
    let dead_centre = cursor_push(Vec3::ZERO, Vec3::ZERO, &params);
    assert!(dead_centre.y > 0.0);
}

#[test]
fn exclusion_zone_pushes_objects_away_from_the_dial() {
    let params = SimParams::default();
    let zone = params.zones[0];
    let extent = params.cursor_extent;
    let start = Vec3::new(
        (zone.center_ndc.x + 0.05) * extent.x,
        (zone.center_ndc.y + 0.05) * extent.y,
        0.0,
    );
    let ndc_distance = |p: Vec3| (Vec2::new(p.x, p.y) / extent - zone.center_ndc).length();
    let mut sim = SceneObjectSimulator::new(params.clone());
    sim.load(vec![(floating(1), ObjectState::at(start, ResourceState::Ready, 0.3))]);
    let mut prev = ndc_distance(start);
    // cursor parked in the far corner, out of repulsion range
    for i in 0..400 {
        sim.step(&frame(Vec2::new(-1.0, 1.0), i));
        let p = sim.state(1).map(|s| s.position).unwrap_or_default();
        let d = ndc_distance(p);
        assert!(d >= prev - 1e-6);
        prev = d;
    }
    assert!(prev > zone.radius_ndc * 0.9);
}

#[test]
fn same_inputs_replay_to_the_same_frames() {
    let params = SimParams::default();
    let run = || {
        let mut sim = SceneObjectSimulator::new(params.clone());
        sim.load(build_scene(Mode::Home, 7, &params).objects);
        for i in 0..240 {
            let t = i as f32 / 60.0;
            sim.step(&frame(Vec2::new(t.sin() * 0.5, t.cos() * 0.3), i));
        }
        sim.objects().map(|(_, s)| *s).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn next_state_is_pure() {
    let params = SimParams::default();
    let spec = floating(1);
    let state = ObjectState::at(Vec3::new(0.2, 0.1, -1.0), ResourceState::Ready, 0.3);
    let input = frame(Vec2::ZERO, 3);
    let a = next_state(&spec, &state, &input, &params);
    let b = next_state(&spec, &state, &input, &params);
    assert_eq!(a, b);
    assert_eq!(state.position, Vec3::new(0.2, 0.1, -1.0));
}

#[test]
fn anchored_objects_ease_to_their_anchor() {
    let params = SimParams::default();
    let mut spec = floating(7);
    spec.motion = Motion::Anchored;
    let mut sim = SceneObjectSimulator::new(params);
    sim.load(vec![(spec, ObjectState::at(Vec3::ZERO, ResourceState::Ready, 0.3))]);
    sim.set_anchor(7, Vec3::new(3.0, 0.0, 1.0), 1.2, 0.5);
    for i in 0..300 {
        // a cursor right on top does not matter to anchored objects
        sim.step(&frame(Vec2::ZERO, i));
    }
    let s = *sim.state(7).expect("object 7 loaded");
    assert!(s.position.distance(Vec3::new(3.0, 0.0, 1.0)) < 1e-3);
    assert!((s.scale_factor - 1.2).abs() < 1e-3);
    assert!((s.opacity_factor - 0.5).abs() < 1e-3);
}

#[test]
fn resource_state_gates_opacity() {
    assert_eq!(resource_opacity(ResourceState::Ready, 0.0, 0.5), 1.0);
    assert_eq!(resource_opacity(ResourceState::Pending, 100.0, 0.5), 0.0);
    let loaded = ResourceState::Loaded { at_sec: 1.0 };
    assert_eq!(resource_opacity(loaded, 1.0, 0.5), 0.0);
    assert!((resource_opacity(loaded, 1.25, 0.5) - 0.5).abs() < 1e-6);
    assert_eq!(resource_opacity(loaded, 3.0, 0.5), 1.0);
}

#[test]
fn only_pending_objects_can_be_marked_loaded() {
    let mut sim = SceneObjectSimulator::new(SimParams::default());
    sim.load(vec![
        (floating(1), ObjectState::at(Vec3::ZERO, ResourceState::Pending, 0.3)),
        (floating(2), ObjectState::at(Vec3::ZERO, ResourceState::Ready, 0.3)),
    ]);
    assert_eq!(sim.instances(0.0).map(|i| i.opacity).collect::<Vec<_>>(), vec![0.0, 1.0]);
    sim.mark_loaded(1, 2.0);
    sim.mark_loaded(2, 2.0);
    sim.mark_loaded(99, 2.0);
    assert_eq!(sim.state(1).map(|s| s.resource), Some(ResourceState::Loaded { at_sec: 2.0 }));
    assert_eq!(sim.state(2).map(|s| s.resource), Some(ResourceState::Ready));
    // a second load event does not restart the fade
    sim.mark_loaded(1, 5.0);
    assert_eq!(sim.state(1).map(|s| s.resource), Some(ResourceState::Loaded { at_sec: 2.0 }));
}

#[test]
fn hover_moves_between_interactive_objects_only() {
    let mut inert = floating(3);
    inert.caps = Capabilities::NONE;
    let mut sim = SceneObjectSimulator::new(SimParams::default());
    sim.load(vec![
        (floating(1), ObjectState::at(Vec3::ZERO, ResourceState::Ready, 0.3)),
        (floating(2), ObjectState::at(Vec3::X, ResourceState::Ready, 0.3)),
        (inert, ObjectState::at(Vec3::Y, ResourceState::Ready, 0.3)),
    ]);
    assert_eq!(sim.set_hovered(Some(3), 0.0), HoverChange::default());
    assert_eq!(sim.hovered(), None);

    let c = sim.set_hovered(Some(1), 0.0);
    assert_eq!((c.left, c.entered), (None, Some(1)));
    assert_eq!(sim.state(1).map(|s| s.hovered), Some(true));
    assert_eq!(sim.set_hovered(Some(1), 0.1), HoverChange::default());

    let c = sim.set_hovered(Some(2), 0.2);
    assert_eq!((c.left, c.entered), (Some(1), Some(2)));
    assert_eq!(sim.state(1).map(|s| s.hovered), Some(false));

    let c = sim.set_hovered(None, 0.3);
    assert_eq!((c.left, c.entered), (Some(2), None));
    assert_eq!(sim.pick_targets().count(), 2);
}

#[test]
fn hover_emphasis_scales_lights_and_faces_the_camera() {
    let params = SimParams::default();
    let mut spec = floating(1);
    spec.rest_rotation = Vec3::new(1.0, 2.0, 0.5);
    let mut sim = SceneObjectSimulator::new(params.clone());
    sim.load(vec![(spec, ObjectState::at(Vec3::ZERO, ResourceState::Ready, params.hover_tween_sec))]);

    let idle = sim.instances(0.0).next().map(|i| (i.scale, i.emissive));
    assert_eq!(idle, Some((1.0, params.emissive_idle)));

    sim.set_hovered(Some(1), 0.0);
    let inst = sim.instances(1.0).next().expect("one instance");
    assert!((inst.scale - (1.0 + params.hover_scale_boost)).abs() < 1e-5);
    assert!((inst.emissive - params.emissive_hover).abs() < 1e-5);
    assert!(inst.rotation.length() < 1e-4);
}

#[test]
fn idle_bob_does_not_feed_back_into_the_simulation() {
    let params = no_zones();
    let mut sim = SceneObjectSimulator::new(params.clone());
    sim.load(vec![(floating(1), ObjectState::at(Vec3::new(-8.0, 7.0, -3.0), ResourceState::Ready, 0.3))]);
    let before = sim.state(1).map(|s| s.position);
    let rendered: Vec<f32> = (0..10).map(|i| sim.instances(i as f32).next().map(|r| r.position.y).unwrap_or(0.0)).collect();
    assert!(rendered.iter().any(|y| (y - 7.0).abs() > 1e-3));
    assert_eq!(sim.state(1).map(|s| s.position), before);
}

#[test]
fn viewport_maps_to_ndc_with_y_up() {
    assert_eq!(viewport_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(viewport_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(viewport_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
}
