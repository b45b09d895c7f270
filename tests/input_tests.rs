// The main crate is wasm-only, so the picking helpers are included directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn ray_hits_the_near_side_of_a_sphere() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0)
        .expect("ray through the centre hits");
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn rays_that_miss_or_point_away_return_none() {
    let center = Vec3::new(0.0, 0.0, 5.0);
    assert_eq!(ray_sphere(Vec3::ZERO, Vec3::X, center, 2.0), None);
    assert_eq!(ray_sphere(Vec3::ZERO, -Vec3::Z, center, 2.0), None);
    // grazing just outside the radius
    assert_eq!(ray_sphere(Vec3::new(2.01, 0.0, 0.0), Vec3::Z, center, 2.0), None);
}

#[test]
fn pick_nearest_prefers_the_closest_hit() {
    let origin = Vec3::new(0.0, 0.0, 8.0);
    let dir = -Vec3::Z;
    let targets = vec![
        (1, Vec3::new(0.0, 0.0, -4.0), 1.0),
        (2, Vec3::new(0.0, 0.0, 2.0), 0.5),
        (3, Vec3::new(5.0, 0.0, 3.0), 1.0),
    ];
    assert_eq!(pick_nearest(origin, dir, targets.clone()), Some(2));
    assert_eq!(pick_nearest(origin, Vec3::X, targets), None);
    assert_eq!(pick_nearest(origin, dir, Vec::new()), None);
}
