use crate::constants::{CAMERA_FOV_DEG, CAMERA_Z};
use glam::{Mat4, Vec3, Vec4};

#[inline]
pub fn projection(width: f32, height: f32) -> Mat4 {
    let aspect = width / height.max(1.0);
    Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), aspect, 0.1, 100.0)
}

#[inline]
pub fn view() -> Mat4 {
    Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y)
}

/// Compute a world-space ray from viewport coordinates.
///
/// - `width`, `height`: viewport size in the same units as `sx`, `sy`
/// - `sx`, `sy`: pointer position, origin top-left
///
/// Returns `(ray_origin, ray_direction)` in world space.
#[inline]
pub fn screen_to_world_ray(width: f32, height: f32, sx: f32, sy: f32) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = (projection(width, height) * view()).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = Vec3::new(0.0, 0.0, CAMERA_Z);
    let rd = (p1 - ro).normalize();
    (ro, rd)
}
