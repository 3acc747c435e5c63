//! Ray picking: resolves a click on the canvas to an object identity.

use glam::{Vec3, Vec4};

use crate::camera::Camera;
use crate::constants::PICK_SPHERE_RADIUS;
use crate::field::Field;

/// Compute a world-space ray from pixel coordinates in the canvas backing
/// store. `(sx, sy)` has its origin at the top-left, y growing downward.
#[inline]
pub fn screen_to_world_ray(
    camera: &Camera,
    canvas_w: f32,
    canvas_h: f32,
    sx: f32,
    sy: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / canvas_w.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / canvas_h.max(1.0));
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

/// Nearest positive ray/sphere intersection distance, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Resolve a click at canvas pixel `(sx, sy)` to the nearest hit object.
///
/// Each object is picked against a bounding sphere scaled by its current
/// scale, at the world position derived from the camera's viewport at the
/// object's depth.
pub fn pick_at(
    field: &Field,
    camera: &Camera,
    canvas_w: f32,
    canvas_h: f32,
    sx: f32,
    sy: f32,
) -> Option<usize> {
    let (ro, rd) = screen_to_world_ray(camera, canvas_w, canvas_h, sx, sy);
    let mut best: Option<(usize, f32)> = None;
    for (i, obj) in field.objects().iter().enumerate() {
        let viewport = camera.viewport_at(obj.z());
        let center = obj.position(viewport);
        let radius = PICK_SPHERE_RADIUS * obj.scale().max_element();
        if let Some(t) = ray_sphere(ro, rd, center, radius) {
            if best.map(|(_, bt)| t < bt).unwrap_or(true) {
                best = Some((i, t));
            }
        }
    }
    best.map(|(i, _)| i)
}
