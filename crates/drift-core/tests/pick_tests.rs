// Host-side tests for ray picking.

use drift_core::{pick_at, ray_sphere, screen_to_world_ray, Camera, Field, FieldParams};
use glam::Vec3;

#[test]
fn ray_sphere_intersection_basic() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    let center = Vec3::new(0.0, 0.0, 5.0);
    let result = ray_sphere(ray_origin, ray_dir, center, 2.0);
    assert!(result.is_some());

    let t = result.unwrap();
    assert!(t > 0.0);
    assert!(t < 10.0, "hit distance {t} past the sphere");
}

#[test]
fn ray_sphere_intersection_miss() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(1.0, 0.0, 0.0);

    // Ray goes in X, sphere is in Z
    let center = Vec3::new(0.0, 0.0, 5.0);
    assert!(ray_sphere(ray_origin, ray_dir, center, 2.0).is_none());
}

#[test]
fn ray_sphere_intersection_behind_origin() {
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::new(0.0, 0.0, 1.0);

    let center = Vec3::new(0.0, 0.0, -5.0);
    assert!(
        ray_sphere(ray_origin, ray_dir, center, 2.0).is_none(),
        "spheres behind the ray must not report a hit"
    );
}

#[test]
fn center_ray_points_down_the_view_axis() {
    let camera = Camera::scene_default(16.0 / 9.0);
    let (origin, dir) = screen_to_world_ray(&camera, 1920.0, 1080.0, 960.0, 540.0);
    assert_eq!(origin, camera.eye);
    assert!(dir.z < -0.999, "center ray should look down -Z, got {dir:?}");
}

#[test]
fn corner_rays_diverge_in_the_expected_quadrant() {
    let camera = Camera::scene_default(16.0 / 9.0);
    let (_, top_left) = screen_to_world_ray(&camera, 1920.0, 1080.0, 0.0, 0.0);
    assert!(top_left.x < 0.0 && top_left.y > 0.0);

    let (_, bottom_right) = screen_to_world_ray(&camera, 1920.0, 1080.0, 1920.0, 1080.0);
    assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
}

/// Project a world point to canvas pixels through the camera.
fn project_to_pixels(camera: &Camera, world: Vec3, w: f32, h: f32) -> (f32, f32) {
    let clip = camera.view_proj() * world.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    ((ndc.x + 1.0) * 0.5 * w, (1.0 - ndc.y) * 0.5 * h)
}

#[test]
fn pick_resolves_the_object_under_the_pointer() {
    let camera = Camera::scene_default(16.0 / 9.0);
    let field = Field::new(
        FieldParams {
            count: 1,
            depth: 80.0,
        },
        &camera,
        42,
    );

    let obj = &field.objects()[0];
    let viewport = camera.viewport_at(obj.z());
    let (w, h) = (1920.0, 1080.0);
    let (sx, sy) = project_to_pixels(&camera, obj.position(viewport), w, h);

    assert_eq!(
        pick_at(&field, &camera, w, h, sx, sy),
        Some(0),
        "click on the projected center must hit the object"
    );
}

#[test]
fn pick_misses_away_from_the_object() {
    let camera = Camera::scene_default(16.0 / 9.0);
    let field = Field::new(
        FieldParams {
            count: 1,
            depth: 80.0,
        },
        &camera,
        42,
    );

    let obj = &field.objects()[0];
    let viewport = camera.viewport_at(obj.z());
    let (w, h) = (1920.0, 1080.0);
    let (sx, _) = project_to_pixels(&camera, obj.position(viewport), w, h);

    // Probe the horizontal edge farthest from the object.
    let probe_x = if sx > w * 0.5 { 0.0 } else { w };
    assert_eq!(
        pick_at(&field, &camera, w, h, probe_x, 0.0),
        None,
        "far corner must not hit"
    );
}

#[test]
fn pick_prefers_the_nearest_of_two_hits() {
    let camera = Camera::scene_default(16.0 / 9.0);
    // Two objects; force both onto the view axis so one occludes the other.
    let mut field = Field::new(
        FieldParams {
            count: 2,
            depth: 80.0,
        },
        &camera,
        42,
    );
    for obj in field.objects_mut() {
        obj.x_offset = 0.0;
        obj.y = 0.0;
    }

    let picked = pick_at(&field, &camera, 1920.0, 1080.0, 960.0, 540.0);
    assert_eq!(picked, Some(0), "the nearer object (index 0) wins the pick");
}
