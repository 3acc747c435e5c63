// Host-side tests for the camera / viewport model.

use drift_core::{Camera, CAMERA_EYE_Z, CAMERA_FOV_Y_DEG};

#[test]
fn viewport_matches_the_fov_formula() {
    let camera = Camera::scene_default(2.0);
    let z = -30.0;
    let viewport = camera.viewport_at(z);

    let distance = CAMERA_EYE_Z - z;
    let expected_height = 2.0 * distance * (CAMERA_FOV_Y_DEG.to_radians() * 0.5).tan();
    assert!(
        (viewport.height - expected_height).abs() < 1e-4,
        "height {} vs expected {expected_height}",
        viewport.height
    );
    assert!(
        (viewport.width - expected_height * 2.0).abs() < 1e-4,
        "width must be height * aspect"
    );
}

#[test]
fn viewport_grows_with_distance_from_the_camera() {
    let camera = Camera::scene_default(16.0 / 9.0);
    let mut prev = 0.0;
    for i in 0..10 {
        let z = -30.0 - (i as f32) * 8.0;
        let viewport = camera.viewport_at(z);
        assert!(
            viewport.height > prev,
            "visible height must grow with depth, got {} after {prev}",
            viewport.height
        );
        prev = viewport.height;
    }
}

#[test]
fn viewport_is_a_pure_function_of_camera_parameters() {
    let mut camera = Camera::scene_default(1.0);
    let before = camera.viewport_at(-30.0);

    camera.aspect = 2.0;
    let after = camera.viewport_at(-30.0);

    assert_eq!(before.height, after.height, "height ignores aspect");
    assert!(
        (after.width - before.width * 2.0).abs() < 1e-4,
        "width follows the new aspect immediately"
    );
}

#[test]
fn view_proj_puts_a_field_object_in_front_of_the_camera() {
    let camera = Camera::scene_default(16.0 / 9.0);
    let clip = camera.view_proj() * glam::Vec4::new(0.0, 0.0, -30.0, 1.0);
    assert!(clip.w > 0.0, "points down -Z must have positive clip w");
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4, "on-axis point projects to center");
    assert!((0.0..=1.0).contains(&ndc.z), "point inside the depth range");
}
