// Host-side tests for the scene driver.

use drift_core::{placement_z, Camera, Field, FieldParams, ScaleState};
use instant::Instant;

fn test_camera() -> Camera {
    Camera::scene_default(16.0 / 9.0)
}

#[test]
fn depth_is_strictly_decreasing_in_index() {
    let camera = test_camera();
    let field = Field::new(
        FieldParams {
            count: 100,
            depth: 80.0,
        },
        &camera,
        42,
    );
    let mut prev = f32::INFINITY;
    for obj in field.objects() {
        assert!(
            obj.z() < prev,
            "object {} at z {} does not sit behind z {}",
            obj.depth_index,
            obj.z(),
            prev
        );
        prev = obj.z();
    }
}

#[test]
fn single_object_sits_at_minus_thirty() {
    assert_eq!(placement_z(0, 1, 80.0), -30.0);

    let camera = test_camera();
    let field = Field::new(
        FieldParams {
            count: 1,
            depth: 80.0,
        },
        &camera,
        42,
    );
    assert_eq!(field.len(), 1);
    assert_eq!(field.objects()[0].z(), -30.0);
}

#[test]
fn zero_count_is_clamped_to_one_object() {
    let camera = test_camera();
    let field = Field::new(
        FieldParams {
            count: 0,
            depth: 80.0,
        },
        &camera,
        42,
    );
    assert_eq!(field.len(), 1, "zero count must not divide depth by zero");
    assert!(field.objects()[0].z().is_finite());
}

#[test]
fn construction_is_deterministic_under_a_seed() {
    let camera = test_camera();
    let a = Field::new(FieldParams::default(), &camera, 7);
    let b = Field::new(FieldParams::default(), &camera, 7);
    for (x, y) in a.objects().iter().zip(b.objects()) {
        assert_eq!(x.x_offset, y.x_offset);
        assert_eq!(x.y, y.y);
        assert_eq!(x.rotation, y.rotation);
    }
}

#[test]
fn initial_offsets_are_randomized_per_object() {
    let camera = test_camera();
    let field = Field::new(FieldParams::default(), &camera, 42);
    let first = field.objects()[0].x_offset;
    assert!(
        field.objects().iter().any(|o| o.x_offset != first),
        "expected varied lateral offsets across the field"
    );
}

#[test]
fn enlarge_targets_only_the_clicked_object() {
    let camera = test_camera();
    let mut field = Field::new(
        FieldParams {
            count: 10,
            depth: 80.0,
        },
        &camera,
        42,
    );
    field.enlarge(3, Instant::now());
    for (i, obj) in field.objects().iter().enumerate() {
        let expected = if i == 3 {
            ScaleState::Enlarged
        } else {
            ScaleState::Idle
        };
        assert_eq!(obj.state(), expected, "object {i}");
    }
}

#[test]
fn enlarge_out_of_range_is_ignored() {
    let camera = test_camera();
    let mut field = Field::new(
        FieldParams {
            count: 2,
            depth: 80.0,
        },
        &camera,
        42,
    );
    field.enlarge(99, Instant::now());
    assert!(field
        .objects()
        .iter()
        .all(|o| o.state() == ScaleState::Idle));
}

#[test]
fn tick_advances_every_object() {
    let camera = test_camera();
    let mut field = Field::new(
        FieldParams {
            count: 25,
            depth: 80.0,
        },
        &camera,
        42,
    );
    let rot_before: Vec<_> = field.objects().iter().map(|o| o.rotation).collect();
    field.tick(Instant::now(), &camera);
    for (obj, before) in field.objects().iter().zip(rot_before) {
        assert!(
            obj.rotation.x > before.x,
            "object {} did not rotate",
            obj.depth_index
        );
    }
}

#[test]
fn focus_sits_at_half_depth() {
    let camera = test_camera();
    let field = Field::new(
        FieldParams {
            count: 4,
            depth: 80.0,
        },
        &camera,
        42,
    );
    assert_eq!(field.focus_z(), 40.0);
}
