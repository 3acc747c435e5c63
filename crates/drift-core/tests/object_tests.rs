// Host-side tests for the per-object drift rules.

use std::time::Duration;

use drift_core::{
    FloatingObject, ScaleState, Viewport, ENLARGED_SCALE, RISE_PER_TICK, SPIN_RATE_X, SPIN_RATE_Y,
    SPIN_RATE_Z, WRAP_MARGIN,
};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn test_viewport() -> Viewport {
    Viewport {
        width: 8.0,
        height: 6.0,
    }
}

fn make_object(rng: &mut StdRng) -> FloatingObject {
    FloatingObject::new(0, -30.0, test_viewport().height, rng)
}

#[test]
fn drift_adds_constant_rise_below_threshold() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut obj = make_object(&mut rng);
    let viewport = test_viewport();
    obj.y = 0.0;
    let now = Instant::now();

    for tick in 0..50 {
        let y_before = obj.y;
        let x_before = obj.x_offset;
        if y_before > viewport.height / WRAP_MARGIN {
            break;
        }
        obj.tick(now, viewport, &mut rng);
        assert!(
            (obj.y - (y_before + RISE_PER_TICK)).abs() < 1e-6,
            "tick {tick}: expected y {} got {}",
            y_before + RISE_PER_TICK,
            obj.y
        );
        assert_eq!(obj.x_offset, x_before, "x must not change while drifting");
    }
}

#[test]
fn wrap_resets_to_bottom_and_resamples_x() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut obj = make_object(&mut rng);
    let viewport = test_viewport();
    let limit = viewport.height / WRAP_MARGIN;
    obj.y = limit + 0.5;

    obj.tick(Instant::now(), viewport, &mut rng);

    assert_eq!(obj.y, -limit, "wrapped object re-enters exactly at -threshold");
    assert!(
        (-1.0..=1.0).contains(&obj.x_offset),
        "resampled x offset {} outside [-1, 1]",
        obj.x_offset
    );
}

#[test]
fn wrap_triggers_on_the_following_tick_near_threshold() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut obj = make_object(&mut rng);
    let viewport = test_viewport();
    let limit = viewport.height / WRAP_MARGIN;
    let now = Instant::now();

    // Just below the threshold: this tick still drifts past it.
    obj.y = limit - 0.01;
    let x_before = obj.x_offset;
    obj.tick(now, viewport, &mut rng);
    assert!(
        (obj.y - (limit + 0.02)).abs() < 1e-5,
        "expected drift past the threshold, got y {}",
        obj.y
    );
    assert_eq!(obj.x_offset, x_before, "no resample before the wrap fires");

    // The wrap fires on the next tick, from the overshoot value.
    obj.tick(now, viewport, &mut rng);
    assert_eq!(obj.y, -limit, "overshoot wraps on the following tick");
}

#[test]
fn scale_converges_monotonically_toward_target() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut obj = make_object(&mut rng);
    let viewport = test_viewport();
    let t0 = Instant::now();
    obj.enlarge(t0);

    let mut prev = obj.scale().x;
    for tick in 0..15 {
        obj.tick(t0, viewport, &mut rng);
        let cur = obj.scale().x;
        assert!(
            cur > prev && cur < ENLARGED_SCALE,
            "tick {tick}: scale {cur} not strictly between {prev} and {ENLARGED_SCALE}"
        );
        prev = cur;
    }
    assert!(
        (ENLARGED_SCALE - prev) / ENLARGED_SCALE < 0.01,
        "scale {prev} not within 1% of target after 15 ticks"
    );
}

#[test]
fn scale_axes_stay_uniform() {
    let mut rng = StdRng::seed_from_u64(19);
    let mut obj = make_object(&mut rng);
    let viewport = test_viewport();
    let t0 = Instant::now();
    obj.enlarge(t0);
    for _ in 0..10 {
        obj.tick(t0, viewport, &mut rng);
        let s = obj.scale();
        assert_eq!(s.x, s.y);
        assert_eq!(s.y, s.z);
    }
}

#[test]
fn click_enlarges_then_dwell_expires_without_further_clicks() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut obj = make_object(&mut rng);
    let viewport = test_viewport();
    let t0 = Instant::now();

    assert_eq!(obj.state(), ScaleState::Idle);
    obj.enlarge(t0);
    assert_eq!(obj.state(), ScaleState::Enlarged);

    obj.tick(t0 + Duration::from_millis(1999), viewport, &mut rng);
    assert_eq!(
        obj.state(),
        ScaleState::Enlarged,
        "dwell must hold for the full 2000ms"
    );

    obj.tick(t0 + Duration::from_millis(2000), viewport, &mut rng);
    assert_eq!(
        obj.state(),
        ScaleState::Idle,
        "dwell expiry needs no further click"
    );
}

#[test]
fn repeat_clicks_rearm_a_single_deadline() {
    let mut rng = StdRng::seed_from_u64(29);
    let mut obj = make_object(&mut rng);
    let viewport = test_viewport();
    let t0 = Instant::now();

    obj.enlarge(t0);
    obj.enlarge(t0 + Duration::from_millis(1000));

    // The first deadline (t0 + 2s) must not fire: it was replaced, not stacked.
    obj.tick(t0 + Duration::from_millis(2500), viewport, &mut rng);
    assert_eq!(
        obj.state(),
        ScaleState::Enlarged,
        "re-click must push the deadline out"
    );

    obj.tick(t0 + Duration::from_millis(3000), viewport, &mut rng);
    assert_eq!(obj.state(), ScaleState::Idle);
}

#[test]
fn rotation_accumulates_fixed_increments() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut obj = make_object(&mut rng);
    let viewport = test_viewport();
    let before = obj.rotation;
    let now = Instant::now();

    for _ in 0..3 {
        obj.tick(now, viewport, &mut rng);
    }

    assert!((obj.rotation.x - (before.x + 3.0 * SPIN_RATE_X)).abs() < 1e-6);
    assert!((obj.rotation.y - (before.y + 3.0 * SPIN_RATE_Y)).abs() < 1e-6);
    assert!((obj.rotation.z - (before.z + 3.0 * SPIN_RATE_Z)).abs() < 1e-6);
}

#[test]
fn world_position_scales_x_offset_by_viewport_width() {
    let mut rng = StdRng::seed_from_u64(37);
    let mut obj = make_object(&mut rng);
    obj.x_offset = 0.5;
    obj.y = 1.25;

    let pos = obj.position(Viewport {
        width: 10.0,
        height: 6.0,
    });
    assert_eq!(pos.x, 5.0);
    assert_eq!(pos.y, 1.25);
    assert_eq!(pos.z, obj.z());

    // The x coordinate follows the viewport, not a cached width.
    let pos_wide = obj.position(Viewport {
        width: 20.0,
        height: 6.0,
    });
    assert_eq!(pos_wide.x, 10.0);
}
