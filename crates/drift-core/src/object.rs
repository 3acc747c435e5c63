//! Per-object drift state and the per-tick update rule.

use std::time::Duration;

use glam::Vec3;
use instant::Instant;
use rand::Rng;

use crate::camera::Viewport;
use crate::constants::{
    ENLARGED_SCALE, ENLARGE_DWELL_MS, IDLE_SCALE, LATERAL_SPREAD, RISE_PER_TICK,
    SCALE_LERP_FACTOR, SPIN_RATE_X, SPIN_RATE_Y, SPIN_RATE_Z, WRAP_MARGIN,
};

/// Scale state of an object. Both states are steady; `Enlarged` falls back to
/// `Idle` on its own once the dwell deadline passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleState {
    Idle,
    Enlarged,
}

/// One floating mesh instance. Created once at field construction, never
/// destroyed; recycled in place by the wrap-around rule.
#[derive(Clone, Debug)]
pub struct FloatingObject {
    pub depth_index: usize,
    /// Fixed depth coordinate, assigned at creation.
    z: f32,
    /// Lateral offset in [-1, 1]; world x is `x_offset * viewport.width`.
    pub x_offset: f32,
    /// Vertical world position at this object's depth.
    pub y: f32,
    /// Euler angles in radians; accumulate unbounded, only read as angles.
    pub rotation: Vec3,
    scale: Vec3,
    enlarged_until: Option<Instant>,
}

impl FloatingObject {
    pub fn new(depth_index: usize, z: f32, viewport_height: f32, rng: &mut impl Rng) -> Self {
        Self {
            depth_index,
            z,
            x_offset: rand_spread(rng, LATERAL_SPREAD),
            y: rand_spread(rng, viewport_height) + rand_spread(rng, depth_index as f32),
            rotation: Vec3::new(
                rng.gen::<f32>() * std::f32::consts::PI,
                rng.gen::<f32>() * std::f32::consts::PI,
                rng.gen::<f32>() * std::f32::consts::PI,
            ),
            scale: Vec3::ONE,
            enlarged_until: None,
        }
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    #[inline]
    pub fn state(&self) -> ScaleState {
        if self.enlarged_until.is_some() {
            ScaleState::Enlarged
        } else {
            ScaleState::Idle
        }
    }

    /// World-space position given the visible extent at this object's depth.
    #[inline]
    pub fn position(&self, viewport: Viewport) -> Vec3 {
        Vec3::new(self.x_offset * viewport.width, self.y, self.z)
    }

    /// Click/tap entry point: arm (or re-arm) the single dwell deadline.
    ///
    /// Repeated clicks while already enlarged just push the deadline out;
    /// there is one deadline per object, never a stack of timers.
    pub fn enlarge(&mut self, now: Instant) {
        self.enlarged_until = Some(now + Duration::from_millis(ENLARGE_DWELL_MS));
    }

    /// One animation tick. Amounts are per tick (render cadence); `now` is
    /// only consulted for the dwell deadline.
    pub fn tick(&mut self, now: Instant, viewport: Viewport, rng: &mut impl Rng) {
        // Timed Enlarged -> Idle, evaluated once per tick.
        if let Some(deadline) = self.enlarged_until {
            if now >= deadline {
                self.enlarged_until = None;
            }
        }

        self.rotation.x += SPIN_RATE_X;
        self.rotation.y += SPIN_RATE_Y;
        self.rotation.z += SPIN_RATE_Z;

        // Wrap is decided on the value of y entering the tick; a wrapped
        // object re-enters at the bottom edge and does not also drift.
        let limit = viewport.height / WRAP_MARGIN;
        if self.y > limit {
            self.x_offset = rand_spread(rng, LATERAL_SPREAD);
            self.y = -limit;
        } else {
            self.y += RISE_PER_TICK;
        }

        let target = match self.state() {
            ScaleState::Idle => IDLE_SCALE,
            ScaleState::Enlarged => ENLARGED_SCALE,
        };
        self.scale = self.scale.lerp(Vec3::splat(target), SCALE_LERP_FACTOR);
    }
}

/// Uniform sample over `[-range / 2, range / 2]`.
#[inline]
pub fn rand_spread(rng: &mut impl Rng, range: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * range
}
