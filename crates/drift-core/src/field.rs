//! The scene driver: owns field-wide configuration and the object pool.

use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::Camera;
use crate::constants::{DEFAULT_COUNT, DEFAULT_DEPTH, DEPTH_NEAR_PAD};
use crate::object::FloatingObject;

/// Field-wide configuration, supplied once at scene construction.
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub depth: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Depth placement for object `index` of `count`: spaced across `depth`,
/// starting one near-pad behind the camera plane.
#[inline]
pub fn placement_z(index: usize, count: usize, depth: f32) -> f32 {
    -(index as f32 / count as f32) * depth - DEPTH_NEAR_PAD
}

/// The animated object field. One update pass per rendered frame; objects are
/// mutually independent within a pass.
pub struct Field {
    pub params: FieldParams,
    objects: Vec<FloatingObject>,
    rng: StdRng,
}

impl Field {
    /// Materialize the field. A zero `count` would put a division by zero in
    /// the depth spacing, so it is clamped to a single object; other
    /// degenerate parameters are left to the caller.
    pub fn new(params: FieldParams, camera: &Camera, seed: u64) -> Self {
        let count = params.count.max(1);
        let mut rng = StdRng::seed_from_u64(seed);
        let objects = (0..count)
            .map(|i| {
                let z = placement_z(i, count, params.depth);
                let viewport = camera.viewport_at(z);
                FloatingObject::new(i, z, viewport.height, &mut rng)
            })
            .collect::<Vec<_>>();
        log::debug!(
            "field: spawned {} objects across z [{:.1}, {:.1}]",
            count,
            placement_z(0, count, params.depth),
            placement_z(count - 1, count, params.depth),
        );
        Self {
            params,
            objects,
            rng,
        }
    }

    #[inline]
    pub fn objects(&self) -> &[FloatingObject] {
        &self.objects
    }

    #[inline]
    pub fn objects_mut(&mut self) -> &mut [FloatingObject] {
        &mut self.objects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// One update pass over every object. The camera is only read, so any
    /// iteration order yields the same result.
    pub fn tick(&mut self, now: Instant, camera: &Camera) {
        for obj in &mut self.objects {
            let viewport = camera.viewport_at(obj.z());
            obj.tick(now, viewport, &mut self.rng);
        }
    }

    /// Click entry point, keyed by the object identity the host resolved.
    pub fn enlarge(&mut self, index: usize, now: Instant) {
        if let Some(obj) = self.objects.get_mut(index) {
            obj.enlarge(now);
        }
    }

    /// Depth-of-field focus target for this field, matching the scene setup.
    #[inline]
    pub fn focus_z(&self) -> f32 {
        self.params.depth / 2.0
    }
}
