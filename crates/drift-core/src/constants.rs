// Shared scene/tuning constants used by both web and native frontends.

// Field layout
pub const DEFAULT_COUNT: usize = 100;
pub const DEFAULT_DEPTH: f32 = 80.0;
pub const DEPTH_NEAR_PAD: f32 = 30.0; // closest object sits this far past the camera plane

// Camera
pub const CAMERA_EYE_Z: f32 = 5.0;
pub const CAMERA_FOV_Y_DEG: f32 = 30.0;
pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 110.0;

// Per-tick drift (render cadence, not wall clock)
pub const SPIN_RATE_X: f32 = 0.012; // radians per tick
pub const SPIN_RATE_Y: f32 = 0.014;
pub const SPIN_RATE_Z: f32 = 0.001;
pub const RISE_PER_TICK: f32 = 0.03;
pub const WRAP_MARGIN: f32 = 1.5; // wrap once y > viewport_height / WRAP_MARGIN
pub const LATERAL_SPREAD: f32 = 2.0; // x offsets sampled from [-1, 1]

// Scale state machine
pub const IDLE_SCALE: f32 = 1.0;
pub const ENLARGED_SCALE: f32 = 2.0;
pub const SCALE_LERP_FACTOR: f32 = 0.3; // fraction of remaining distance per tick
pub const ENLARGE_DWELL_MS: u64 = 2000;

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 0.6; // ray-sphere radius at scale 1

// Background and lights
pub const BACKGROUND_RGB: [f32; 3] = [1.0, 0.749, 0.251]; // #ffbf40
pub const AMBIENT_INTENSITY: f32 = 0.2;
pub const POINT_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;

// Depth of field, focused at z = depth / 2
pub const DOF_FOCAL_LENGTH: f32 = 0.7;
pub const DOF_BOKEH_SCALE: f32 = 10.0;

#[inline]
pub fn camera_fov_y_radians() -> f32 {
    CAMERA_FOV_Y_DEG.to_radians()
}
