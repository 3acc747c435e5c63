//! Camera and viewport model shared with both frontends.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets. The frontends consume
//! them to build matrices; the drift rules consume the viewport query.

use glam::{Mat4, Vec3};

use crate::constants::{camera_fov_y_radians, CAMERA_EYE_Z, CAMERA_FAR, CAMERA_NEAR};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

/// Visible extent of the frustum at some fixed world depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Camera {
    /// The fixed scene camera: on the +Z axis looking down -Z.
    pub fn scene_default(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_EYE_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: camera_fov_y_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Visible width/height of the frustum at world depth `z`.
    ///
    /// A perspective camera's visible extent grows with distance, so this is
    /// recomputed from the camera every tick rather than cached: it stays
    /// correct if aspect or fov ever change.
    pub fn viewport_at(&self, z: f32) -> Viewport {
        let distance = (self.eye.z - z).abs();
        let height = 2.0 * distance * (self.fovy_radians * 0.5).tan();
        Viewport {
            width: height * self.aspect,
            height,
        }
    }
}
