//! Light descriptions, laid out uniform-ready for the render pipelines.

use bytemuck::{Pod, Zeroable};

use crate::constants::{AMBIENT_INTENSITY, POINT_LIGHT_INTENSITY, POINT_LIGHT_POSITION};

/// Uniform ambient term.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct AmbientLight {
    /// Light color
    pub color: [f32; 3],
    /// Light intensity
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity: AMBIENT_INTENSITY,
        }
    }
}

/// A point light (omnidirectional).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PointLight {
    /// Light position in world space
    pub position: [f32; 3],
    /// Light intensity
    pub intensity: f32,
    /// Light color
    pub color: [f32; 3],
    pub _pad0: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: POINT_LIGHT_POSITION,
            intensity: POINT_LIGHT_INTENSITY,
            color: [1.0, 1.0, 1.0],
            _pad0: 0.0,
        }
    }
}
