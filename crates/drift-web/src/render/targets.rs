use super::helpers;
use wgpu;

/// Offscreen targets for the render pipeline.
///
/// - `hdr_*` hold the scene color in Rgba16Float; alpha carries view depth.
/// - `depth_*` is the z-buffer for the instanced mesh pass.
/// - `blur_*` are half-resolution ping-pong buffers for the DoF blur.
pub(crate) struct RenderTargets {
    pub(crate) hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) blur_a: wgpu::Texture,
    pub(crate) blur_a_view: wgpu::TextureView,
    pub(crate) blur_b: wgpu::Texture,
    pub(crate) blur_b_view: wgpu::TextureView,
}

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let attach_sample =
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (hdr_tex, hdr_view) =
            helpers::create_color_texture(device, "hdr_tex", width, height, HDR_FORMAT, attach_sample);
        let (depth_tex, depth_view) = helpers::create_depth_texture(device, "depth_tex", width, height);
        let bw = (width.max(1) / 2).max(1);
        let bh = (height.max(1) / 2).max(1);
        let (blur_a, blur_a_view) =
            helpers::create_color_texture(device, "blur_a", bw, bh, HDR_FORMAT, attach_sample);
        let (blur_b, blur_b_view) =
            helpers::create_color_texture(device, "blur_b", bw, bh, HDR_FORMAT, attach_sample);
        Self {
            hdr_tex,
            hdr_view,
            depth_tex,
            depth_view,
            blur_a,
            blur_a_view,
            blur_b,
            blur_b_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }

    #[inline]
    pub(crate) fn half_resolution(width: u32, height: u32) -> [f32; 2] {
        [
            ((width.max(1) / 2).max(1)) as f32,
            ((height.max(1) / 2).max(1)) as f32,
        ]
    }
}
