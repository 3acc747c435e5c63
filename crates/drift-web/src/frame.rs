//! The per-frame tick: advance the field, rebuild instance transforms, draw.

use std::cell::RefCell;
use std::rc::Rc;

use drift_core::{Camera, Field, MeshData, MeshMaterial};
use glam::{EulerRot, Mat4, Quat};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

pub struct FrameContext<'a> {
    pub field: Rc<RefCell<Field>>,
    pub camera: Rc<RefCell<Camera>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl FrameContext<'_> {
    /// One tick of the scene: exactly one update pass over all objects, then
    /// one render. Driven by requestAnimationFrame; per-tick amounts are
    /// fixed, so the elapsed time is only a cadence signal.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let w = self.canvas.width();
        let h = self.canvas.height();

        // Camera follows the canvas backing size; everything downstream reads
        // the viewport through it.
        {
            let mut cam = self.camera.borrow_mut();
            cam.aspect = w as f32 / h.max(1) as f32;
        }
        let camera = self.camera.borrow().clone();

        self.field.borrow_mut().tick(now, &camera);

        let field = self.field.borrow();
        let mut instances = Vec::with_capacity(field.len());
        for obj in field.objects() {
            let viewport = camera.viewport_at(obj.z());
            let rot = Quat::from_euler(
                EulerRot::XYZ,
                obj.rotation.x,
                obj.rotation.y,
                obj.rotation.z,
            );
            let model =
                Mat4::from_scale_rotation_translation(obj.scale(), rot, obj.position(viewport));
            instances.push(render::MeshInstance {
                model: model.to_cols_array_2d(),
            });
        }
        let focus_depth = (camera.eye.z - field.focus_z()).abs();
        drop(field);

        if let Some(g) = &mut self.gpu {
            g.set_camera(&camera);
            g.set_focus(focus_depth);
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    mesh: &MeshData,
    material: MeshMaterial,
    instance_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, mesh, material, instance_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
