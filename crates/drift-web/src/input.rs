//! Pointer input: maps pointer events to canvas pixels and resolves clicks
//! to an object identity via ray picking.

use std::cell::RefCell;
use std::rc::Rc;

use drift_core::{pick_at, Camera, Field};
use glam::Vec2;
use instant::Instant;
use web_sys as web;

/// Pointer event position in the canvas' backing store pixel space.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Click/tap handler: hit-test the field and arm the enlarge dwell on the
/// nearest object under the pointer.
pub fn handle_pointer_down(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
    field: &Rc<RefCell<Field>>,
    camera: &Rc<RefCell<Camera>>,
) {
    let px = pointer_canvas_px(ev, canvas);
    let cam = camera.borrow();
    let mut field = field.borrow_mut();
    if let Some(index) = pick_at(
        &field,
        &cam,
        canvas.width() as f32,
        canvas.height() as f32,
        px.x,
        px.y,
    ) {
        field.enlarge(index, Instant::now());
        log::debug!("pointer: enlarged object {index}");
    }
}
