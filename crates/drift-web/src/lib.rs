#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use drift_core::{Camera, Field, FieldParams, MeshLibrary, MEME_MESH};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod input;
mod overlay;
mod render;

use constants::{CANVAS_ID, COUNT_ATTR, DEPTH_ATTR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    // Configuration surface: optional data attributes on the canvas
    let defaults = FieldParams::default();
    let params = FieldParams {
        count: dom::numeric_attr(&canvas, COUNT_ATTR)
            .map(|v| v as usize)
            .unwrap_or(defaults.count),
        depth: dom::numeric_attr(&canvas, DEPTH_ATTR)
            .map(|v| v as f32)
            .unwrap_or(defaults.depth),
    };

    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let camera = Rc::new(RefCell::new(Camera::scene_default(aspect)));

    let library = MeshLibrary::builtin();
    let (mesh, material) = library.get(MEME_MESH)?;

    let seed = js_sys::Date::now() as u64;
    let field = Rc::new(RefCell::new(Field::new(params, &camera.borrow(), seed)));
    log::info!(
        "field ready: {} objects, depth {}",
        field.borrow().len(),
        params.depth
    );

    // Click/tap -> enlarge the picked object
    {
        let field = field.clone();
        let camera = camera.clone();
        let canvas_ev = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            input::handle_pointer_down(&ev, &canvas_ev, &field, &camera);
        }) as Box<dyn FnMut(web::PointerEvent)>);
        canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    overlay::schedule_reveals(&document);

    let instance_capacity = field.borrow().len();
    let gpu = frame::init_gpu(&canvas, mesh, *material, instance_capacity).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        camera,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
