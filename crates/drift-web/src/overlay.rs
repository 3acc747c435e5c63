//! The two caption overlays that fade in over the scene.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    CAPTION_SUBTITLE_DELAY_MS, CAPTION_SUBTITLE_ID, CAPTION_TITLE_DELAY_MS, CAPTION_TITLE_ID,
};

#[inline]
pub fn reveal(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.class_list().add_1("visible");
        // fallback for pages without the stylesheet class
        let _ = el.set_attribute("style", "opacity:1");
    }
}

/// Arm both caption reveals. The opacity fade itself is CSS-driven.
pub fn schedule_reveals(document: &web::Document) {
    schedule_reveal(document, CAPTION_TITLE_ID, CAPTION_TITLE_DELAY_MS);
    schedule_reveal(document, CAPTION_SUBTITLE_ID, CAPTION_SUBTITLE_DELAY_MS);
}

fn schedule_reveal(document: &web::Document, id: &'static str, delay_ms: i32) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || reveal(&doc, id)) as Box<dyn FnMut()>);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}
