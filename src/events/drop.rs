use super::ViewerWiring;
use crate::constants::DRAG_OVER_OPACITY;
use crate::dom;
use crate::image;
use web_sys as web;

/// Drag-and-drop panorama replacement: dim the page while a file hovers and
/// decode the first dropped file.
pub fn wire_file_drop(w: &ViewerWiring) {
    let target: &web::EventTarget = w.document.as_ref();

    dom::add_listener(target, "dragover", |ev: web::DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("copy");
        }
    });

    let doc_enter = w.document.clone();
    dom::add_listener(target, "dragenter", move |_ev: web::DragEvent| {
        dom::set_body_opacity(&doc_enter, DRAG_OVER_OPACITY);
    });

    let doc_leave = w.document.clone();
    dom::add_listener(target, "dragleave", move |_ev: web::DragEvent| {
        dom::set_body_opacity(&doc_leave, "1");
    });

    let w2 = w.clone();
    dom::add_listener(target, "drop", move |ev: web::DragEvent| {
        ev.prevent_default();
        dom::set_body_opacity(&w2.document, "1");
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        match file {
            Some(f) => {
                log::info!("[image] dropped {} ({} bytes)", f.name(), f.size());
                image::load_file(&f, w2.queued_image.clone());
            }
            None => log::warn!("[image] drop without a file"),
        }
    });
}
