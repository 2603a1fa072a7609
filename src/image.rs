use crate::constants::MAX_TEXTURE_DIMENSION;
use crate::dom;
use crate::input;
use pano_core::{ImageQueue, PanoramaImage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Decoded image waiting for the next frame to upload it.
pub type QueuedImage = Rc<RefCell<ImageQueue>>;

/// Decode `src` (URL or data URL) through an `<img>` and queue its pixels.
///
/// Failures are logged and otherwise ignored; the previous panorama stays.
pub fn load_panorama(src: &str, queued: QueuedImage) {
    let ticket = queued.borrow_mut().begin_load();
    decode_into_queue(src, ticket, queued);
}

fn decode_into_queue(src: &str, ticket: u32, queued: QueuedImage) {
    let img = match web::HtmlImageElement::new() {
        Ok(i) => i,
        Err(e) => {
            log::warn!("[image] cannot create <img>: {:?}", e);
            return;
        }
    };

    let img_loaded = img.clone();
    let label = short_label(src);
    let onload = Closure::wrap(Box::new(move || match decode_rgba(&img_loaded) {
        Ok(image) => {
            let (w, h) = (image.width, image.height);
            if queued.borrow_mut().offer(ticket, image) {
                log::info!("[image] decoded {} ({}x{})", label, w, h);
            } else {
                log::info!("[image] discarded {}: a newer image was requested", label);
            }
        }
        Err(e) => log::warn!("[image] decode failed for {}: {:?}", label, e),
    }) as Box<dyn FnMut()>);

    let label_err = short_label(src);
    let onerror = Closure::wrap(Box::new(move || {
        log::warn!("[image] failed to load {}", label_err);
    }) as Box<dyn FnMut()>);

    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();
    img.set_src(src);
}

/// Read a dropped file as a data URL and decode it. The load is stamped at
/// drop time so a later drop always wins.
pub fn load_file(file: &web::File, queued: QueuedImage) {
    let reader = match web::FileReader::new() {
        Ok(r) => r,
        Err(e) => {
            log::warn!("[image] cannot create FileReader: {:?}", e);
            return;
        }
    };
    let ticket = queued.borrow_mut().begin_load();
    let reader_done = reader.clone();
    let onload = Closure::wrap(Box::new(move || {
        match reader_done.result().ok().and_then(|v| v.as_string()) {
            Some(url) => decode_into_queue(&url, ticket, queued.clone()),
            None => log::warn!("[image] dropped file produced no data URL"),
        }
    }) as Box<dyn FnMut()>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    if let Err(e) = reader.read_as_data_url(file) {
        log::warn!("[image] read_as_data_url failed: {:?}", e);
    }
}

fn decode_rgba(img: &web::HtmlImageElement) -> anyhow::Result<PanoramaImage> {
    let (w, h) = input::fit_texture_size(
        img.natural_width(),
        img.natural_height(),
        MAX_TEXTURE_DIMENSION,
    );
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(w);
    canvas.set_height(h);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    PanoramaImage::new(w, h, data.data().0)
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {}x{}", w, h))
}

fn short_label(src: &str) -> String {
    if src.starts_with("data:") {
        "dropped file".to_string()
    } else {
        src.to_string()
    }
}
