#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, CONTAINER_ID, DEFAULT_PANO_SRC, PANO_SRC_ATTR};
use pano_core::{ImageQueue, ViewerSession};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod image;
mod input;
mod markers;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pano-web starting");

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

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Drags start anywhere in the container (markers included); fall back to the canvas
    let container: web::HtmlElement = document
        .get_element_by_id(CONTAINER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .unwrap_or_else(|| canvas.clone().into());
    _ = container.style().set_property("touch-action", "none");

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let collected = markers::collect_hotspots(&document)?;
    let session = ViewerSession::new(
        collected.descriptors,
        collected.popups.len(),
        dom::css_viewport(&canvas),
    )?;
    log::info!(
        "[hotspots] {} markers, {} popups",
        session.hotspots.len(),
        collected.popups.len()
    );

    let wiring = events::ViewerWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        session: Rc::new(RefCell::new(session)),
        markers: Rc::new(RefCell::new(collected.markers)),
        popups: Rc::new(RefCell::new(collected.popups)),
        queued_image: Rc::new(RefCell::new(ImageQueue::default())),
    };
    wiring.resync();
    events::wire_all(&wiring, container.as_ref());

    let src = canvas
        .get_attribute(PANO_SRC_ATTR)
        .unwrap_or_else(|| DEFAULT_PANO_SRC.to_string());
    image::load_panorama(&src, wiring.queued_image.clone());

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session: wiring.session.clone(),
        canvas,
        gpu,
        queued_image: wiring.queued_image.clone(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
