use super::ViewerWiring;
use crate::dom;
use crate::input;
use web_sys as web;

pub fn wire_wheel(w: &ViewerWiring) {
    let w2 = w.clone();
    dom::add_listener(w.document.as_ref(), "wheel", move |ev: web::WheelEvent| {
        let delta = input::wheel_delta_pixels(ev.delta_y(), ev.delta_mode());
        if w2.session.borrow_mut().wheel(delta) {
            w2.resync();
        }
        let session = w2.session.borrow();
        log::debug!(
            "[wheel] fov={:.1} speed={:.3}",
            session.camera.fov_deg,
            session.camera.speed
        );
    });
}

/// Keep the canvas backing store, camera aspect and marker positions in step
/// with the window size. The renderer picks up the new backing size on its
/// next frame.
pub fn wire_resize(w: &ViewerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w2 = w.clone();
    dom::add_listener(window.as_ref(), "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&w2.canvas);
        let vp = dom::css_viewport(&w2.canvas);
        if w2.session.borrow_mut().resize(vp.width, vp.height) {
            log::info!("[viewport] {}x{}", vp.width, vp.height);
        }
        w2.resync();
    });
}
