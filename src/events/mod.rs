use crate::image::QueuedImage;
use crate::markers::{DomMarker, DomPopup};
use pano_core::ViewerSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod drop;
pub mod pointer;
pub mod viewport;

/// Shared handles every listener closes over.
#[derive(Clone)]
pub struct ViewerWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<ViewerSession>>,
    pub markers: Rc<RefCell<Vec<DomMarker>>>,
    pub popups: Rc<RefCell<Vec<DomPopup>>>,
    pub queued_image: QueuedImage,
}

impl ViewerWiring {
    /// Re-project all hotspots for the current pose and push the result to
    /// the DOM.
    pub fn resync(&self) {
        let report = {
            let mut markers = self.markers.borrow_mut();
            self.session.borrow_mut().sync(&mut markers)
        };
        log::debug!(
            "[hotspots] visible={} hidden={}",
            report.visible,
            report.hidden
        );
    }
}

pub fn wire_all(w: &ViewerWiring, container: &web::EventTarget) {
    pointer::wire_pointer_handlers(w, container);
    viewport::wire_wheel(w);
    viewport::wire_resize(w);
    drop::wire_file_drop(w);
    wire_marker_clicks(w);
}

fn wire_marker_clicks(w: &ViewerWiring) {
    let elements: Vec<web::HtmlElement> = w
        .markers
        .borrow()
        .iter()
        .map(|m| m.element().clone())
        .collect();
    for (i, el) in elements.into_iter().enumerate() {
        let w = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            let change = {
                let mut popups = w.popups.borrow_mut();
                w.session.borrow_mut().trigger_popup(i, &mut popups)
            };
            if !change.is_empty() {
                log::info!(
                    "[popup] hotspot {} show={:?} hide={:?}",
                    i,
                    change.show,
                    change.hide
                );
            }
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
