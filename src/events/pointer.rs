use super::ViewerWiring;
use pano_core::PointerSample;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn sample(ev: &web::PointerEvent) -> PointerSample {
    PointerSample {
        x: ev.client_x() as f32,
        y: ev.client_y() as f32,
        primary: ev.is_primary(),
    }
}

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;

/// Document-level move/up listeners that only exist between a pointer-down
/// and its matching pointer-up.
struct DragListeners {
    document: web::Document,
    on_move: PointerClosure,
    on_up: PointerClosure,
}

impl DragListeners {
    fn attach(&self) {
        _ = self
            .document
            .add_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        _ = self
            .document
            .add_event_listener_with_callback("pointerup", self.on_up.as_ref().unchecked_ref());
    }

    fn detach(&self) {
        _ = self.document.remove_event_listener_with_callback(
            "pointermove",
            self.on_move.as_ref().unchecked_ref(),
        );
        _ = self.document.remove_event_listener_with_callback(
            "pointerup",
            self.on_up.as_ref().unchecked_ref(),
        );
    }
}

pub fn wire_pointer_handlers(w: &ViewerWiring, container: &web::EventTarget) {
    let slot: Rc<RefCell<Option<DragListeners>>> = Rc::new(RefCell::new(None));
    let attached = Rc::new(RefCell::new(false));

    let w_move = w.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w_move.session.borrow_mut().pointer_move(sample(&ev)) {
            w_move.resync();
        }
    }) as Box<dyn FnMut(_)>);

    let w_up = w.clone();
    let slot_up = slot.clone();
    let attached_up = attached.clone();
    let on_up = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w_up.session.borrow_mut().pointer_up(sample(&ev)) {
            return;
        }
        if let Some(listeners) = slot_up.borrow().as_ref() {
            listeners.detach();
        }
        *attached_up.borrow_mut() = false;
        log::debug!("[pointer] drag end");
    }) as Box<dyn FnMut(_)>);

    *slot.borrow_mut() = Some(DragListeners {
        document: w.document.clone(),
        on_move,
        on_up,
    });

    let w_down = w.clone();
    let on_down = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w_down.session.borrow_mut().pointer_down(sample(&ev)) {
            return;
        }
        // A lost pointer-up must not leave a second set of listeners behind
        if !*attached.borrow() {
            if let Some(listeners) = slot.borrow().as_ref() {
                listeners.attach();
            }
            *attached.borrow_mut() = true;
        }
        log::debug!("[pointer] drag start at ({}, {})", ev.client_x(), ev.client_y());
    }) as Box<dyn FnMut(_)>);
    _ = container.add_event_listener_with_callback("pointerdown", on_down.as_ref().unchecked_ref());
    on_down.forget();
}
