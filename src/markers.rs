use crate::constants::{HIDDEN_CLASS, HOTSPOT_SELECTOR, POPUP_CHILD_INDEX, POSITION_ATTR};
use crate::input;
use pano_core::{HotspotDescriptor, MarkerElement, Visibility};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn show_element(el: &web::Element) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    // fallback for pages without the CSS class
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().remove_property("display");
    }
}

#[inline]
fn hide_element(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property("display", "none");
    }
}

/// Hotspot marker backed by a DOM element positioned with a CSS transform.
pub struct DomMarker {
    el: web::HtmlElement,
    shown: Option<bool>,
}

impl DomMarker {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el, shown: None }
    }

    pub fn element(&self) -> &web::HtmlElement {
        &self.el
    }
}

impl Visibility for DomMarker {
    fn show(&mut self) {
        if self.shown != Some(true) {
            show_element(&self.el);
            self.shown = Some(true);
        }
    }

    fn hide(&mut self) {
        if self.shown != Some(false) {
            hide_element(&self.el);
            self.shown = Some(false);
        }
    }
}

impl MarkerElement for DomMarker {
    fn set_screen_position(&mut self, x: f32, y: f32) {
        _ = self
            .el
            .style()
            .set_property("transform", &input::translate_css(x, y));
    }
}

/// Popup content living inside a hotspot element.
pub struct DomPopup {
    el: web::Element,
}

impl Visibility for DomPopup {
    fn show(&mut self) {
        show_element(&self.el);
    }

    fn hide(&mut self) {
        hide_element(&self.el);
    }
}

pub struct CollectedHotspots {
    pub descriptors: Vec<HotspotDescriptor>,
    pub markers: Vec<DomMarker>,
    pub popups: Vec<DomPopup>,
}

/// Read every `.hotspot` element into descriptors, markers and popups.
///
/// Positions are passed through raw; the registry rejects malformed ones.
/// Popups start hidden.
pub fn collect_hotspots(document: &web::Document) -> anyhow::Result<CollectedHotspots> {
    let nodes = document
        .query_selector_all(HOTSPOT_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut out = CollectedHotspots {
        descriptors: Vec::new(),
        markers: Vec::new(),
        popups: Vec::new(),
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let index = out.markers.len();
        let popup = el.children().item(POPUP_CHILD_INDEX).map(|popup_el| {
            hide_element(&popup_el);
            out.popups.push(DomPopup { el: popup_el });
            out.popups.len() - 1
        });
        out.descriptors.push(HotspotDescriptor {
            id: input::hotspot_id(&el.id(), index),
            position: el.get_attribute(POSITION_ATTR).unwrap_or_default(),
            popup,
        });
        out.markers.push(DomMarker::new(el));
    }
    Ok(out)
}
