use crate::constants::{CURSOR_ATTR, DIAL_ID, DIAL_SECTOR_ATTR};
use crate::core::{Capabilities, DialGeometry};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// CSS-pixel viewport size.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (1.0, 1.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    (width as f32, height as f32)
}

#[inline]
pub fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

/// Capabilities declared on the element itself (tag plus `data-cursor`).
pub fn capabilities_of(el: Option<&web::Element>) -> Capabilities {
    match el {
        Some(el) => Capabilities::from_markup(&el.tag_name(), el.get_attribute(CURSOR_ATTR).as_deref()),
        None => Capabilities::NONE,
    }
}

/// Mode index declared by a dial sector element.
pub fn sector_index(el: Option<&web::Element>) -> Option<usize> {
    el?.get_attribute(DIAL_SECTOR_ATTR)?.parse().ok()
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_style(document: &web::Document, id: &str, style: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute("style", style);
    }
}

pub fn set_class(document: &web::Document, id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
    }
}

/// Dial hit circle from the dial element's on-screen rect.
pub fn dial_geometry(document: &web::Document) -> Option<DialGeometry> {
    let el = document.get_element_by_id(DIAL_ID)?;
    let rect = el.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    Some(DialGeometry {
        center: [
            (rect.left() + rect.width() * 0.5) as f32,
            (rect.top() + rect.height() * 0.5) as f32,
        ],
        radius: (rect.width().min(rect.height()) * 0.5) as f32,
    })
}

/// Monotonic milliseconds, the clock every session call is driven by.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
