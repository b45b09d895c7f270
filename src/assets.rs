//! Image preloading for scenes that wait on remote resources. A card stays
//! invisible until its image settles, then fades in.

use crate::core::ObjectId;
use crate::dom;
use crate::events::Shared;
use fnv::FnvHashSet;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Default)]
pub struct ImageLoader {
    // urls already settled; revisiting a scene marks them loaded immediately
    settled: Rc<RefCell<FnvHashSet<&'static str>>>,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, shared: &Shared, id: ObjectId, url: &'static str) {
        if self.settled.borrow().contains(url) {
            shared.session.borrow_mut().mark_loaded(id, dom::now_ms());
            return;
        }
        let img = match web::HtmlImageElement::new() {
            Ok(img) => img,
            Err(e) => {
                log::warn!("[assets] image element error: {:?}", e);
                shared.session.borrow_mut().mark_loaded(id, dom::now_ms());
                return;
            }
        };
        img.set_cross_origin(Some("anonymous"));

        // A failed load still reveals the card with its tint.
        let on_load = self.settle_callback(shared, id, url, true);
        let on_error = self.settle_callback(shared, id, url, false);
        img.set_onload(Some(on_load.unchecked_ref()));
        img.set_onerror(Some(on_error.unchecked_ref()));
        img.set_src(url);
    }

    fn settle_callback(&self, shared: &Shared, id: ObjectId, url: &'static str, ok: bool) -> JsValue {
        let shared = shared.clone();
        let settled = self.settled.clone();
        Closure::once_into_js(move || {
            if ok {
                log::debug!("[assets] loaded {}", url);
            } else {
                log::warn!("[assets] failed to load {}", url);
            }
            settled.borrow_mut().insert(url);
            shared.session.borrow_mut().mark_loaded(id, dom::now_ms());
        })
    }
}

