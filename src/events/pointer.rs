use super::Shared;
use crate::constants::CANVAS_ID;
use crate::{camera, dom, input};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer(shared: &Shared) {
    wire_pointermove(shared);
    wire_pointerdown(shared);
    wire_pointerup(shared);
    wire_sector_click(shared);
    wire_leave_enter(shared);
    wire_wheel(shared);
}

fn wire_pointermove(shared: &Shared) {
    let shared = shared.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let el = dom::event_element(&ev);
        let caps = dom::capabilities_of(el.as_ref());
        // only pick scene objects when nothing in the DOM sits on top
        let over_canvas = el.as_ref().is_some_and(|e| e.id() == CANVAS_ID);
        let hit = over_canvas
            .then(|| {
                let (w, h) = dom::viewport_size();
                let (ro, rd) = camera::screen_to_world_ray(w, h, x, y);
                input::pick_nearest(ro, rd, shared.session.borrow().sim().pick_targets())
            })
            .flatten();
        shared.drive_now(|s, now, cues| s.pointer_move(x, y, caps, hit, now, cues));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(shared: &Shared) {
    let shared = shared.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        shared.player.borrow_mut().resume();
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let dragging = shared.drive_now(|s, _now, cues| s.pointer_down(x, y, cues));
        if dragging {
            log::debug!("[pointer] dial drag start");
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(shared: &Shared) {
    let shared = shared.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        shared.session.borrow_mut().pointer_up();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_sector_click(shared: &Shared) {
    let shared = shared.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(index) = dom::sector_index(dom::event_element(&ev).as_ref()) else {
            return;
        };
        let accepted = shared.drive_now(|s, now, cues| s.dial_sector_click(index, now, cues));
        log::debug!("[pointer] sector {} click accepted={}", index, accepted);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_leave_enter(shared: &Shared) {
    let Some(root) = shared.document.document_element() else {
        return;
    };
    let leave_shared = shared.clone();
    let leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        leave_shared.drive_now(|s, now, _cues| s.pointer_leave(now));
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("pointerleave", leave.as_ref().unchecked_ref());
    leave.forget();

    let enter_shared = shared.clone();
    let enter = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        enter_shared.session.borrow_mut().pointer_enter();
    }) as Box<dyn FnMut(_)>);
    _ = root.add_event_listener_with_callback("pointerenter", enter.as_ref().unchecked_ref());
    enter.forget();
}

fn wire_wheel(shared: &Shared) {
    let shared = shared.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // the page never scrolls; the wheel belongs to the dial and the strip
        ev.prevent_default();
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let delta = ev.delta_y();
        shared.drive_now(|s, now, cues| s.wheel(x, y, delta, now, cues));
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}
