use super::Shared;
use crate::core::KeyIntent;
use crate::overlay;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, shared: &Shared) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    shared.player.borrow_mut().resume();
    let key = ev.key();
    let intent = shared.drive_now(|s, now, cues| s.key(&key, now, cues));
    match intent {
        Some(KeyIntent::ToggleHud) => {
            overlay::toggle(&shared.document);
            ev.prevent_default();
        }
        Some(KeyIntent::ToggleAudio) => {
            log::info!(
                "[keys] audio enabled={}",
                shared.session.borrow().nav().audio_enabled()
            );
        }
        // arrows would otherwise scroll
        Some(KeyIntent::Step(_)) => ev.prevent_default(),
        Some(KeyIntent::Select(_)) | None => {}
    }
}

pub fn wire_keyboard(shared: &Shared) {
    if let Some(window) = web::window() {
        let shared = shared.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &shared);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
