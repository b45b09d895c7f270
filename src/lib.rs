#![cfg(target_arch = "wasm32")]
use crate::core::{Session, SessionConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod audio;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_audio_toggle(shared: &events::Shared) {
    let shared_click = shared.clone();
    dom::add_click_listener(&shared.document, constants::HUD_AUDIO_ID, move || {
        shared_click.player.borrow_mut().resume();
        let on = shared_click.session.borrow_mut().toggle_audio();
        log::info!("[hud] audio enabled={}", on);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("camera-os starting");

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
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Each visit gets a fresh HOME arrangement.
    let config = SessionConfig {
        seed: js_sys::Date::now() as u64,
        ..SessionConfig::default()
    };
    let session = Session::new(config, dom::now_ms());
    let shared = events::Shared::new(session, document.clone());

    events::wire_resize(&shared, &canvas);
    events::wire_pointer(&shared);
    events::wire_keyboard(&shared);
    wire_audio_toggle(&shared);

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("running without WebGPU; HUD and audio only");
    }
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(shared, canvas, gpu)));
    frame::start_loop(frame_ctx);
    Ok(())
}
