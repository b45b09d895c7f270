use crate::assets::ImageLoader;
use crate::constants::{VIGNETTE_STRENGTH, VIGNETTE_STRENGTH_ABOUT};
use crate::core::{Mode, RenderInstance};
use crate::events::Shared;
use crate::overlay::Hud;
use crate::{camera, dom, render};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub shared: Shared,
    pub hud: Hud,
    pub images: ImageLoader,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_ms: f64,
    pub instances: Vec<RenderInstance>,
}

impl<'a> FrameContext<'a> {
    pub fn new(shared: Shared, canvas: web::HtmlCanvasElement, gpu: Option<render::GpuState<'a>>) -> Self {
        Self {
            shared,
            hud: Hud::default(),
            images: ImageLoader::new(),
            canvas,
            gpu,
            last_ms: dom::now_ms(),
            instances: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = dom::now_ms();
        let dt_sec = ((now - self.last_ms) / 1000.0).max(0.0) as f32;
        self.last_ms = now;

        self.shared.drive(now, |s, now, cues| s.tick(now, cues));

        let requests = self.shared.session.borrow_mut().take_image_requests();
        for (id, url) in requests {
            self.images.request(&self.shared, id, url);
        }

        let (aperture, mode) = {
            let session = self.shared.session.borrow();
            self.hud.update(&self.shared.document, &session, now);
            self.instances.clear();
            self.instances.extend(session.instances(now));
            (session.aperture(now), session.nav().current_mode())
        };

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let view_proj = camera::projection(w as f32, h as f32) * camera::view();
            let view = render::FrameView {
                view_proj,
                instances: &self.instances,
                aperture,
                vignette: if mode == Mode::About {
                    VIGNETTE_STRENGTH_ABOUT
                } else {
                    VIGNETTE_STRENGTH
                },
            };
            if let Err(e) = g.render(dt_sec, &view) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(slot: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
