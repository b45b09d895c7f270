//! DOM event wiring. Every handler funnels into the shared `Session` and plays
//! whatever cues the session emitted.

mod keyboard;
mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::wire_pointer;

use crate::audio::CuePlayer;
use crate::core::{Cue, Session};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct Shared {
    pub session: Rc<RefCell<Session>>,
    pub player: Rc<RefCell<CuePlayer>>,
    pub document: web::Document,
    // (deadline_ms, timeout handle) of the armed liveness timer
    armed: Rc<Cell<Option<(f64, i32)>>>,
    // one callback shared by every arm; cancelling a timeout leaves it in place
    timer: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Shared {
    pub fn new(session: Session, document: web::Document) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
            player: Rc::new(RefCell::new(CuePlayer::new())),
            document,
            armed: Rc::new(Cell::new(None)),
            timer: Rc::new(RefCell::new(None)),
        }
    }

    /// Run `f` against the session at `now_ms`, then play the cues it produced
    /// and re-arm the choreography timer.
    pub fn drive<R>(&self, now_ms: f64, f: impl FnOnce(&mut Session, f64, &mut Vec<Cue>) -> R) -> R {
        let mut cues = Vec::new();
        let out = {
            let mut session = self.session.borrow_mut();
            f(&mut session, now_ms, &mut cues)
        };
        if !cues.is_empty() {
            self.player.borrow_mut().play_all(&cues);
        }
        self.arm_deadline(now_ms);
        out
    }

    #[inline]
    pub fn drive_now<R>(&self, f: impl FnOnce(&mut Session, f64, &mut Vec<Cue>) -> R) -> R {
        self.drive(dom::now_ms(), f)
    }

    /// Choreography must finish even when animation frames are throttled
    /// (hidden tab), so each pending deadline also gets a plain timeout.
    fn arm_deadline(&self, now_ms: f64) {
        let next = self.session.borrow().next_deadline();
        let current = self.armed.get();
        if next == current.map(|(d, _)| d) {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        if let Some((_, handle)) = current {
            window.clear_timeout_with_handle(handle);
        }
        self.armed.set(None);
        let Some(deadline) = next else {
            return;
        };
        let mut timer = self.timer.borrow_mut();
        let callback = timer.get_or_insert_with(|| {
            let this = self.clone();
            Closure::wrap(Box::new(move || {
                this.armed.set(None);
                this.drive_now(|s, now, cues| s.tick(now, cues));
            }) as Box<dyn FnMut()>)
        });
        let delay = (deadline - now_ms).ceil().max(0.0) as i32;
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(handle) => self.armed.set(Some((deadline, handle))),
            Err(e) => log::warn!("[events] setTimeout failed: {:?}", e),
        }
    }
}

/// Keep the session's view of the viewport and dial in step with the page layout.
pub fn sync_layout(shared: &Shared) {
    let (w, h) = dom::viewport_size();
    let mut session = shared.session.borrow_mut();
    session.set_viewport(w, h);
    if let Some(dial) = dom::dial_geometry(&shared.document) {
        session.set_dial(dial);
    }
}

pub fn wire_resize(shared: &Shared, canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    sync_layout(shared);
    let shared = shared.clone();
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        sync_layout(&shared);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
