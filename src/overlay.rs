//! Viewfinder HUD, dial face and reticle DOM updates. Each element is written
//! only when its derived value changed since the previous frame.

use crate::constants::*;
use crate::core::reticle::ReticleView;
use crate::core::{Mode, Session};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    dom::set_class(document, HUD_ID, "hidden", false);
}

#[inline]
pub fn hide(document: &web::Document) {
    dom::set_class(document, HUD_ID, "hidden", true);
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HUD_ID)
        .map(|el| el.class_list().contains("hidden"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

#[derive(Default)]
pub struct Hud {
    mode: Option<Mode>,
    focus: Option<Option<String>>,
    audio: Option<bool>,
    dial_deg: Option<i32>,
    reticle: Option<ReticleView>,
}

impl Hud {
    pub fn update(&mut self, document: &web::Document, session: &Session, now_ms: f64) {
        let nav = session.nav();

        let mode = nav.current_mode();
        if self.mode != Some(mode) {
            dom::set_text(document, HUD_MODE_ID, &format!("{} · {}", mode.glyph(), mode.label()));
            dom::set_class(document, HUD_REC_ID, "active", mode == Mode::Contact);
            self.mode = Some(mode);
        }

        let focus = nav.is_focused().then(|| nav.focus_target().unwrap_or("").to_string());
        if self.focus.as_ref() != Some(&focus) {
            let text = match &focus {
                Some(target) if !target.is_empty() => format!("AF LOCK · {}", target),
                Some(_) => "AF LOCK".to_string(),
                None => "AF".to_string(),
            };
            dom::set_text(document, HUD_FOCUS_ID, &text);
            dom::set_class(document, HUD_FOCUS_ID, "locked", focus.is_some());
            self.focus = Some(focus);
        }

        let audio = nav.audio_enabled();
        if self.audio != Some(audio) {
            dom::set_text(document, HUD_AUDIO_ID, if audio { "♪ ON" } else { "♪ OFF" });
            self.audio = Some(audio);
        }

        // tenth-of-a-degree resolution is plenty for a CSS rotate
        let dial = session.dial_rotation(now_ms);
        let dial_key = (dial * 10.0).round() as i32;
        if self.dial_deg != Some(dial_key) {
            dom::set_style(document, DIAL_FACE_ID, &format!("transform: rotate({:.1}deg)", dial));
            self.dial_deg = Some(dial_key);
        }

        let view = session.reticle_view(now_ms);
        if self.reticle != Some(view) {
            write_reticle(document, &view);
            self.reticle = Some(view);
        }
    }
}

fn write_reticle(document: &web::Document, view: &ReticleView) {
    let display = if view.visible { "" } else { "display:none;" };
    dom::set_style(
        document,
        RETICLE_ID,
        &format!(
            "{}transform: translate({:.1}px, {:.1}px) translate(-50%, -50%)",
            display, view.reticle[0], view.reticle[1]
        ),
    );
    dom::set_style(
        document,
        RETICLE_TRAIL_ID,
        &format!(
            "{}transform: translate({:.1}px, {:.1}px) translate(-50%, -50%)",
            display, view.trail[0], view.trail[1]
        ),
    );
    dom::set_style(
        document,
        RETICLE_INNER_ID,
        &format!("transform: scale({:.3})", view.inner_scale),
    );
    if let Some(el) = document.get_element_by_id(RETICLE_ID) {
        // one state class at a time
        _ = el.set_attribute(
            "class",
            &format!(
                "reticle {}{}",
                view.state.class_name(),
                if view.focused { " focused" } else { "" }
            ),
        );
    }
}
