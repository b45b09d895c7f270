//! Pointer tracking and cursor-state classification.
//!
//! Targets carry an explicit capability set declared when they are created
//! (DOM elements via markup, scene objects via their descriptor); the tracker
//! only checks membership and never walks a tree.

use super::nav::NavigationState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    pub interactive: bool,
    pub draggable: bool,
    pub capture_target: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        interactive: false,
        draggable: false,
        capture_target: false,
    };
    pub const INTERACTIVE: Capabilities = Capabilities {
        interactive: true,
        draggable: false,
        capture_target: false,
    };
    pub const DRAGGABLE: Capabilities = Capabilities {
        interactive: true,
        draggable: true,
        capture_target: false,
    };
    pub const CAPTURE: Capabilities = Capabilities {
        interactive: true,
        draggable: false,
        capture_target: true,
    };

    pub fn union(self, other: Capabilities) -> Capabilities {
        Capabilities {
            interactive: self.interactive || other.interactive,
            draggable: self.draggable || other.draggable,
            capture_target: self.capture_target || other.capture_target,
        }
    }

    /// Capabilities implied by an element's tag plus its declared `data-cursor` token.
    pub fn from_markup(tag_name: &str, declared: Option<&str>) -> Capabilities {
        let base = match tag_name.to_ascii_lowercase().as_str() {
            "button" | "a" | "input" | "select" | "textarea" | "label" => Capabilities::INTERACTIVE,
            _ => Capabilities::NONE,
        };
        let declared = match declared {
            Some("interactive") | Some("hover") => Capabilities::INTERACTIVE,
            Some("drag") => Capabilities::DRAGGABLE,
            Some("capture") => Capabilities::CAPTURE,
            _ => Capabilities::NONE,
        };
        base.union(declared)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorState {
    #[default]
    Default,
    Hover,
    Drag,
    Capture,
}

impl CursorState {
    /// Priority: capture > drag > hover > default.
    pub fn classify(caps: Capabilities) -> CursorState {
        if caps.capture_target {
            CursorState::Capture
        } else if caps.draggable {
            CursorState::Drag
        } else if caps.interactive {
            CursorState::Hover
        } else {
            CursorState::Default
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            CursorState::Default => "default",
            CursorState::Hover => "hover",
            CursorState::Drag => "drag",
            CursorState::Capture => "capture",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorTracker {
    state: CursorState,
    visible: bool,
    // a pointer position has been reported at least once
    seen: bool,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> CursorState {
        self.state
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn has_position(&self) -> bool {
        self.seen
    }

    /// Record a pointer move over a target with `caps`. Returns true if the
    /// derived cursor state changed.
    pub fn on_pointer_move(
        &mut self,
        nav: &mut NavigationState,
        x: f32,
        y: f32,
        caps: Capabilities,
    ) -> bool {
        nav.set_cursor(x, y);
        self.visible = true;
        self.seen = true;
        let next = CursorState::classify(caps);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    pub fn on_pointer_leave(&mut self) {
        self.visible = false;
    }

    pub fn on_pointer_enter(&mut self) {
        self.visible = true;
    }
}
