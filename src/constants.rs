// Browser-side constants. Choreography and simulation tuning lives in `core::constants`.

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const DIAL_ID: &str = "mode-dial";
pub const DIAL_FACE_ID: &str = "mode-dial-face";
pub const RETICLE_ID: &str = "focus-reticle";
pub const RETICLE_TRAIL_ID: &str = "focus-trail";
pub const RETICLE_INNER_ID: &str = "focus-reticle-inner";
pub const HUD_ID: &str = "viewfinder-hud";
pub const HUD_MODE_ID: &str = "hud-mode";
pub const HUD_FOCUS_ID: &str = "hud-focus";
pub const HUD_REC_ID: &str = "hud-rec";
pub const HUD_AUDIO_ID: &str = "hud-audio";

// Attribute carrying a dial sector's mode index
pub const DIAL_SECTOR_ATTR: &str = "data-mode";
// Attribute declaring an element's cursor capability
pub const CURSOR_ATTR: &str = "data-cursor";

// Camera
// Z distance used by both picking and the cursor projection extent.
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;

// Post-processing defaults
pub const BLOOM_STRENGTH: f32 = 0.7;
pub const BLOOM_THRESHOLD: f32 = 0.65;
pub const VIGNETTE_STRENGTH: f32 = 0.35;
pub const VIGNETTE_STRENGTH_ABOUT: f32 = 0.6; // darker, film-lab look
pub const GRAIN_STRENGTH: f32 = 0.04;

// Clear colour (near-black, slightly warm)
pub const CLEAR_RGB: [f64; 3] = [0.02, 0.018, 0.016];
