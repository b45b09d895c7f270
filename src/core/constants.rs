// Shared choreography/simulation tuning constants. Nothing in here touches the browser.

// Shutter choreography (milliseconds)
pub const SHUTTER_CLOSE_MS: f64 = 200.0; // iris closing, content still visible underneath
pub const SHUTTER_SWAP_PAUSE_MS: f64 = 150.0; // fully closed, mode content swapped
pub const SHUTTER_OPEN_MS: f64 = 300.0; // iris reopening

// Dial
pub const DIAL_SETTLE_SEC: f32 = 0.4; // elastic settle after a mode change
pub const DIAL_ELASTIC_PERIOD: f32 = 0.5; // elastic.out(1, 0.5)

// Cursor projection: ndc -> scene units, fixed regardless of viewport aspect.
// Repulsion radius and safe region are tuned against it.
pub const CURSOR_EXTENT: [f32; 2] = [10.0, 10.0];

// Cursor repulsion
pub const REPEL_RADIUS: f32 = 5.0;
pub const REPEL_GAIN: f32 = 0.01; // per frame, times (radius - distance)
pub const REPEL_MIN_STEP: f32 = 0.002; // keeps the push from stalling just inside the radius

// UI exclusion zones (ndc centre + ndc radius)
pub const DIAL_ZONE_CENTER: [f32; 2] = [0.82, -0.78];
pub const DIAL_ZONE_RADIUS: f32 = 0.28;
pub const ZONE_GAIN: f32 = 0.02;

// Safe region as a fraction of the cursor extent
pub const SAFE_FRACTION: [f32; 2] = [0.9, 0.8];
pub const SAFE_DEPTH: [f32; 2] = [-12.0, 2.0]; // z range

// Idle motion
pub const BOB_AMPLITUDE: f32 = 0.06;
pub const BOB_RATE: f32 = 0.5; // rad/s
pub const SPIN_RATE: [f32; 2] = [0.03, 0.06]; // x, y rad/s

// Hover emphasis
pub const HOVER_TWEEN_SEC: f32 = 0.3;
pub const HOVER_SCALE_BOOST: f32 = 0.25;
pub const EMISSIVE_IDLE: f32 = 0.1;
pub const EMISSIVE_HOVER: f32 = 0.6;

// Image-gated objects fade in once loaded
pub const LOAD_FADE_SEC: f32 = 0.5;

// Reticle smoothing (seconds)
pub const RETICLE_TAU_SEC: f32 = 0.1;
pub const RETICLE_TRAIL_TAU_SEC: f32 = 0.3;
pub const RETICLE_FOCUS_SCALE: f32 = 0.8;
pub const RETICLE_SCALE_TWEEN_SEC: f32 = 0.15;

// Portfolio focus strip
pub const CARD_SPACING: f32 = 3.0;
pub const CARD_FOCUS_Z: f32 = 1.0;
pub const CARD_FOCUS_SCALE: f32 = 1.2;
pub const CARD_RECEDE_Z: f32 = 0.5; // per index of distance
pub const CARD_SHRINK: f32 = 0.1; // per index of distance
pub const CARD_EASE_TAU_SEC: f32 = 0.25;

// Scene layout
pub const HOME_FRAME_COUNT: usize = 60;
pub const DEFAULT_SEED: u64 = 42;
