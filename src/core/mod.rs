pub mod carousel;
pub mod constants;
pub mod cue;
pub mod cursor;
pub mod focus;
pub mod keys;
pub mod mode;
pub mod nav;
pub mod reticle;
pub mod scenes;
pub mod selector;
pub mod session;
pub mod shutter;
pub mod sim;
pub mod tween;

pub use cue::Cue;
pub use cursor::{Capabilities, CursorState};
pub use keys::KeyIntent;
pub use mode::{Mode, MODES, MODE_COUNT};
pub use nav::{ModeRequest, NavigationState};
pub use selector::DialGeometry;
pub use session::{Session, SessionConfig};
pub use sim::{ObjectId, RenderInstance};
