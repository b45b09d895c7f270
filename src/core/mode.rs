//! The closed, ordered set of navigation modes.
//!
//! Ordering is significant: it defines the dial sector of each mode and the
//! direction a wheel step moves in.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Home,
    Portfolio,
    Films,
    Services,
    About,
    Contact,
}

pub const MODE_COUNT: usize = 6;

pub const MODES: [Mode; MODE_COUNT] = [
    Mode::Home,
    Mode::Portfolio,
    Mode::Films,
    Mode::Services,
    Mode::About,
    Mode::Contact,
];

impl Default for Mode {
    fn default() -> Self {
        MODES[0]
    }
}

impl Mode {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Mode::Home => 0,
            Mode::Portfolio => 1,
            Mode::Films => 2,
            Mode::Services => 3,
            Mode::About => 4,
            Mode::Contact => 5,
        }
    }

    /// Any integer maps onto the set; indices wrap modulo the mode count.
    #[inline]
    pub fn from_index(index: i64) -> Mode {
        MODES[index.rem_euclid(MODE_COUNT as i64) as usize]
    }

    /// Cyclic step by the sign of `direction` (zero stays put).
    pub fn step(self, direction: i32) -> Mode {
        Mode::from_index(self.index() as i64 + direction.signum() as i64)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Home => "HOME",
            Mode::Portfolio => "PORTFOLIO",
            Mode::Films => "FILMS",
            Mode::Services => "SERVICES",
            Mode::About => "ABOUT",
            Mode::Contact => "CONTACT",
        }
    }

    /// Short dial engraving, camera style.
    pub fn glyph(self) -> &'static str {
        match self {
            Mode::Home => "M",
            Mode::Portfolio => "Av",
            Mode::Films => "Tv",
            Mode::Services => "P",
            Mode::About => "ISO",
            Mode::Contact => "REC",
        }
    }

    /// Degrees covered by one dial sector.
    #[inline]
    pub fn sector_degrees() -> f32 {
        360.0 / MODE_COUNT as f32
    }

    /// Dial rotation (degrees) that puts this mode under the indicator notch.
    #[inline]
    pub fn dial_rotation(self) -> f32 {
        -(self.index() as f32) * Mode::sector_degrees()
    }
}
