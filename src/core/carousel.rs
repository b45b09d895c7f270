//! Portfolio focus strip: one card in focus, the rest recede with distance.

use glam::Vec3;

use super::constants::{CARD_FOCUS_SCALE, CARD_FOCUS_Z, CARD_RECEDE_Z, CARD_SHRINK, CARD_SPACING};

/// Target placement for one card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardAnchor {
    pub index: usize,
    pub position: Vec3,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioFocus {
    index: usize,
    count: usize,
}

impl PortfolioFocus {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Move one card by the sign of `direction`, clamped at both ends.
    /// Returns true if the focused card changed.
    pub fn step(&mut self, direction: i32) -> bool {
        if self.count == 0 {
            return false;
        }
        let next = (self.index as i64 + direction.signum() as i64).clamp(0, self.count as i64 - 1) as usize;
        self.select(next)
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count || index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    pub fn anchor(&self, index: usize) -> CardAnchor {
        let distance = (index as f32 - self.index as f32).abs();
        let focused = index == self.index;
        let blur = (distance * 0.3).min(1.0);
        CardAnchor {
            index,
            // the strip slides so the focused card sits at x = 0
            position: Vec3::new(
                (index as f32 - self.index as f32) * CARD_SPACING,
                0.0,
                if focused { CARD_FOCUS_Z } else { -distance * CARD_RECEDE_Z },
            ),
            scale: if focused {
                CARD_FOCUS_SCALE
            } else {
                (1.0 - distance * CARD_SHRINK).max(0.3)
            },
            opacity: 1.0 - blur * 0.5,
        }
    }

    pub fn anchors(&self) -> impl Iterator<Item = CardAnchor> + '_ {
        (0..self.count).map(move |i| self.anchor(i))
    }
}
