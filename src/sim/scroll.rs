//! Two-layer parallax for the star backgrounds
//!
//! The near layer moves one pixel every tick, the far layer every other tick.

use crate::consts::SCROLL_MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parallax {
    pub near: u16,
    pub far: u16,
    /// Whether the far layer moves on the next advance
    pub far_due: bool,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            near: 0,
            far: 0,
            far_due: true,
        }
    }
}

impl Parallax {
    /// Returns the (near, far) offsets to latch this tick, then moves both layers on
    pub fn advance(&mut self) -> (u16, u16) {
        let latched = (self.near, self.far);

        self.near += 1;
        if self.near > SCROLL_MAX {
            self.near = 0;
        }

        if self.far_due {
            self.far += 1;
        }
        self.far_due = !self.far_due;
        if self.far > SCROLL_MAX {
            self.far = 0;
        }

        latched
    }
}
