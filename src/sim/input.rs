//! Button decoding and held-key craft movement

use glam::IVec2;

use crate::clamp_to;
use crate::consts::{CRAFT_MAX, CRAFT_MIN};

bitflags::bitflags! {
    /// Buttons in keypad bit order, 1 = pressed
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u16 {
        const A = 1 << 0;
        const B = 1 << 1;
        const SELECT = 1 << 2;
        const START = 1 << 3;
        const RIGHT = 1 << 4;
        const LEFT = 1 << 5;
        const UP = 1 << 6;
        const DOWN = 1 << 7;
        const R = 1 << 8;
        const L = 1 << 9;
    }
}

impl Buttons {
    /// Decode a raw active-low keypad read (0 = pressed)
    pub fn from_active_low(raw: u16) -> Self {
        Buttons::from_bits_truncate(!raw)
    }

    /// Encode as an active-low keypad read
    pub fn to_active_low(self) -> u16 {
        !self.bits()
    }
}

/// Directions in the order they are applied
const STEPS: [(Buttons, IVec2); 4] = [
    (Buttons::RIGHT, IVec2::X),
    (Buttons::LEFT, IVec2::NEG_X),
    (Buttons::UP, IVec2::NEG_Y),
    (Buttons::DOWN, IVec2::Y),
];

/// Apply one tick of held directions, one pixel each.
/// Every step is clamped to the play area before the next one is applied.
pub fn move_craft(pos: IVec2, held: Buttons) -> IVec2 {
    STEPS
        .iter()
        .filter(|(button, _)| held.contains(*button))
        .fold(pos, |p, &(_, step)| clamp_to(p + step, CRAFT_MIN, CRAFT_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_low_decoding() {
        assert_eq!(Buttons::from_active_low(0xFFFF), Buttons::empty());
        assert_eq!(Buttons::from_active_low(!0x0001), Buttons::A);
        assert_eq!(
            Buttons::from_active_low(!(0x0010 | 0x0040)),
            Buttons::RIGHT | Buttons::UP
        );
        let held = Buttons::LEFT | Buttons::DOWN;
        assert_eq!(Buttons::from_active_low(held.to_active_low()), held);
    }

    #[test]
    fn test_each_direction_moves_one_pixel() {
        let p = IVec2::new(50, 80);
        assert_eq!(move_craft(p, Buttons::RIGHT), IVec2::new(51, 80));
        assert_eq!(move_craft(p, Buttons::LEFT), IVec2::new(49, 80));
        assert_eq!(move_craft(p, Buttons::UP), IVec2::new(50, 79));
        assert_eq!(move_craft(p, Buttons::DOWN), IVec2::new(50, 81));
        assert_eq!(move_craft(p, Buttons::RIGHT | Buttons::DOWN), IVec2::new(51, 81));
        assert_eq!(move_craft(p, Buttons::RIGHT | Buttons::LEFT), p);
        assert_eq!(move_craft(p, Buttons::A), p);
    }

    #[test]
    fn test_clamped_to_play_area() {
        assert_eq!(move_craft(IVec2::new(220, 151), Buttons::RIGHT | Buttons::DOWN), IVec2::new(220, 151));
        assert_eq!(move_craft(IVec2::new(1, 1), Buttons::LEFT | Buttons::UP), IVec2::new(1, 1));
    }

    #[test]
    fn test_opposite_keys_at_an_edge() {
        let all = Buttons::RIGHT | Buttons::LEFT | Buttons::UP | Buttons::DOWN;
        // Right is absorbed by the edge, left still applies; up then down cancel
        assert_eq!(move_craft(IVec2::new(220, 151), all), IVec2::new(219, 151));
        // Left and up are absorbed at the top-left corner
        assert_eq!(move_craft(IVec2::new(1, 1), all), IVec2::new(1, 2));
        assert_eq!(move_craft(IVec2::new(220, 80), Buttons::RIGHT | Buttons::LEFT), IVec2::new(219, 80));
        assert_eq!(move_craft(IVec2::new(50, 151), Buttons::UP | Buttons::DOWN), IVec2::new(50, 151));
    }
}
