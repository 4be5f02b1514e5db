//! Survival score: one point per 60 ticks of play

use crate::consts::{SCORE_DIGITS, SCORE_SUBTICKS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreCounter {
    pub score: u32,
    /// Ticks since the last point
    pub subtick: u16,
}

impl ScoreCounter {
    /// Advance one tick. Returns the new score when it changes.
    pub fn step(&mut self) -> Option<u32> {
        self.subtick += 1;
        if self.subtick > SCORE_SUBTICKS - 1 {
            self.score = self.score.wrapping_add(1);
            self.subtick = 0;
            return Some(self.score);
        }
        None
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn digits(&self) -> [u8; SCORE_DIGITS] {
        score_digits(self.score)
    }
}

/// Decimal digits, most significant first; scores past 99999 show their low five digits
pub fn score_digits(score: u32) -> [u8; SCORE_DIGITS] {
    let mut digits = [0u8; SCORE_DIGITS];
    let mut rest = score;
    for d in digits.iter_mut().rev() {
        *d = (rest % 10) as u8;
        rest /= 10;
    }
    digits
}
