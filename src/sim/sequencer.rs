//! Chiptune step sequencer
//!
//! A fixed 64-step loop of square-channel rate values (0 = rest). One step
//! lasts `tempo` ticks; a note is triggered on the first tick of its step.

use crate::consts::{DEFAULT_TEMPO, SONG_LEN};

/// Square-channel rate values for the notes the song uses
pub mod notes {
    pub const A: u16 = 1750;
    pub const A_SHARP: u16 = 1486;
    pub const B: u16 = 1517;
    pub const C: u16 = 1574;
    pub const D: u16 = 1602;
    pub const D_HIGH: u16 = 1825;
    pub const F: u16 = 1673;
    pub const G: u16 = 1714;
    pub const G_SHARP: u16 = 1732;
}

use notes::*;

/// The looping theme: one bar per bass note (D, C, B, A#)
#[rustfmt::skip]
pub const SONG: [u16; SONG_LEN] = [
    D, D, D_HIGH, 0, A, 0, 0, G_SHARP, 0, G, 0, F, 0, D, F, G,
    C, C, D_HIGH, 0, A, 0, 0, G_SHARP, 0, G, 0, F, 0, D, F, G,
    B, B, D_HIGH, 0, A, 0, 0, G_SHARP, 0, G, 0, F, 0, D, F, G,
    A_SHARP, A_SHARP, D_HIGH, 0, A, 0, 0, G_SHARP, 0, G, 0, F, 0, D, F, G,
];

/// A note trigger produced by one sequencer step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteTrigger {
    /// Song step that produced the note
    pub step: u8,
    /// Square-channel rate value
    pub rate: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequencer {
    /// Next step to play
    pub step: u8,
    /// Ticks into the current step
    pub subtick: u16,
    /// Ticks per step (never 0)
    tempo: u16,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPO)
    }
}

impl Sequencer {
    pub fn new(tempo: u16) -> Self {
        Self {
            step: 0,
            subtick: 0,
            tempo: tempo.max(1),
        }
    }

    pub fn tempo(&self) -> u16 {
        self.tempo
    }

    /// Rewind to step 0, keeping the tempo
    pub fn rewind(&mut self) {
        self.step = 0;
        self.subtick = 0;
    }

    /// Advance one tick, returning a trigger on the first tick of a non-rest step
    pub fn step(&mut self) -> Option<NoteTrigger> {
        let mut trigger = None;
        if self.subtick == 0 {
            let rate = SONG[usize::from(self.step)];
            if rate > 0 {
                trigger = Some(NoteTrigger {
                    step: self.step,
                    rate,
                });
            }
            self.step = (self.step + 1) % SONG_LEN as u8;
        }
        self.subtick = (self.subtick + 1) % self.tempo;
        trigger
    }
}
