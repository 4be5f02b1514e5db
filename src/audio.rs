//! Audio output for the native host
//!
//! The square channel takes an 11-bit rate value `r` and sounds at
//! `131072 / (2048 - r)` Hz. There is no synth here; triggers are logged and
//! the most recent one is kept for the status line.

use crate::ports::AudioSink;
use crate::sim::sequencer::notes;

/// Frequency in Hz for a square-channel rate value
pub fn note_hz(rate: u16) -> f32 {
    let rate = rate.min(2047);
    131_072.0 / f32::from(2048 - rate)
}

/// Name of a note the song uses
pub fn note_name(rate: u16) -> Option<&'static str> {
    match rate {
        notes::A => Some("A"),
        notes::A_SHARP => Some("A#"),
        notes::B => Some("B"),
        notes::C => Some("C"),
        notes::D => Some("D"),
        notes::D_HIGH => Some("D'"),
        notes::F => Some("F"),
        notes::G => Some("G"),
        notes::G_SHARP => Some("G#"),
        _ => None,
    }
}

/// Audio sink that logs each trigger
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
    last: Option<u16>,
    triggers: u64,
}

impl LogAudio {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            ..Default::default()
        }
    }

    /// Mute/unmute
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Most recent rate value, if any
    pub fn last(&self) -> Option<u16> {
        self.last
    }

    pub fn trigger_count(&self) -> u64 {
        self.triggers
    }
}

impl AudioSink for LogAudio {
    fn trigger(&mut self, rate: u16) {
        if self.muted {
            return;
        }
        self.last = Some(rate);
        self.triggers += 1;
        log::debug!(
            "note {} ({:.1} Hz)",
            note_name(rate).unwrap_or("?"),
            note_hz(rate)
        );
    }
}
