//! Meteor Dodge - a fixed-tick arcade dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (timers, collisions, sequencer, game state)
//! - `ports`: Narrow interfaces to input, video, audio and the refresh clock
//! - `renderer`: Turns simulation state into sprite/tile/scroll writes
//! - `platform`: Native terminal host (clock, keyboard, character display)
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod error;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod ports;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::Game;
pub use highscores::HighScores;
pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Visible screen in pixels
    pub const SCREEN_WIDTH: i32 = 240;
    pub const SCREEN_HEIGHT: i32 = 160;

    /// Craft spawn point and movable rectangle (inclusive)
    pub const CRAFT_START: IVec2 = IVec2::new(50, 80);
    pub const CRAFT_MIN: IVec2 = IVec2::new(1, 1);
    pub const CRAFT_MAX: IVec2 = IVec2::new(220, 151);

    /// Number of meteors, ids 1..=OBSTACLE_COUNT
    pub const OBSTACLE_COUNT: usize = 6;
    /// Meteors enter (and wrap back to) the right edge
    pub const OBSTACLE_START_X: i32 = 240;
    /// Horizontal pixels travelled per tick
    pub const OBSTACLE_STEP: i32 = 2;
    /// Height of one meteor lane
    pub const ROW_HEIGHT: i32 = 16;
    /// Lanes 1..=ROW_COUNT
    pub const ROW_COUNT: u8 = 9;

    /// Ticks per score point (one second at 60 Hz)
    pub const SCORE_SUBTICKS: u16 = 60;
    /// Digits shown on the HUD row
    pub const SCORE_DIGITS: usize = 5;

    /// Song length in steps
    pub const SONG_LEN: usize = 64;
    /// Default ticks per song step
    pub const DEFAULT_TEMPO: u16 = 8;

    /// Scroll offsets wrap to 0 once they pass this value
    pub const SCROLL_MAX: u16 = 255;
}

/// Clamp a position into an inclusive rectangle
#[inline]
pub fn clamp_to(pos: IVec2, min: IVec2, max: IVec2) -> IVec2 {
    pos.clamp(min, max)
}

/// Screen lane (1-based) to its top pixel row
#[inline]
pub fn row_to_y(row: u8) -> i32 {
    i32::from(row) * consts::ROW_HEIGHT
}
