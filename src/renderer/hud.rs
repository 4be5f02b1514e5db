//! Five-digit score row

use crate::ports::{MapLayer, TileRef, VideoSink};
use crate::sim::score_digits;

/// Glyph for digit 0; digits 1-9 follow it
pub const DIGIT_TILE_BASE: u16 = 9;
pub const HUD_PALETTE: u8 = 3;

pub fn digit_tile(digit: u8) -> TileRef {
    TileRef {
        tile: DIGIT_TILE_BASE + u16::from(digit),
        palette: HUD_PALETTE,
    }
}

/// Rewrite HUD cells 0..5 with the score's digits
pub fn write_score(score: u32, video: &mut impl VideoSink) {
    for (cell, digit) in score_digits(score).into_iter().enumerate() {
        video.write_map_cell(MapLayer::Hud, cell as u16, digit_tile(digit));
    }
}
