//! Random star tiling for the two scrolling layers

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::ports::{MapLayer, TileRef, VideoSink};

/// Map width in tiles (one full 256px scroll period)
pub const MAP_COLUMNS: u16 = 32;
/// Visible rows
pub const MAP_ROWS: u16 = 20;
/// Star tiles 1..=STAR_PATTERNS
pub const STAR_PATTERNS: u16 = 4;

pub const NEAR_PALETTE: u8 = 1;
pub const FAR_PALETTE: u8 = 2;

/// Scatter a random star pattern into every cell of both layers
pub fn fill_layers(seed: u64, video: &mut impl VideoSink) {
    let mut rng = Pcg32::seed_from_u64(seed);
    fill_layer(&mut rng, MapLayer::NearStars, NEAR_PALETTE, video);
    fill_layer(&mut rng, MapLayer::FarStars, FAR_PALETTE, video);
}

fn fill_layer(rng: &mut Pcg32, layer: MapLayer, palette: u8, video: &mut impl VideoSink) {
    for row in 0..MAP_ROWS {
        for col in 0..MAP_COLUMNS {
            let tile = rng.random_range(1..=STAR_PATTERNS);
            video.write_map_cell(layer, row * MAP_COLUMNS + col, TileRef { tile, palette });
        }
    }
}
