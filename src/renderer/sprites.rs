//! Sprite slot layout and attribute builders

use glam::IVec2;

use crate::consts::OBSTACLE_START_X;
use crate::ports::{SpriteAttr, SpriteShape, TileRef};
use crate::sim::{Obstacle, ObstacleId};

/// Slot 0 is the craft, slots 1..=6 the meteors
pub const CRAFT_SLOT: u8 = 0;

/// Rocket: two 8x8 tiles side by side
pub const CRAFT_TILE: TileRef = TileRef { tile: 1, palette: 1 };
/// Meteor: 2x2 tiles
pub const METEOR_TILE: TileRef = TileRef { tile: 4, palette: 2 };

pub fn meteor_slot(id: ObstacleId) -> u8 {
    id.get()
}

pub fn craft_sprite(pos: IVec2) -> SpriteAttr {
    SpriteAttr {
        x: pos.x,
        y: pos.y,
        shape: SpriteShape::Wide,
        size: 0,
        tile: CRAFT_TILE,
    }
}

/// Meteor sprite at its live x once eligible, parked on the right edge before that
pub fn meteor_sprite(obstacle: &Obstacle, frame: u32) -> SpriteAttr {
    let x = if obstacle.is_active(frame) {
        obstacle.pos.x
    } else {
        OBSTACLE_START_X
    };
    SpriteAttr {
        x,
        y: obstacle.pos.y,
        shape: SpriteShape::Square,
        size: 1,
        tile: METEOR_TILE,
    }
}
