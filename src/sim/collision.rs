//! Craft-versus-meteor hit testing
//!
//! Meteor boxes come from a `HitboxOracle`: given the six meteor positions it
//! returns six axis-aligned rectangles. The craft is a single point (its
//! sprite origin) and only counts as hit when strictly inside a box.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::obstacles::{Obstacle, ObstacleId};
use crate::consts::OBSTACLE_COUNT;

/// Axis-aligned rectangle, corners exclusive for hit purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub top_left: IVec2,
    pub bottom_right: IVec2,
}

impl Hitbox {
    /// Strict containment on all four edges
    #[inline]
    pub fn contains(&self, p: IVec2) -> bool {
        p.x > self.top_left.x
            && p.x < self.bottom_right.x
            && p.y > self.top_left.y
            && p.y < self.bottom_right.y
    }
}

/// Turns meteor positions into hit rectangles
pub trait HitboxOracle {
    fn hitboxes(&self, centers: &[IVec2; OBSTACLE_COUNT]) -> [Hitbox; OBSTACLE_COUNT];
}

/// Fixed insets around each meteor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteFootprint {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Default for SpriteFootprint {
    fn default() -> Self {
        // A 16x16 meteor against a wide 16x8 craft measured from its origin,
        // shrunk a little so grazes don't count
        Self {
            left: 12,
            top: 6,
            right: 12,
            bottom: 12,
        }
    }
}

impl SpriteFootprint {
    pub fn around(&self, center: IVec2) -> Hitbox {
        Hitbox {
            top_left: center - IVec2::new(self.left, self.top),
            bottom_right: center + IVec2::new(self.right, self.bottom),
        }
    }
}

impl HitboxOracle for SpriteFootprint {
    fn hitboxes(&self, centers: &[IVec2; OBSTACLE_COUNT]) -> [Hitbox; OBSTACLE_COUNT] {
        centers.map(|c| self.around(c))
    }
}

/// Oracle that never reports a hit
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHitboxes;

impl HitboxOracle for NoHitboxes {
    fn hitboxes(&self, centers: &[IVec2; OBSTACLE_COUNT]) -> [Hitbox; OBSTACLE_COUNT] {
        centers.map(|c| Hitbox {
            top_left: c,
            bottom_right: c,
        })
    }
}

/// First eligible meteor whose box strictly contains `craft`, in id order
pub fn detect_collision(
    craft: IVec2,
    obstacles: &[Obstacle; OBSTACLE_COUNT],
    frame: u32,
    oracle: &impl HitboxOracle,
) -> Option<ObstacleId> {
    let centers = obstacles.each_ref().map(|o| o.pos);
    let boxes = oracle.hitboxes(&centers);

    obstacles
        .iter()
        .zip(boxes.iter())
        .find(|(o, hb)| o.is_active(frame) && hb.contains(craft))
        .map(|(o, _)| o.id)
}
