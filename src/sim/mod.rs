//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per display refresh, no wall-clock time
//! - Seeded RNG only (perturbed by input, never by time)
//! - Stable iteration order (meteors by id)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod obstacles;
pub mod rng;
pub mod score;
pub mod scroll;
pub mod sequencer;
pub mod state;
pub mod tick;

pub use collision::{Hitbox, HitboxOracle, NoHitboxes, SpriteFootprint, detect_collision};
pub use input::{Buttons, move_craft};
pub use obstacles::{Activation, OBSTACLE_TABLE, Obstacle, ObstacleConfig, ObstacleId};
pub use rng::SeedStream;
pub use score::{ScoreCounter, score_digits};
pub use scroll::Parallax;
pub use sequencer::{NoteTrigger, SONG, Sequencer};
pub use state::{Craft, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
