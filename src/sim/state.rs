//! Game state and core simulation types
//!
//! Everything the tick mutates lives in one `GameState`; nothing is global.

use glam::IVec2;

use super::obstacles::{Obstacle, ObstacleId};
use super::rng::SeedStream;
use super::scroll::Parallax;
use super::score::ScoreCounter;
use super::sequencer::Sequencer;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Craft was hit; everything is frozen until the action button
    GameOver,
}

/// Things that happened during a tick, drained by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Sequencer started a note
    NoteTriggered { step: u8, rate: u16 },
    /// Score advanced
    ScoreChanged { score: u32 },
    /// Scroll offsets to latch for the two star layers
    Scrolled { near: u16, far: u16 },
    /// A meteor moved to a new lane
    RowChanged { obstacle: ObstacleId, row: u8 },
    /// Craft hit a meteor on `frame`; the score is final
    Collided { obstacle: ObstacleId, score: u32, frame: u32 },
    /// Everything returned to its initial values
    Reset,
}

/// The player's rocket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Craft {
    pub pos: IVec2,
}

impl Default for Craft {
    fn default() -> Self {
        Self { pos: CRAFT_START }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Frames since start or last reset (wraps)
    pub frame: u32,
    /// Player craft
    pub craft: Craft,
    /// Meteors, index = id - 1
    pub obstacles: [Obstacle; OBSTACLE_COUNT],
    /// Survival score
    pub score: ScoreCounter,
    /// Music position
    pub sequencer: Sequencer,
    /// Star layer offsets
    pub parallax: Parallax,
    /// Lane RNG; survives resets
    pub rng: SeedStream,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and song tempo
    pub fn new(seed: u64, tempo: u16) -> Self {
        Self {
            phase: GamePhase::Playing,
            frame: 0,
            craft: Craft::default(),
            obstacles: Obstacle::spawn_all(),
            score: ScoreCounter::default(),
            sequencer: Sequencer::new(tempo),
            parallax: Parallax::default(),
            rng: SeedStream::new(seed),
            events: Vec::new(),
        }
    }

    /// Restore every gameplay field to its initial value and resume play.
    /// The RNG stream and the tempo are kept.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.frame = 0;
        self.craft = Craft::default();
        self.obstacles = Obstacle::spawn_all();
        self.score.reset();
        self.sequencer.rewind();
        self.parallax = Parallax::default();
        self.events.push(GameEvent::Reset);
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn obstacle(&self, id: ObstacleId) -> &Obstacle {
        &self.obstacles[id.index()]
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
