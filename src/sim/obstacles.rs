//! Meteor timer table
//!
//! Each meteor owns a frame timer. When the timer passes the meteor's period
//! it jumps to a new lane and the timer restarts at the meteor's reactivation
//! value. Meteors only drift left once their timer has reached that value, so
//! meteors 2-6 start crossing later than meteor 1 and then never stop.
//!
//! Separately, each meteor is only *eligible* (drawn at its live x, able to
//! hit the craft) inside a window of the global frame counter.

use glam::IVec2;

use super::rng::SeedStream;
use crate::consts::*;
use crate::row_to_y;

/// When a meteor may collide and be drawn at its live position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Eligible on every frame
    Always,
    /// Eligible once `frame > threshold`
    After(u32),
    /// Eligible while `frame < from` or `frame > until`
    Outside { from: u32, until: u32 },
}

impl Activation {
    #[inline]
    pub fn permits(self, frame: u32) -> bool {
        match self {
            Activation::Always => true,
            Activation::After(threshold) => frame > threshold,
            Activation::Outside { from, until } => frame < from || frame > until,
        }
    }
}

/// Static per-meteor timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleConfig {
    /// Frames between lane changes
    pub period: u16,
    /// Timer value after a lane change; also the timer value at which drifting starts
    pub reactivation: u16,
    /// Frame window in which the meteor counts
    pub activation: Activation,
}

/// Timing for meteors 1..=6, indexed by `id - 1`
pub const OBSTACLE_TABLE: [ObstacleConfig; OBSTACLE_COUNT] = [
    ObstacleConfig {
        period: 120,
        reactivation: 0,
        activation: Activation::Always,
    },
    ObstacleConfig {
        period: 140,
        reactivation: 20,
        activation: Activation::After(1440 + 20),
    },
    ObstacleConfig {
        period: 160,
        reactivation: 40,
        activation: Activation::After(720 + 40),
    },
    ObstacleConfig {
        period: 180,
        reactivation: 60,
        activation: Activation::Outside {
            from: 720 + 60,
            until: 1440 + 60,
        },
    },
    ObstacleConfig {
        period: 200,
        reactivation: 80,
        activation: Activation::After(720 + 80),
    },
    ObstacleConfig {
        period: 220,
        reactivation: 100,
        activation: Activation::After(1440 + 100),
    },
];

/// Stable meteor id in 1..=OBSTACLE_COUNT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(u8);

impl ObstacleId {
    /// All ids in update order
    pub fn all() -> impl Iterator<Item = ObstacleId> {
        (1..=OBSTACLE_COUNT as u8).map(ObstacleId)
    }

    /// `None` unless `id` is in 1..=OBSTACLE_COUNT
    pub fn new(id: u8) -> Option<Self> {
        (1..=OBSTACLE_COUNT as u8).contains(&id).then_some(ObstacleId(id))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot into `GameState::obstacles`
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl std::fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "meteor {}", self.0)
    }
}

/// A meteor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    pub id: ObstacleId,
    pub pos: IVec2,
    /// Frames since the last lane change (or since reactivation)
    pub timer: u16,
    pub config: ObstacleConfig,
}

impl Obstacle {
    /// Meteor `id` at its spawn point
    pub fn spawn(id: ObstacleId) -> Self {
        Self {
            id,
            pos: IVec2::new(OBSTACLE_START_X, row_to_y(id.get())),
            timer: 0,
            config: OBSTACLE_TABLE[id.index()],
        }
    }

    /// All six meteors at their spawn points
    pub fn spawn_all() -> [Obstacle; OBSTACLE_COUNT] {
        std::array::from_fn(|i| Obstacle::spawn(ObstacleId(i as u8 + 1)))
    }

    /// Current lane (1-based)
    pub fn row(&self) -> u8 {
        (self.pos.y / ROW_HEIGHT) as u8
    }

    /// Whether this meteor may collide / be shown at `frame`
    #[inline]
    pub fn is_active(&self, frame: u32) -> bool {
        self.config.activation.permits(frame)
    }

    /// Whether the timer has reached the drifting threshold
    #[inline]
    pub fn is_drifting(&self) -> bool {
        self.timer >= self.config.reactivation
    }

    /// Advance one tick. Returns the new lane if the meteor changed lanes.
    pub fn advance(&mut self, rng: &mut SeedStream) -> Option<u8> {
        self.timer = self.timer.saturating_add(1);

        let mut new_row = None;
        if self.timer >= self.config.period {
            let row = rng.next_row(self.row());
            self.pos.y = row_to_y(row);
            self.timer = self.config.reactivation;
            new_row = Some(row);
        }

        if self.is_drifting() {
            self.pos.x -= OBSTACLE_STEP;
            if self.pos.x < 1 {
                self.pos.x = OBSTACLE_START_X;
            }
        }

        new_row
    }
}
