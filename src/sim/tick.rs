//! Fixed timestep simulation tick
//!
//! One call per display refresh. Advances music, score, scrolling and meteors,
//! applies the player's input, tests for a hit, and handles the reset button.

use super::collision::{HitboxOracle, detect_collision};
use super::input::{Buttons, move_craft};
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick: the raw active-low keypad read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInput {
    pub raw: u16,
}

impl Default for TickInput {
    /// Nothing pressed
    fn default() -> Self {
        Self { raw: 0xFFFF }
    }
}

impl TickInput {
    pub fn from_raw(raw: u16) -> Self {
        Self { raw }
    }

    /// Input with exactly `held` pressed
    pub fn pressed(held: Buttons) -> Self {
        Self {
            raw: held.to_active_low(),
        }
    }

    /// Raw mask with pressed = 1
    pub fn inverted(&self) -> u16 {
        !self.raw
    }

    pub fn buttons(&self) -> Buttons {
        Buttons::from_active_low(self.raw)
    }
}

/// Advance the game state by one frame.
///
/// Events raised by the previous call are discarded first, so a caller that
/// wants them must `drain_events` between ticks.
pub fn tick(state: &mut GameState, input: &TickInput, oracle: &impl HitboxOracle) {
    state.events.clear();
    let playing = state.is_playing();
    state.frame = state.frame.wrapping_add(1);

    if playing {
        advance_world(state);
    }

    // The lane RNG is perturbed by whatever is held, even while frozen
    state.rng.reseed(input.inverted());
    let held = input.buttons();

    if playing {
        state.craft.pos = move_craft(state.craft.pos, held);

        if let Some(obstacle) = detect_collision(state.craft.pos, &state.obstacles, state.frame, oracle) {
            let score = state.score.score;
            log::info!(
                "Craft hit by {} at frame {} ({:?}), final score {}",
                obstacle,
                state.frame,
                state.craft.pos,
                score
            );
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::Collided {
                obstacle,
                score,
                frame: state.frame,
            });
        }
    }

    // Checked after the hit test: holding A through a collision restarts at once
    if state.phase == GamePhase::GameOver && held.contains(Buttons::A) {
        log::info!("Reset requested, starting a new run");
        state.reset();
    }
}

/// Music, score, scrolling and meteor timers: everything that freezes on game over
fn advance_world(state: &mut GameState) {
    if let Some(note) = state.sequencer.step() {
        state.events.push(GameEvent::NoteTriggered {
            step: note.step,
            rate: note.rate,
        });
    }

    if let Some(score) = state.score.step() {
        state.events.push(GameEvent::ScoreChanged { score });
    }

    if state.frame > 1 {
        let (near, far) = state.parallax.advance();
        state.events.push(GameEvent::Scrolled { near, far });
    }

    for obstacle in state.obstacles.iter_mut() {
        if let Some(row) = obstacle.advance(&mut state.rng) {
            log::debug!("{} -> lane {} at frame {}", obstacle.id, row, state.frame);
            state.events.push(GameEvent::RowChanged {
                obstacle: obstacle.id,
                row,
            });
        }
    }
}
