//! Presentation: simulation state to video/audio sink writes
//!
//! The presenter holds no gameplay logic. It replays the events a tick raised
//! and mirrors craft/meteor positions into sprite slots.

pub mod hud;
pub mod sprites;
pub mod starfield;

pub use sprites::{CRAFT_SLOT, craft_sprite, meteor_slot, meteor_sprite};

use crate::ports::{AudioSink, ScrollLayer, VideoSink};
use crate::sim::{GameEvent, GameState};

/// Drives the sinks from game state
#[derive(Debug, Clone)]
pub struct Presenter {
    /// Forward note triggers to the audio sink
    pub music: bool,
    /// Seed for the star layout
    star_seed: u64,
}

impl Presenter {
    pub fn new(star_seed: u64, music: bool) -> Self {
        Self { music, star_seed }
    }

    /// Startup screen: both star layers, a zeroed HUD and every sprite slot
    pub fn init(&self, state: &GameState, video: &mut impl VideoSink) {
        starfield::fill_layers(self.star_seed, video);
        hud::write_score(0, video);
        write_all_sprites(state, video);
        video.write_scroll(ScrollLayer::Near, 0);
        video.write_scroll(ScrollLayer::Far, 0);
    }

    /// Apply one tick's events and sprite positions
    pub fn present(
        &self,
        state: &GameState,
        events: &[GameEvent],
        video: &mut impl VideoSink,
        audio: &mut impl AudioSink,
    ) {
        for event in events {
            match *event {
                GameEvent::NoteTriggered { rate, .. } => {
                    if self.music {
                        audio.trigger(rate);
                    }
                }
                // Only raised by a tick that started in play, so the final
                // point of a run still reaches the HUD
                GameEvent::ScoreChanged { score } => hud::write_score(score, video),
                GameEvent::Scrolled { near, far } => {
                    video.write_scroll(ScrollLayer::Near, near);
                    video.write_scroll(ScrollLayer::Far, far);
                }
                GameEvent::Reset => {
                    hud::write_score(0, video);
                }
                GameEvent::RowChanged { .. } | GameEvent::Collided { .. } => {}
            }
        }

        // The collision tick still moved things; the frozen frame shows where
        let collided = events.iter().any(|e| matches!(e, GameEvent::Collided { .. }));
        if state.is_playing() || collided {
            write_all_sprites(state, video);
        }
    }
}

fn write_all_sprites(state: &GameState, video: &mut impl VideoSink) {
    video.write_sprite(CRAFT_SLOT, craft_sprite(state.craft.pos));
    for obstacle in &state.obstacles {
        video.write_sprite(meteor_slot(obstacle.id), meteor_sprite(obstacle, state.frame));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::ports::{MapLayer, RecordedAudio, RecordedVideo};
    use crate::sim::{Buttons, GamePhase, NoHitboxes, ObstacleId, SpriteFootprint, TickInput, tick};
    use glam::IVec2;

    fn step(state: &mut GameState, presenter: &Presenter, video: &mut RecordedVideo, audio: &mut RecordedAudio, input: TickInput) {
        tick(state, &input, &NoHitboxes);
        let events = state.drain_events();
        presenter.present(state, &events, video, audio);
    }

    #[test]
    fn test_init_writes_everything() {
        let state = GameState::new(1, DEFAULT_TEMPO);
        let mut video = RecordedVideo::default();
        Presenter::new(1, true).init(&state, &mut video);

        assert_eq!(video.sprites.len(), 1 + OBSTACLE_COUNT);
        for cell in 0..SCORE_DIGITS as u16 {
            assert_eq!(video.cell(MapLayer::Hud, cell).map(|t| t.tile), Some(hud::DIGIT_TILE_BASE));
        }
        assert_eq!(video.cells.keys().filter(|(l, _)| *l == MapLayer::NearStars).count(), 32 * 20);
        assert_eq!(video.cells.keys().filter(|(l, _)| *l == MapLayer::FarStars).count(), 32 * 20);
    }

    #[test]
    fn test_notes_reach_audio_unless_muted() {
        let mut state = GameState::new(1, 1);
        let mut video = RecordedVideo::default();
        let mut audio = RecordedAudio::default();
        let presenter = Presenter::new(1, true);
        for _ in 0..4 {
            step(&mut state, &presenter, &mut video, &mut audio, TickInput::default());
        }
        // Step 3 is a rest
        assert_eq!(audio.triggers, vec![crate::sim::SONG[0], crate::sim::SONG[1], crate::sim::SONG[2]]);

        let mut muted_audio = RecordedAudio::default();
        let muted = Presenter::new(1, false);
        step(&mut state, &muted, &mut video, &mut muted_audio, TickInput::default());
        assert!(muted_audio.triggers.is_empty());
    }

    #[test]
    fn test_inactive_meteor_held_off_screen() {
        let mut state = GameState::new(1, DEFAULT_TEMPO);
        let mut video = RecordedVideo::default();
        let mut audio = RecordedAudio::default();
        let presenter = Presenter::new(1, true);
        let slot = meteor_slot(ObstacleId::new(3).unwrap());

        // Meteor 3 has been drifting since tick 40 but only shows after frame 760
        for _ in 0..760 {
            step(&mut state, &presenter, &mut video, &mut audio, TickInput::default());
        }
        assert_ne!(state.obstacles[2].pos.x, OBSTACLE_START_X);
        assert_eq!(video.sprite(slot).unwrap().x, OBSTACLE_START_X);

        step(&mut state, &presenter, &mut video, &mut audio, TickInput::default());
        assert_eq!(video.sprite(slot).unwrap().x, state.obstacles[2].pos.x);
    }

    #[test]
    fn test_score_row_and_scroll_registers() {
        let mut state = GameState::new(1, DEFAULT_TEMPO);
        let mut video = RecordedVideo::default();
        let mut audio = RecordedAudio::default();
        let presenter = Presenter::new(1, true);
        for _ in 0..120 {
            step(&mut state, &presenter, &mut video, &mut audio, TickInput::default());
        }
        let units = video.cell(MapLayer::Hud, 4).unwrap();
        assert_eq!(units.tile, hud::DIGIT_TILE_BASE + 2);
        assert_eq!(units.palette, hud::HUD_PALETTE);
        // Frames 2..=120 latched offsets 0..=118
        assert_eq!(video.scroll(ScrollLayer::Near), 118);
        assert_eq!(video.scroll(ScrollLayer::Far), 59);
    }

    #[test]
    fn test_game_over_stops_sprite_writes_and_reset_restores() {
        let mut state = GameState::new(1, DEFAULT_TEMPO);
        let mut video = RecordedVideo::default();
        let mut audio = RecordedAudio::default();
        let presenter = Presenter::new(1, true);
        for _ in 0..90 {
            step(&mut state, &presenter, &mut video, &mut audio, TickInput::pressed(Buttons::UP));
        }
        state.phase = GamePhase::GameOver;
        let frozen = video.sprite(CRAFT_SLOT);
        step(&mut state, &presenter, &mut video, &mut audio, TickInput::pressed(Buttons::DOWN));
        assert_eq!(video.sprite(CRAFT_SLOT), frozen);

        step(&mut state, &presenter, &mut video, &mut audio, TickInput::pressed(Buttons::A));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(video.sprite(CRAFT_SLOT).unwrap().y, CRAFT_START.y);
        assert_eq!(video.cell(MapLayer::Hud, 4).unwrap().tile, hud::DIGIT_TILE_BASE);
    }

    #[test]
    fn test_point_scored_on_collision_tick_is_shown() {
        let mut state = GameState::new(1, DEFAULT_TEMPO);
        let mut video = RecordedVideo::default();
        let mut audio = RecordedAudio::default();
        let presenter = Presenter::new(1, true);
        let oracle = SpriteFootprint::default();

        for _ in 0..59 {
            tick(&mut state, &TickInput::default(), &oracle);
            let events = state.drain_events();
            presenter.present(&state, &events, &mut video, &mut audio);
        }
        assert_eq!(video.cell(MapLayer::Hud, 4).unwrap().tile, hud::DIGIT_TILE_BASE);

        // Meteor 1 drifts onto the craft on the tick that scores the first point
        state.obstacles[0].pos = state.craft.pos + IVec2::new(OBSTACLE_STEP, 0);
        tick(&mut state, &TickInput::pressed(Buttons::DOWN), &oracle);
        let events = state.drain_events();
        presenter.present(&state, &events, &mut video, &mut audio);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(events.contains(&GameEvent::ScoreChanged { score: 1 }));
        assert_eq!(video.cell(MapLayer::Hud, 4).unwrap().tile, hud::DIGIT_TILE_BASE + 1);
        // The last move is on screen too
        assert_eq!(video.sprite(CRAFT_SLOT).unwrap().y, CRAFT_START.y + 1);
        assert_eq!(
            video.sprite(meteor_slot(ObstacleId::new(1).unwrap())).unwrap().x,
            state.obstacles[0].pos.x
        );
    }
}
