//! The frame loop: poll input, tick, present, wait for refresh

use crate::highscores::{HighScores, unix_now};
use crate::ports::{AudioSink, FrameClock, InputSource, VideoSink};
use crate::renderer::Presenter;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, HitboxOracle, SpriteFootprint, TickInput, tick};

/// A running game bound to a hitbox oracle
pub struct Game<O: HitboxOracle = SpriteFootprint> {
    pub state: GameState,
    pub highscores: HighScores,
    oracle: O,
    presenter: Presenter,
    /// Set when the leaderboard changed since the last `take_scores_dirty`
    scores_dirty: bool,
}

impl Game<SpriteFootprint> {
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_oracle(settings, settings.hitbox)
    }
}

impl<O: HitboxOracle> Game<O> {
    pub fn with_oracle(settings: &Settings, oracle: O) -> Self {
        Self {
            state: GameState::new(settings.seed, settings.tempo),
            highscores: HighScores::new(),
            oracle,
            presenter: Presenter::new(settings.seed, settings.music),
            scores_dirty: false,
        }
    }

    /// Draw the startup screen
    pub fn init(&self, video: &mut impl VideoSink) {
        self.presenter.init(&self.state, video);
    }

    /// One loop iteration minus the wait. Returns the tick's events.
    pub fn step(
        &mut self,
        input: &mut impl InputSource,
        video: &mut impl VideoSink,
        audio: &mut impl AudioSink,
    ) -> Vec<GameEvent> {
        let input = TickInput::from_raw(input.poll());
        tick(&mut self.state, &input, &self.oracle);

        let events = self.state.drain_events();
        self.presenter.present(&self.state, &events, video, audio);

        for event in &events {
            if let GameEvent::Collided { score, frame, .. } = *event {
                self.record_score(score, frame);
            }
        }
        events
    }

    /// Step and wait until `keep_running` says stop. Returns frames run.
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        video: &mut impl VideoSink,
        audio: &mut impl AudioSink,
        clock: &mut impl FrameClock,
        mut keep_running: impl FnMut(&GameState) -> bool,
    ) -> u64 {
        let mut frames = 0u64;
        while keep_running(&self.state) {
            self.step(input, video, audio);
            clock.wait_for_refresh();
            frames += 1;
        }
        frames
    }

    /// Whether the leaderboard changed; clears the flag
    pub fn take_scores_dirty(&mut self) -> bool {
        std::mem::take(&mut self.scores_dirty)
    }

    fn record_score(&mut self, score: u32, frames: u32) {
        if let Some(rank) = self.highscores.add_score(score, frames, unix_now()) {
            log::info!("New high score {} (rank {})", score, rank);
            self.scores_dirty = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::ports::{NoWait, RecordedAudio, RecordedVideo, ScriptedInput};
    use crate::sim::{Buttons, GamePhase, NoHitboxes};

    #[test]
    fn test_run_waits_once_per_frame() {
        let settings = Settings::default();
        let mut game = Game::with_oracle(&settings, NoHitboxes);
        let mut input = ScriptedInput::default();
        let mut video = RecordedVideo::default();
        let mut audio = RecordedAudio::default();
        let mut clock = NoWait::default();

        let frames = game.run(&mut input, &mut video, &mut audio, &mut clock, |s| s.frame < 120);
        assert_eq!(frames, 120);
        assert_eq!(clock.refreshes, 120);
        assert_eq!(game.state.score.score, 2);
    }

    #[test]
    fn test_hold_right_end_to_end() {
        let settings = Settings::default();
        let mut game = Game::with_oracle(&settings, NoHitboxes);
        let mut input = ScriptedInput::default();
        input.hold(Buttons::RIGHT.to_active_low(), 200);
        let mut video = RecordedVideo::default();
        let mut audio = RecordedAudio::default();
        game.init(&mut video);

        for _ in 0..170 {
            game.step(&mut input, &mut video, &mut audio);
        }
        assert_eq!(game.state.craft.pos.x, CRAFT_MAX.x);
        for _ in 0..30 {
            game.step(&mut input, &mut video, &mut audio);
        }
        assert_eq!(video.sprite(crate::renderer::CRAFT_SLOT).unwrap().x, CRAFT_MAX.x);
    }

    #[test]
    fn test_collision_records_high_score() {
        let settings = Settings::default();
        let mut game = Game::from_settings(&settings);
        let mut input = ScriptedInput::default();
        let mut video = RecordedVideo::default();
        let mut audio = RecordedAudio::default();

        // Three seconds survived, then meteor 1 drifts onto the craft
        game.state.score.score = 3;
        game.state.obstacles[0].pos = game.state.craft.pos + glam::IVec2::new(OBSTACLE_STEP, 0);
        let events = game.step(&mut input, &mut video, &mut audio);
        assert_eq!(game.state.phase, GamePhase::GameOver);

        assert!(events.iter().any(|e| matches!(e, GameEvent::Collided { score: 3, .. })));
        assert_eq!(game.highscores.top_score(), Some(3));
        assert!(game.take_scores_dirty());
        assert!(!game.take_scores_dirty());
    }

    #[test]
    fn test_instant_restart_still_records_score() {
        let settings = Settings::default();
        let mut game = Game::from_settings(&settings);
        let mut input = ScriptedInput::new([Buttons::A.to_active_low()], 0xFFFF);
        let mut video = RecordedVideo::default();
        let mut audio = RecordedAudio::default();

        game.state.score.score = 7;
        game.state.obstacles[0].pos = game.state.craft.pos + glam::IVec2::new(OBSTACLE_STEP, 0);
        let events = game.step(&mut input, &mut video, &mut audio);

        assert_eq!(events.last(), Some(&GameEvent::Reset));
        assert_eq!(game.state.phase, GamePhase::Playing);
        assert_eq!(game.highscores.top_score(), Some(7));
        assert_eq!(game.highscores.entries[0].frames, 1);
        let units = video.cell(crate::ports::MapLayer::Hud, 4).map(|t| t.tile);
        assert_eq!(units, Some(crate::renderer::hud::DIGIT_TILE_BASE));
    }
}
