//! Meteor Dodge entry point
//!
//! Loads settings and the leaderboard, then runs either the terminal game or
//! a headless simulation.

mod args;

use std::io::{self, BufWriter};

use anyhow::{Context, Result};

use meteor_dodge::audio::LogAudio;
use meteor_dodge::platform::{FixedRateClock, Keyboard, Terminal, TerminalSession};
use meteor_dodge::ports::{FrameClock, NoWait, RecordedVideo, ScriptedInput};
use meteor_dodge::sim::GamePhase;
use meteor_dodge::{Game, HighScores, Settings};

use args::{CliArgs, USAGE};

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    if args.show_help {
        println!("{USAGE}");
        return Ok(());
    }

    // Log lines on stderr would tear the terminal view, so only warnings by default there
    let default_level = if args.headless.is_some() { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut settings = Settings::load(&args.config)
        .with_context(|| format!("loading settings from {}", args.config.display()))?;
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    log::info!("Meteor Dodge starting with seed {}", settings.seed);

    let mut game = Game::from_settings(&settings);
    if let Some(path) = &settings.highscore_path {
        game.highscores = HighScores::load(path);
    }

    match args.headless {
        Some(ticks) => run_headless(&mut game, ticks),
        None => run_terminal(&mut game, &settings)?,
    }

    save_scores(&mut game, &settings)
}

fn run_headless(game: &mut Game, ticks: u32) {
    let mut input = ScriptedInput::default();
    let mut video = RecordedVideo::default();
    let mut audio = LogAudio::new(false);
    let mut clock = NoWait::default();

    game.init(&mut video);
    let mut remaining = ticks;
    let frames = game.run(&mut input, &mut video, &mut audio, &mut clock, |_| {
        let go = remaining > 0;
        remaining = remaining.saturating_sub(1);
        go
    });

    let state = &game.state;
    let outcome = match state.phase {
        GamePhase::Playing => "still flying",
        GamePhase::GameOver => "hit",
    };
    println!(
        "score {} after {} frames ({}, {} notes)",
        state.score.score,
        frames,
        outcome,
        audio.trigger_count()
    );
}

fn run_terminal(game: &mut Game, settings: &Settings) -> Result<()> {
    let _session = TerminalSession::enter().context("setting up the terminal")?;
    let mut keyboard = Keyboard::spawn();
    let mut screen = Terminal::new(BufWriter::new(io::stdout()));
    let mut audio = LogAudio::new(false);
    let mut clock = FixedRateClock::new(settings.frame_rate);

    game.init(&mut screen);
    while !keyboard.quit_requested() {
        game.step(&mut keyboard, &mut screen, &mut audio);
        screen.flush(&status_line(game))?;
        if game.take_scores_dirty() {
            // Saved right away so a later crash keeps the run
            save_now(game, settings);
        }
        clock.wait_for_refresh();
    }

    if clock.overruns() > 0 {
        log::info!("{} frames overran their deadline", clock.overruns());
    }
    Ok(())
}

fn status_line(game: &Game) -> String {
    let best = game.highscores.top_score().unwrap_or(0);
    match game.state.phase {
        GamePhase::Playing => format!("SCORE {:05}  BEST {:05}   Q quits", game.state.score.score, best),
        GamePhase::GameOver => format!(
            "HIT! {} seconds. Space to fly again, Q quits",
            game.state.score.score
        ),
    }
}

fn save_now(game: &Game, settings: &Settings) {
    if let Some(path) = &settings.highscore_path {
        if let Err(e) = game.highscores.save(path) {
            log::warn!("Could not save high scores: {}", e);
        }
    }
}

fn save_scores(game: &mut Game, settings: &Settings) -> Result<()> {
    if !game.take_scores_dirty() {
        return Ok(());
    }
    if let Some(path) = &settings.highscore_path {
        game.highscores
            .save(path)
            .with_context(|| format!("saving high scores to {}", path.display()))?;
    }
    Ok(())
}
