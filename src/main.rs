//! Terminal Versus Tetris runner (default binary).
//!
//! One keyboard drives one or two players. Keys map to player actions
//! through the input translator, which owns held-key repeat and rotate
//! debounce; the orchestrator owns gravity and the match result.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use versus_tetris::core::SessionStats;
use versus_tetris::engine::{Game, GameConfig, MatchResult, Phase, RecordStore};
use versus_tetris::input::{
    handle_key_event, should_quit, should_restart, Clock, InputTranslator, Key, KeyPhase,
    MonotonicClock, DEFAULT_KEY_RELEASE_TIMEOUT_MS,
};
use versus_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use versus_tetris::types::{GameMode, PlayerId};

const FRAME_MS: u64 = 16;

#[derive(Debug, Parser)]
#[command(name = "versus-tetris", about = "Falling blocks in the terminal, alone or head to head")]
struct Cli {
    /// Two players on one keyboard: WASD+J against arrows+Space
    #[arg(long)]
    dual: bool,

    /// Seed for the piece sequence (both players get the same one)
    #[arg(long)]
    seed: Option<u64>,

    /// High score and match history file
    #[arg(long, value_name = "PATH")]
    records: Option<PathBuf>,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Flags win over the environment.
    fn apply(&self, config: &mut GameConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(path) = &self.records {
            config.records_path = path.clone();
        }
        if let Some(path) = &self.log {
            config.log_path = Some(path.clone());
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = GameConfig::from_env();
    cli.apply(&mut config);

    if let Some(path) = &config.log_path {
        init_logging(path, cli.verbose)?;
    }

    let mode = if cli.dual {
        GameMode::Dual
    } else {
        GameMode::Single
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, mode, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The subscriber writes to the log file only; the terminal belongs to the game.
fn init_logging(path: &Path, verbose: u8) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(level))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mode: GameMode, config: &GameConfig) -> Result<()> {
    let mut timing = config.timing;
    if !term.reports_key_releases() && timing.key_release_timeout_ms.is_none() {
        timing.key_release_timeout_ms = Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS);
    }
    tracing::info!(?mode, ?timing, seed = ?config.seed, "starting");

    let mut store = RecordStore::load(&config.records_path).unwrap_or_else(|err| {
        tracing::warn!("ignoring records: {err:#}");
        RecordStore::default()
    });

    let mut game = Game::new(mode, config.seed);
    let mut translator = InputTranslator::with_timing(mode, timing);
    let view = GameView::default();
    let clock = MonotonicClock::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_ms = clock.now_ms();

    loop {
        // One timestamp per frame for every input and the gravity delta.
        let now = clock.now_ms();
        let delta = u32::try_from(now - last_ms).unwrap_or(u32::MAX);
        last_ms = now;

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if should_restart(key) {
                            game.restart();
                            translator.reset();
                            continue;
                        }
                    }

                    let Some((k, phase)) = handle_key_event(key) else {
                        continue;
                    };
                    match phase {
                        KeyPhase::Down
                            if k == Key::Enter
                                && matches!(game.phase(), Phase::Menu | Phase::GameOver(_)) =>
                        {
                            game.start();
                            translator.reset();
                            // The starting press must not also pause.
                            translator.swallow(Key::Enter, now);
                        }
                        KeyPhase::Down => translator.key_down(k, now),
                        KeyPhase::Up => translator.key_up(k),
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        for action in translator.poll(now, &[]) {
            game.apply(action);
        }

        if let Some(result) = game.tick(delta) {
            record_result(&mut store, &config.records_path, &game, result);
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Sleep until the next frame, waking early on input.
        let elapsed = clock.now_ms() - now;
        if elapsed < FRAME_MS {
            event::poll(Duration::from_millis(FRAME_MS - elapsed))?;
        }
    }
}

fn record_result(store: &mut RecordStore, path: &Path, game: &Game, result: MatchResult) {
    let stats = |player| {
        game.session(player)
            .map(|s| s.stats())
            .unwrap_or_else(SessionStats::default)
    };
    if store.record_match(result, stats(PlayerId::One), stats(PlayerId::Two), Utc::now()) {
        tracing::info!(high_score = store.high_score, "new high score");
    }
    if let Err(err) = store.save(path) {
        tracing::warn!("failed to save records: {err:#}");
    }
}
