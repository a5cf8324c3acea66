use anyhow::Context as _;
use blockfall_engine::{Game, SpawnSeed};
use ratatui_runtime::Runtime;

use crate::command::{config_arg::GameConfigArg, play::app::PlayApp};

mod app;
mod input;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    pub(crate) config: GameConfigArg,
    /// Seed for the piece sequence (32 hex characters), random if omitted
    #[clap(long)]
    pub(crate) seed: Option<SpawnSeed>,
    /// Frames per second of the game loop
    #[clap(long, default_value_t = 60.0, value_parser = parse_fps)]
    pub(crate) fps: f64,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            config: GameConfigArg::default(),
            seed: None,
            fps: 60.0,
        }
    }
}

fn parse_fps(s: &str) -> Result<f64, String> {
    let fps: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if fps.is_finite() && fps > 0.0 {
        Ok(fps)
    } else {
        Err(format!("frame rate must be a positive number, got {s}"))
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { config, seed, fps } = arg;

    let config = config.load()?;
    let game = match seed {
        Some(seed) => Game::with_seed(config, *seed),
        None => Game::new(config),
    };

    let mut app = PlayApp::new(game, *fps);
    Runtime::new()
        .run(&mut app)
        .context("Failed to run the terminal UI")?;

    let game = app.into_game();
    let stats = game.stats();
    eprintln!("Seed: {}", game.seed());
    eprintln!("Pieces locked: {}", stats.locked_pieces());
    eprintln!("Lines cleared: {}", stats.cleared_lines());
    if game.status().is_game_over() {
        eprintln!("Game over: the stack reached the top of the board");
    }

    Ok(())
}
