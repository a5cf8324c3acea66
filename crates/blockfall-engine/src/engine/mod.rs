//! Time-driven game logic on top of [`core`](crate::core).
//!
//! - [`Game`] - The state machine: board, current piece, fall timer and spawner
//! - [`GameConfig`] - Gravity delays and optional top-out detection
//! - [`FallTimer`] - Accumulates frame time and decides when gravity fires
//! - [`PieceSpawner`] - Uniform shape and color draws from a seeded generator
//! - [`SpawnSeed`] - Seed for a reproducible piece sequence
//! - [`GameStats`] - Locked pieces and cleared lines
//! - [`Intent`] - Discrete player requests
//!
//! # Game Flow
//!
//! Every frame the host calls [`Game::advance_frame`] once:
//!
//! 1. The elapsed time is added to the fall timer
//! 2. Pending intents are applied in arrival order; invalid moves are dropped
//! 3. The fast-drop signal selects the gravity delay
//! 4. If the timer exceeds the delay, the piece moves down one row or, when it
//!    cannot, is locked, full rows are cleared and a new piece spawns
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use blockfall_engine::{Game, GameConfig, GravityOutcome, Intent};
//!
//! let mut game = Game::new(GameConfig::default());
//! let mut locked = 0;
//! for _ in 0..1_000 {
//!     let outcome = game.advance_frame(Duration::from_millis(20), &[Intent::Rotate], true);
//!     if let Some(GravityOutcome::Locked { .. }) = outcome {
//!         locked += 1;
//!     }
//! }
//! assert_eq!(game.stats().locked_pieces(), locked);
//! ```

pub use self::{config::*, fall_timer::*, game::*, game_stats::*, intent::*, piece_spawner::*};

mod config;
mod fall_timer;
mod game;
mod game_stats;
mod intent;
mod piece_spawner;
