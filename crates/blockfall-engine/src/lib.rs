//! Game-state engine for a single-player falling-block puzzle.
//!
//! - [`core`] holds the rule-level data: shape catalog, pieces, the 10×20 board
//!   and the validity check every piece mutation goes through.
//! - [`engine`] drives those rules over time: fall timer, piece spawning and the
//!   [`Game`] state machine.
//!
//! Nothing in this crate performs I/O. Hosts feed it intents and elapsed time and
//! read the board and current piece back for presentation.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
