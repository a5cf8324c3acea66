//! Minimal terminal application runtime on top of `ratatui` and `crossterm`.
//!
//! Implement [`App`] and hand it to [`Runtime::run`]. The runtime owns the terminal and
//! schedules three kinds of events: ticks carrying the monotonic time since the previous tick,
//! renders, and raw terminal events.

pub use self::{app::App, event_loop::RenderMode, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
