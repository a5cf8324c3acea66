use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// Trait for TUI applications.
///
/// Applications executed by `Runtime::run()` must implement this trait.
pub trait App {
    /// Initializes the application.
    ///
    /// Called at the start of `Runtime::run()`, once the terminal is set up. Use this to
    /// configure `tick_rate/render_mode` and to query terminal capabilities such as
    /// [`Runtime::reports_key_release`].
    fn init(&mut self, runtime: &mut Runtime);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Draws the screen (called on each `Event::Render`).
    fn draw(&self, frame: &mut Frame);

    /// Updates application logic (called on each `Event::Tick`).
    ///
    /// `elapsed` is the monotonic time since the previous tick, or since the loop started for
    /// the first tick.
    fn update(&mut self, runtime: &mut Runtime, elapsed: Duration);
}
