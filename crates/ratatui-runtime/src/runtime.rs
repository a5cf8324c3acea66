use std::{io, time::Duration};

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute, terminal,
};
use ratatui::DefaultTerminal;

use crate::{
    App,
    event::TuiEvent,
    event_loop::{EventLoop, RenderMode},
};

/// TUI application runtime.
///
/// Manages the event loop and executes applications that implement the `App` trait.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
    key_release_reporting: bool,
}

impl Runtime {
    /// Creates a new Runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tick rate (Hz, ticks per second).
    pub fn set_tick_rate(&mut self, rate: Option<f64>) {
        self.set_tick_interval(rate.map(|rate| Duration::from_secs_f64(1.0 / rate)));
    }

    /// Sets the tick interval.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    /// Sets the render mode.
    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.set_render_mode(mode);
    }

    /// Returns whether the terminal delivers key release and repeat events.
    ///
    /// Only meaningful from [`App::init`] onward. Without it, every key event is reported as a
    /// press, and held keys arrive as repeated presses.
    #[must_use]
    pub fn reports_key_release(&self) -> bool {
        self.key_release_reporting
    }

    /// Runs the application.
    ///
    /// 1. Enables key event type reporting if the terminal supports it
    /// 2. Calls `app.init()` for initialization
    /// 3. Runs the event loop until `app.should_exit()` returns true
    ///    - `Event::Tick`: calls `app.update()` with the elapsed time
    ///    - `Event::Render`: calls `app.draw()`
    ///    - `Event::Crossterm`: calls `app.handle_event()`
    /// 4. Restores the keyboard mode
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            self.key_release_reporting = terminal::supports_keyboard_enhancement().unwrap_or(false);
            if self.key_release_reporting {
                execute!(
                    io::stdout(),
                    PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
                )?;
            }

            let result = self.run_loop(app, terminal);

            if self.key_release_reporting {
                execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
            }
            result
        })
    }

    fn run_loop<A>(&mut self, app: &mut A, terminal: &mut DefaultTerminal) -> io::Result<()>
    where
        A: App,
    {
        app.init(self);
        self.events.start();

        while !app.should_exit() {
            match self.events.next()? {
                TuiEvent::Tick(elapsed) => {
                    app.update(self, elapsed);
                }
                TuiEvent::Render => {
                    terminal.draw(|f| app.draw(f))?;
                }
                TuiEvent::Crossterm(event) => {
                    app.handle_event(self, event);
                }
            }
        }
        Ok(())
    }
}
