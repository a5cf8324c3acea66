use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::event::TuiEvent;

/// Rendering trigger mode.
#[derive(Debug, Clone, Copy, Default)]
pub enum RenderMode {
    /// Render at fixed intervals.
    Interval(Duration),
    /// Render after state changes (tick or crossterm event).
    #[default]
    OnDirty,
    /// Render after state changes, but with minimum interval between renders.
    ///
    /// If events occur faster than the interval, they are batched into one render.
    Throttled(Duration),
}

impl RenderMode {
    /// Creates `Interval` mode from frame rate (FPS).
    #[must_use]
    pub fn interval_from_rate(rate: f64) -> Self {
        Self::Interval(Duration::from_secs_f64(1.0 / rate))
    }

    /// Creates `Throttled` mode from frame rate (FPS).
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Event loop state management.
///
/// Manages tick/render intervals and returns the next event via `next()`.
/// If an interval is not set, that event type will not be generated.
///
/// Ticks are measured on the monotonic clock and report the time since the previous tick, so
/// a late tick carries the full delay rather than the nominal interval.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    render_mode: RenderMode,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop`.
    ///
    /// Tick interval is unset, and render mode defaults to `OnDirty`.
    pub fn new() -> Self {
        let now = Instant::now();
        let past_time = now.checked_sub(Duration::from_secs(86400)).unwrap_or(now);
        Self {
            tick_interval: None,
            render_mode: RenderMode::default(),
            last_tick: now,
            last_render: past_time,
            dirty: true, // Initial render is required on startup
        }
    }

    /// Restarts the tick clock.
    ///
    /// The first tick after this call reports the time elapsed since now.
    pub(super) fn start(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Sets the tick interval.
    ///
    /// Pass `None` to disable tick events.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    /// Sets the render mode.
    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Returns the next event.
    ///
    /// Blocks until a tick/render time is reached or a crossterm event occurs.
    /// If both tick and render are unset, only waits for crossterm events.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            let since_tick = now.duration_since(self.last_tick);
            if let Some(tick_interval) = self.tick_interval
                && since_tick >= tick_interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick(since_tick));
            }

            let do_render = match self.render_mode {
                RenderMode::Interval(interval) => now.duration_since(self.last_render) >= interval,
                RenderMode::OnDirty => self.dirty,
                RenderMode::Throttled(interval) => {
                    self.dirty && now.duration_since(self.last_render) >= interval
                }
            };
            if do_render {
                self.last_render = now;
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        let next_render_at = match self.render_mode {
            RenderMode::Interval(interval) => Some(self.last_render + interval),
            RenderMode::OnDirty => self.dirty.then_some(now),
            RenderMode::Throttled(interval) => self.dirty.then(|| self.last_render + interval),
        };
        let next_timeout_at = [next_tick_at, next_render_at].into_iter().flatten().min()?;
        Some(next_timeout_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_tick_reports_time_since_previous_tick() {
        let mut events = EventLoop::new();
        events.set_tick_interval(Some(Duration::ZERO));
        events.start();

        thread::sleep(Duration::from_millis(20));
        let TuiEvent::Tick(first) = events.next().unwrap() else {
            panic!("expected a tick");
        };
        assert!(first >= Duration::from_millis(20), "{first:?}");

        let TuiEvent::Tick(second) = events.next().unwrap() else {
            panic!("expected a tick");
        };
        assert!(second < first, "{second:?} >= {first:?}");
    }

    #[test]
    fn test_start_restarts_tick_clock() {
        let mut events = EventLoop::new();
        thread::sleep(Duration::from_millis(20));
        events.start();
        events.set_tick_interval(Some(Duration::ZERO));

        let TuiEvent::Tick(elapsed) = events.next().unwrap() else {
            panic!("expected a tick");
        };
        assert!(elapsed < Duration::from_millis(20), "{elapsed:?}");
    }

    #[test]
    fn test_initial_render_is_pending() {
        let mut events = EventLoop::new();
        events.set_tick_interval(Some(Duration::from_secs(60)));
        assert!(events.next().unwrap().is_render());
    }

    #[test]
    fn test_timeout_waits_for_next_tick() {
        let mut events = EventLoop::new();
        events.set_tick_interval(Some(Duration::from_millis(100)));
        events.dirty = false;

        let timeout = events.compute_timeout(Instant::now()).unwrap();
        assert!(timeout <= Duration::from_millis(100));

        events.set_tick_interval(None);
        assert_eq!(events.compute_timeout(Instant::now()), None);
    }
}
