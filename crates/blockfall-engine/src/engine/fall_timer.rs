use std::time::Duration;

use super::config::GameConfig;

/// Gravity clock of a game.
///
/// Elapsed frame time is accumulated and compared against one of two delays,
/// chosen by whether fast-drop is held. When the accumulated time exceeds the
/// active delay, a gravity step fires and the accumulator restarts from zero:
/// overshoot is discarded, so a long frame never produces more than one step.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use blockfall_engine::{FallTimer, GameConfig};
///
/// let mut timer = FallTimer::new(&GameConfig::default());
/// assert!(!timer.advance(Duration::from_millis(200)));
/// assert!(timer.advance(Duration::from_secs(5)));
/// assert_eq!(timer.elapsed(), Duration::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct FallTimer {
    elapsed: Duration,
    normal_delay: Duration,
    fast_delay: Duration,
    fast_drop: bool,
}

impl FallTimer {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            elapsed: Duration::ZERO,
            normal_delay: config.normal_delay,
            fast_delay: config.fast_delay,
            fast_drop: false,
        }
    }

    /// Time accumulated since the last gravity step.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn is_fast_drop(&self) -> bool {
        self.fast_drop
    }

    /// The delay the next gravity check compares against.
    #[must_use]
    pub fn current_delay(&self) -> Duration {
        if self.fast_drop {
            self.fast_delay
        } else {
            self.normal_delay
        }
    }

    pub fn set_fast_drop(&mut self, held: bool) {
        self.fast_drop = held;
    }

    pub fn accumulate(&mut self, elapsed: Duration) {
        self.elapsed = self.elapsed.saturating_add(elapsed);
    }

    /// Consumes the accumulated time if it exceeds the current delay.
    ///
    /// Returns `true` when a gravity step is due.
    pub fn fire(&mut self) -> bool {
        if self.elapsed > self.current_delay() {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// [`accumulate`](Self::accumulate) followed by [`fire`](Self::fire).
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulate(elapsed);
        self.fire()
    }

    /// Drops the accumulated time and releases fast-drop.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.fast_drop = false;
    }
}
