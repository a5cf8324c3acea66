use std::time::Duration;

use arrayvec::ArrayVec;
use blockfall_engine::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Intents beyond this many per frame are dropped.
pub const MAX_QUEUED_INTENTS: usize = 16;

/// How long fast-drop stays held after the last down key event when the
/// terminal cannot report key releases.
pub const FAST_DROP_GRACE: Duration = Duration::from_millis(150);

/// A key event translated into a game-level action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Intent(Intent),
    FastDrop { held: bool },
    Restart,
    Quit,
}

impl Action {
    /// Maps a key event to an action.
    ///
    /// Movement and rotation fire on presses only, so auto-repeat never turns
    /// into extra moves. The down key is level-triggered: presses and repeats
    /// hold it, a release lets it go.
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        let action = match (event.kind, event.code) {
            (KeyEventKind::Press, KeyCode::Left) => Self::Intent(Intent::MoveLeft),
            (KeyEventKind::Press, KeyCode::Right) => Self::Intent(Intent::MoveRight),
            (KeyEventKind::Press, KeyCode::Up) => Self::Intent(Intent::Rotate),
            (KeyEventKind::Press | KeyEventKind::Repeat, KeyCode::Down) => {
                Self::FastDrop { held: true }
            }
            (KeyEventKind::Release, KeyCode::Down) => Self::FastDrop { held: false },
            (KeyEventKind::Press, KeyCode::Char('r' | 'R')) => Self::Restart,
            (KeyEventKind::Press, KeyCode::Char('q' | 'Q') | KeyCode::Esc) => Self::Quit,
            _ => return None,
        };
        Some(action)
    }
}

/// Level-triggered fast-drop signal built from key events.
///
/// With release reporting the signal follows press and release exactly.
/// Without it, each press or repeat holds the signal for [`FAST_DROP_GRACE`].
#[derive(Debug, Clone)]
pub struct FastDropLatch {
    key_release_reporting: bool,
    held: bool,
    since_last_event: Duration,
}

impl FastDropLatch {
    pub fn new(key_release_reporting: bool) -> Self {
        Self {
            key_release_reporting,
            held: false,
            since_last_event: Duration::ZERO,
        }
    }

    pub fn set_held(&mut self, held: bool) {
        self.held = held;
        self.since_last_event = Duration::ZERO;
    }

    /// Advances the grace window and returns whether fast-drop is held for
    /// this frame.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.key_release_reporting && self.held {
            self.since_last_event = self.since_last_event.saturating_add(elapsed);
            if self.since_last_event > FAST_DROP_GRACE {
                self.held = false;
            }
        }
        self.held
    }

    pub fn release(&mut self) {
        self.set_held(false);
    }
}

/// Input gathered between two frames.
#[derive(Debug, Clone)]
pub struct InputState {
    intents: ArrayVec<Intent, MAX_QUEUED_INTENTS>,
    fast_drop: FastDropLatch,
}

impl InputState {
    pub fn new(key_release_reporting: bool) -> Self {
        Self {
            intents: ArrayVec::new(),
            fast_drop: FastDropLatch::new(key_release_reporting),
        }
    }

    pub fn push_intent(&mut self, intent: Intent) {
        _ = self.intents.try_push(intent);
    }

    pub fn set_fast_drop(&mut self, held: bool) {
        self.fast_drop.set_held(held);
    }

    /// Returns the frame's intents in arrival order and the fast-drop level,
    /// leaving the queue empty.
    pub fn take_frame(
        &mut self,
        elapsed: Duration,
    ) -> (ArrayVec<Intent, MAX_QUEUED_INTENTS>, bool) {
        let fast_drop = self.fast_drop.advance(elapsed);
        (std::mem::take(&mut self.intents), fast_drop)
    }

    pub fn clear(&mut self) {
        self.intents.clear();
        self.fast_drop.release();
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_key_mapping() {
        use KeyEventKind::{Press, Release, Repeat};

        let held = |held| Some(Action::FastDrop { held });
        let cases = [
            (KeyCode::Left, Press, Some(Action::Intent(Intent::MoveLeft))),
            (KeyCode::Right, Press, Some(Action::Intent(Intent::MoveRight))),
            (KeyCode::Up, Press, Some(Action::Intent(Intent::Rotate))),
            (KeyCode::Down, Press, held(true)),
            (KeyCode::Down, Repeat, held(true)),
            (KeyCode::Down, Release, held(false)),
            (KeyCode::Char('r'), Press, Some(Action::Restart)),
            (KeyCode::Char('q'), Press, Some(Action::Quit)),
            (KeyCode::Esc, Press, Some(Action::Quit)),
            (KeyCode::Char('x'), Press, None),
        ];
        for (code, kind, expected) in cases {
            let actual = Action::from_key_event(&key(code, kind));
            assert_eq!(actual, expected, "{code:?} {kind:?}");
        }
    }

    #[test]
    fn test_moves_ignore_repeat_and_release() {
        for code in [KeyCode::Left, KeyCode::Right, KeyCode::Up] {
            assert_eq!(Action::from_key_event(&key(code, KeyEventKind::Repeat)), None);
            assert_eq!(Action::from_key_event(&key(code, KeyEventKind::Release)), None);
        }
    }

    #[test]
    fn test_latch_with_release_reporting() {
        let mut latch = FastDropLatch::new(true);
        assert!(!latch.advance(ms(16)));

        latch.set_held(true);
        for _ in 0..100 {
            assert!(latch.advance(ms(16)));
        }
        latch.set_held(false);
        assert!(!latch.advance(ms(16)));
    }

    #[test]
    fn test_latch_grace_window_without_release_reporting() {
        let mut latch = FastDropLatch::new(false);
        latch.set_held(true);
        assert!(latch.advance(ms(100)));
        assert!(latch.advance(ms(50)));
        assert!(!latch.advance(ms(1)));

        // A repeat refreshes the window.
        latch.set_held(true);
        assert!(latch.advance(ms(140)));
        latch.set_held(true);
        assert!(latch.advance(ms(140)));
    }

    #[test]
    fn test_frame_drains_intents_in_order() {
        let mut input = InputState::new(true);
        input.push_intent(Intent::MoveLeft);
        input.push_intent(Intent::Rotate);
        input.set_fast_drop(true);

        let (intents, fast_drop) = input.take_frame(ms(16));
        assert_eq!(intents.as_slice(), &[Intent::MoveLeft, Intent::Rotate]);
        assert!(fast_drop);

        let (intents, fast_drop) = input.take_frame(ms(16));
        assert!(intents.is_empty());
        assert!(fast_drop);
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut input = InputState::new(true);
        for _ in 0..MAX_QUEUED_INTENTS + 5 {
            input.push_intent(Intent::MoveRight);
        }
        let (intents, _) = input.take_frame(ms(16));
        assert_eq!(intents.len(), MAX_QUEUED_INTENTS);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut input = InputState::new(true);
        input.push_intent(Intent::Rotate);
        input.set_fast_drop(true);
        input.clear();

        let (intents, fast_drop) = input.take_frame(ms(16));
        assert!(intents.is_empty());
        assert!(!fast_drop);
    }
}
