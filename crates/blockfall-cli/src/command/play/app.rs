use std::time::Duration;

use blockfall_engine::Game;
use crossterm::event::Event;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use ratatui_runtime::{App, RenderMode, Runtime};

use crate::{
    command::play::input::{Action, InputState},
    view::widgets::{GameDisplay, KeyBinding, KeyBindingDisplay},
};

const KEY_BINDINGS: &[KeyBinding] = &[
    (&["←", "→"], "Move"),
    (&["↑"], "Rotate"),
    (&["↓"], "Fast Drop"),
    (&["R"], "Restart"),
    (&["Q", "Esc"], "Quit"),
];

#[derive(Debug)]
pub struct PlayApp {
    game: Game,
    input: InputState,
    fps: f64,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(game: Game, fps: f64) -> Self {
        Self {
            game,
            input: InputState::new(false),
            fps,
            is_exiting: false,
        }
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Intent(intent) => self.input.push_intent(intent),
            Action::FastDrop { held } => self.input.set_fast_drop(held),
            Action::Restart => {
                self.game.restart();
                self.input.clear();
            }
            Action::Quit => self.is_exiting = true,
        }
    }

    fn advance_frame(&mut self, elapsed: Duration) {
        let (intents, fast_drop) = self.input.take_frame(elapsed);
        self.game.advance_frame(elapsed, &intents, fast_drop);
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(self.fps));
        runtime.set_render_mode(RenderMode::throttled_from_rate(self.fps));
        self.input = InputState::new(runtime.reports_key_release());
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        let action = event
            .as_key_event()
            .and_then(|key| Action::from_key_event(&key));
        if let Some(action) = action {
            self.apply(action);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(22), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(GameDisplay::new(&self.game), main_area);
        frame.render_widget(KeyBindingDisplay::new(KEY_BINDINGS), help_area);
    }

    fn update(&mut self, _runtime: &mut Runtime, elapsed: Duration) {
        self.advance_frame(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{GameConfig, Intent, SpawnSeed};

    use super::*;

    fn app() -> PlayApp {
        let game = Game::with_seed(GameConfig::default(), SpawnSeed::from_bytes([3; 16]));
        PlayApp::new(game, 60.0)
    }

    #[test]
    fn test_queued_intents_apply_on_next_frame() {
        let mut app = app();
        let start = *app.game.current_piece();

        app.apply(Action::Intent(Intent::MoveRight));
        assert_eq!(app.game.current_piece(), &start);

        app.advance_frame(Duration::from_millis(16));
        assert_eq!(app.game.current_piece(), &start.right());
    }

    #[test]
    fn test_fast_drop_reaches_fall_timer() {
        let mut app = app();
        app.apply(Action::FastDrop { held: true });
        app.advance_frame(Duration::from_millis(16));
        assert!(app.game.fall_timer().is_fast_drop());

        app.apply(Action::FastDrop { held: false });
        app.advance_frame(Duration::from_millis(16));
        assert!(!app.game.fall_timer().is_fast_drop());
    }

    #[test]
    fn test_restart_discards_pending_input() {
        let mut app = app();
        for _ in 0..200 {
            app.advance_frame(Duration::from_millis(100));
        }
        assert!(app.game.stats().locked_pieces() > 0);

        app.apply(Action::Intent(Intent::MoveRight));
        app.apply(Action::Restart);
        assert_eq!(app.game.stats().locked_pieces(), 0);

        let start = *app.game.current_piece();
        app.advance_frame(Duration::from_millis(16));
        assert_eq!(app.game.current_piece(), &start);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_exit());
        app.apply(Action::Quit);
        assert!(app.should_exit());
    }
}
