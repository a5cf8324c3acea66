use blockfall_engine::{Game, GameStatus};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use super::{BoardDisplay, GameStatsDisplay, color, style};

/// Board and stats panel side by side, with a popup once the game is over.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    game: &'a Game,
}

impl<'a> GameDisplay<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = match self.game.status() {
            GameStatus::Falling => color::WHITE,
            GameStatus::GameOver => color::RED,
        };

        let game_board = BoardDisplay::new(self.game.board())
            .current_piece(*self.game.current_piece())
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .style(style::DEFAULT),
            );
        let game_stats = GameStatsDisplay::new(self.game).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::horizontal(1))
                .border_style(border_style)
                .style(style::DEFAULT),
        );

        let [stats_column, board_column] = Layout::horizontal([
            Constraint::Length(game_stats.width()),
            Constraint::Length(game_board.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(game_stats.height())]).areas(stats_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(board_column);

        let game_board_width = game_board.width();
        game_stats.render(stats_area, buf);
        game_board.render(board_area, buf);

        if self.game.status().is_game_over() {
            let style = Style::new().fg(color::WHITE).bg(color::RED);
            let block = Block::new().style(style);
            let text = Text::styled("GAME OVER", style).centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
