use std::iter;

use blockfall_engine::Game;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

pub struct GameStatsDisplay<'a> {
    game: &'a Game,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GameStatsDisplay<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        18 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(ROWS.len()).unwrap() + super::block_vertical_margin(self.block.as_ref())
    }
}

#[derive(Clone, Copy)]
enum Row {
    Empty,
    LabelValue(&'static str, &'static dyn Fn(&Game) -> String),
}

const ROWS: &[Row] = &[
    Row::LabelValue("PIECES:", &|game| game.stats().locked_pieces().to_string()),
    Row::LabelValue("LINES:", &|game| game.stats().cleared_lines().to_string()),
    Row::Empty,
    Row::LabelValue("SINGLES:", &|game| {
        game.stats().line_cleared_counter()[1].to_string()
    }),
    Row::LabelValue("DOUBLES:", &|game| {
        game.stats().line_cleared_counter()[2].to_string()
    }),
    Row::LabelValue("TRIPLES:", &|game| {
        game.stats().line_cleared_counter()[3].to_string()
    }),
    Row::LabelValue("QUADS:", &|game| {
        game.stats().line_cleared_counter()[4].to_string()
    }),
    Row::Empty,
    Row::LabelValue("SPEED:", &|game| {
        if game.fall_timer().is_fast_drop() {
            "FAST".to_owned()
        } else {
            "NORMAL".to_owned()
        }
    }),
];

impl Widget for GameStatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas[..].iter().copied()) {
            match row {
                Row::Empty => {}
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.game), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
