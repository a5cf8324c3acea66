use std::iter;

use blockfall_engine::{BOARD_HEIGHT, BOARD_WIDTH, Block, Board, BoardRow, Piece};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use super::BlockDisplay;

#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    current_piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            current_piece: None,
            block: None,
        }
    }

    pub fn current_piece(self, piece: Piece) -> Self {
        Self {
            current_piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        u16::try_from(BOARD_WIDTH).unwrap() * BlockDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(BOARD_HEIGHT).unwrap() * BlockDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }

    /// Board cells with the current piece drawn on top.
    ///
    /// Piece cells above the board are not shown.
    fn composed_rows(&self) -> [BoardRow; BOARD_HEIGHT] {
        let mut rows = *self.board.rows();
        if let Some(piece) = self.current_piece {
            for p in piece.blocks() {
                if let (Ok(x), Ok(y)) = (usize::try_from(p.x), usize::try_from(p.y))
                    && x < BOARD_WIDTH
                    && y < BOARD_HEIGHT
                {
                    rows[y][x] = Block::Color(piece.color());
                }
            }
        }
        rows
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..BOARD_WIDTH).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints = (0..BOARD_HEIGHT).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid_cells = area
            .layout::<BOARD_HEIGHT>(&vertical)
            .into_iter()
            .map(|row| row.layout::<BOARD_WIDTH>(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, self.composed_rows()) {
            for (grid_cell, block) in iter::zip(grid_row, row) {
                BlockDisplay::from_block(block).render(grid_cell, buf);
            }
        }
    }
}
