use super::{color::ColorId, piece::Piece, point::Point};

/// Board width in cells (10 columns).
pub const BOARD_WIDTH: usize = 10;
/// Board height in cells (20 rows).
pub const BOARD_HEIGHT: usize = 20;

/// A single board cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a locked piece of the given color.
    Color(ColorId),
}

impl Block {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Block::Empty
    }

    #[must_use]
    pub fn color(self) -> Option<ColorId> {
        match self {
            Block::Empty => None,
            Block::Color(color) => Some(color),
        }
    }

    /// Returns the raw cell value: `0` when empty, otherwise the color identifier.
    #[must_use]
    pub fn raw(self) -> u8 {
        self.color().map_or(0, ColorId::get)
    }
}

pub type BoardRow = [Block; BOARD_WIDTH];

const EMPTY_ROW: BoardRow = [Block::Empty; BOARD_WIDTH];

fn is_row_full(row: &BoardRow) -> bool {
    row.iter().all(|block| !block.is_empty())
}

/// The 10×20 grid of locked cells.
///
/// Row 0 is the top of the board, row 19 the bottom. The board only changes
/// through [`Board::lock`] and [`Board::clear_lines`].
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, ColorId, Piece, ShapeKind};
///
/// let mut board = Board::EMPTY;
/// let piece = Piece::new(ShapeKind::O, ColorId::new(2).unwrap()).moved(4, 17);
/// assert!(board.is_valid(&piece));
///
/// board.lock(&piece);
/// assert!(!board.is_valid(&piece));
/// assert_eq!(board.clear_lines(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [BoardRow; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [EMPTY_ROW; BOARD_HEIGHT],
    };

    /// Returns all rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[BoardRow; BOARD_HEIGHT] {
        &self.rows
    }

    /// Returns the cell at `(x, y)`, or `None` outside the board.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<Block> {
        self.rows.get(y)?.get(x).copied()
    }

    /// Returns the raw cell values (`0` empty, `1..=7` color identifier).
    #[must_use]
    pub fn raw_cells(&self) -> [[u8; BOARD_WIDTH]; BOARD_HEIGHT] {
        self.rows.map(|row| row.map(Block::raw))
    }

    /// Checks whether `piece` may occupy its current cells.
    ///
    /// A cell is rejected when its column is outside `0..10` or its row is at
    /// or below the bottom edge. Cells above the board (`y < 0`) are only
    /// bounds-checked on the column; every other cell must be empty.
    #[must_use]
    pub fn is_valid(&self, piece: &Piece) -> bool {
        piece.blocks().iter().all(|&point| self.accepts(point))
    }

    fn accepts(&self, point: Point) -> bool {
        let Some(x) = usize::try_from(point.x).ok().filter(|&x| x < BOARD_WIDTH) else {
            return false;
        };
        match usize::try_from(point.y) {
            // Above the visible board.
            Err(_) => true,
            Ok(y) if y >= BOARD_HEIGHT => false,
            Ok(y) => self.rows[y][x].is_empty(),
        }
    }

    /// Writes the piece's color into every cell it covers on the board.
    ///
    /// Cells above the board (`y < 0`) are dropped.
    pub fn lock(&mut self, piece: &Piece) {
        for point in piece.blocks() {
            let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) else {
                continue;
            };
            if let Some(cell) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
                *cell = Block::Color(piece.color());
            }
        }
    }

    /// Removes full rows and lets the remaining rows fall, keeping their order.
    ///
    /// Rows are compacted in one bottom-up pass; rows vacated at the top are
    /// emptied. Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> usize {
        // Rows `write..` hold the compacted result.
        let mut write = BOARD_HEIGHT;
        for read in (0..BOARD_HEIGHT).rev() {
            if is_row_full(&self.rows[read]) {
                continue;
            }
            write -= 1;
            if write != read {
                self.rows[write] = self.rows[read];
            }
        }
        self.rows[..write].fill(EMPTY_ROW);
        write
    }

    /// Creates a `Board` from ASCII art, mainly for tests.
    ///
    /// `.` is an empty cell and `1`-`7` a cell of that color. Rows are given
    /// top to bottom and aligned to the bottom of the board, so a two-line art
    /// fills rows 18 and 19. Whitespace inside a line is ignored.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        assert!(
            lines.len() <= BOARD_HEIGHT,
            "At most {BOARD_HEIGHT} rows are allowed, got {}",
            lines.len()
        );

        let mut board = Self::EMPTY;
        let top = BOARD_HEIGHT - lines.len();
        for (i, line) in lines.iter().enumerate() {
            let cells: Vec<Block> = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    if c == '.' {
                        return Block::Empty;
                    }
                    let color = c
                        .to_digit(10)
                        .and_then(|d| u8::try_from(d).ok())
                        .and_then(ColorId::new);
                    match color {
                        Some(color) => Block::Color(color),
                        None => panic!("Invalid cell {c:?} at row {}", top + i),
                    }
                })
                .collect();
            assert_eq!(
                cells.len(),
                BOARD_WIDTH,
                "Each row must have exactly {BOARD_WIDTH} cells, got {} at row {}",
                cells.len(),
                top + i
            );
            board.rows[top + i].copy_from_slice(&cells);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use crate::core::shape::ShapeKind;

    use super::*;

    fn color(value: u8) -> ColorId {
        ColorId::new(value).unwrap()
    }

    fn piece(shape: ShapeKind, value: u8, dx: i32, dy: i32) -> Piece {
        Piece::new(shape, color(value)).moved(dx, dy)
    }

    #[test]
    fn test_initial_board_is_empty() {
        let board = Board::EMPTY;
        assert!(board.rows().iter().flatten().all(|b| b.is_empty()));
        assert_eq!(board.raw_cells(), [[0; BOARD_WIDTH]; BOARD_HEIGHT]);
        assert_eq!(Board::default(), board);
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Board::EMPTY;
        assert_eq!(board.cell(0, 0), Some(Block::Empty));
        assert_eq!(board.cell(BOARD_WIDTH, 0), None);
        assert_eq!(board.cell(0, BOARD_HEIGHT), None);
    }

    #[test]
    fn test_valid_inside_empty_board() {
        let board = Board::EMPTY;
        for shape in ShapeKind::ALL {
            assert!(board.is_valid(&piece(shape, 1, 0, 0)), "{shape:?}");
            assert!(board.is_valid(&piece(shape, 1, 8, 16)), "{shape:?}");
        }
    }

    #[test]
    fn test_invalid_outside_columns() {
        let board = Board::EMPTY;
        // O occupies local columns 0 and 1.
        assert!(!board.is_valid(&piece(ShapeKind::O, 1, -1, 0)));
        assert!(board.is_valid(&piece(ShapeKind::O, 1, 8, 0)));
        assert!(!board.is_valid(&piece(ShapeKind::O, 1, 9, 0)));
    }

    #[test]
    fn test_invalid_below_bottom() {
        let board = Board::EMPTY;
        // I occupies local rows 0..4.
        assert!(board.is_valid(&piece(ShapeKind::I, 1, 0, 16)));
        assert!(!board.is_valid(&piece(ShapeKind::I, 1, 0, 17)));
    }

    #[test]
    fn test_cells_above_board_skip_occupancy() {
        let board = Board::from_ascii(
            "
            1111111111
            ",
        );
        let mut full = Board::EMPTY;
        full.rows.fill([Block::Color(color(1)); BOARD_WIDTH]);

        let above = piece(ShapeKind::I, 2, 3, -4);
        assert!(full.is_valid(&above));
        assert!(board.is_valid(&above));
        // Still bounds-checked on the column.
        assert!(!full.is_valid(&piece(ShapeKind::I, 2, -2, -4)));
        assert!(!full.is_valid(&piece(ShapeKind::I, 2, 9, -4)));
        // Dipping one cell into the board hits row 0.
        assert!(!full.is_valid(&piece(ShapeKind::I, 2, 3, -3)));
    }

    #[test]
    fn test_invalid_on_occupied_cell() {
        let board = Board::from_ascii(
            "
            ....3.....
            ",
        );
        // O covers columns 3..5 of rows 18..20.
        assert!(!board.is_valid(&piece(ShapeKind::O, 1, 3, 17)));
        assert!(board.is_valid(&piece(ShapeKind::O, 1, 5, 17)));
        assert!(board.is_valid(&piece(ShapeKind::O, 1, 3, 15)));
    }

    #[test]
    fn test_lock_writes_piece_color() {
        let mut board = Board::EMPTY;
        let piece = piece(ShapeKind::T, 5, 4, 10);
        board.lock(&piece);

        let mut count = 0;
        for (y, row) in board.rows().iter().enumerate() {
            for (x, block) in row.iter().enumerate() {
                let covered = piece
                    .blocks()
                    .iter()
                    .any(|p| usize::try_from(p.x) == Ok(x) && usize::try_from(p.y) == Ok(y));
                if covered {
                    assert_eq!(*block, Block::Color(color(5)));
                    count += 1;
                } else {
                    assert!(block.is_empty());
                }
            }
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn test_lock_drops_cells_above_board() {
        let mut board = Board::EMPTY;
        // I at rows -2..2: only rows 0 and 1 land on the board.
        board.lock(&piece(ShapeKind::I, 4, 6, -2));

        let occupied: Vec<(usize, usize, u8)> = board
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, b)| !b.is_empty())
                    .map(move |(x, b)| (x, y, b.raw()))
            })
            .collect();
        assert_eq!(occupied, vec![(7, 0, 4), (7, 1, 4)]);
    }

    #[test]
    fn test_clear_single_bottom_row() {
        let mut board = Board::from_ascii(
            "
            3333333333
            ",
        );
        assert_eq!(board.clear_lines(), 1);
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_clear_preserves_order_between_full_rows() {
        let mut board = Board::from_ascii(
            "
            1111111111
            12.4.6.1..
            2222222222
            ",
        );
        assert_eq!(board.clear_lines(), 2);
        let expected = Board::from_ascii(
            "
            12.4.6.1..
            ",
        );
        assert_eq!(board, expected);
    }

    #[test]
    fn test_clear_shifts_rows_above() {
        let mut board = Board::from_ascii(
            "
            7.........
            .6........
            5555555555
            ..4.......
            ",
        );
        assert_eq!(board.clear_lines(), 1);
        let expected = Board::from_ascii(
            "
            7.........
            .6........
            ..4.......
            ",
        );
        assert_eq!(board, expected);
    }

    #[test]
    fn test_clear_is_stable_once_compacted() {
        let art = "
            1111111111
            111111111.
            .222222222
            ";
        let mut board = Board::from_ascii(art);
        assert_eq!(board.clear_lines(), 1);
        let expected = Board::from_ascii(
            "
            111111111.
            .222222222
            ",
        );
        assert_eq!(board, expected);

        let mut untouched = expected.clone();
        assert_eq!(untouched.clear_lines(), 0);
        assert_eq!(untouched, expected);
    }

    #[test]
    fn test_clear_all_rows() {
        let mut board = Board::EMPTY;
        board.rows.fill([Block::Color(color(2)); BOARD_WIDTH]);
        assert_eq!(board.clear_lines(), BOARD_HEIGHT);
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_from_ascii_is_bottom_aligned() {
        let board = Board::from_ascii(
            "
            1.........
            .........7
            ",
        );
        assert_eq!(board.cell(0, 18), Some(Block::Color(color(1))));
        assert_eq!(board.cell(9, 19), Some(Block::Color(color(7))));
        assert_eq!(board.raw_cells()[19][9], 7);
    }
}
