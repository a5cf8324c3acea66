/// A cell coordinate on (or above) the board.
///
/// - `x` grows rightward, valid columns are `0..10`
/// - `y` grows downward, valid rows are `0..20`
///
/// `y` may be negative while a piece is still entering the board from above.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}
