use super::{color::ColorId, point::Point, shape::ShapeKind};

/// A falling piece: four cell coordinates and a color identifier.
///
/// Pieces are values. Movement and rotation return new `Piece` instances, so a
/// candidate can be checked with [`Board::is_valid`](super::board::Board::is_valid)
/// before it replaces the live piece.
///
/// The only ways to obtain a piece are [`Piece::new`] and the transforms below,
/// all of which preserve the shape.
///
/// # Example
///
/// ```
/// use blockfall_engine::{ColorId, Piece, ShapeKind};
///
/// let color = ColorId::new(4).unwrap();
/// let piece = Piece::new(ShapeKind::T, color);
/// let moved = piece.right().down();
/// let rotated = moved.rotated();
/// assert_eq!(rotated.color(), color);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    blocks: [Point; 4],
    color: ColorId,
}

impl Piece {
    /// Index of the block every rotation turns around.
    pub const PIVOT_INDEX: usize = 1;

    /// Creates a piece from the shape catalog.
    ///
    /// Cells are placed in the shape's local 2×4 frame at the top-left of the
    /// board; no spawn offset is applied.
    #[must_use]
    pub fn new(shape: ShapeKind, color: ColorId) -> Self {
        Self {
            blocks: shape.cells(),
            color,
        }
    }

    #[must_use]
    pub fn blocks(&self) -> &[Point; 4] {
        &self.blocks
    }

    #[must_use]
    pub fn color(&self) -> ColorId {
        self.color
    }

    /// Returns the rotation pivot (`blocks[1]`).
    #[must_use]
    pub fn pivot(&self) -> Point {
        self.blocks[Self::PIVOT_INDEX]
    }

    /// Returns this piece translated by `(dx, dy)`.
    #[must_use]
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            blocks: self.blocks.map(|p| p.offset(dx, dy)),
            color: self.color,
        }
    }

    #[must_use]
    pub fn left(&self) -> Self {
        self.moved(-1, 0)
    }

    #[must_use]
    pub fn right(&self) -> Self {
        self.moved(1, 0)
    }

    #[must_use]
    pub fn down(&self) -> Self {
        self.moved(0, 1)
    }

    /// Returns this piece rotated 90° around its pivot block.
    #[must_use]
    pub fn rotated(&self) -> Self {
        self.rotated_about(self.pivot())
    }

    /// Returns this piece rotated 90° around `pivot`.
    ///
    /// Each cell maps to `(pivot.x - (y - pivot.y), pivot.y + (x - pivot.x))`.
    #[must_use]
    pub fn rotated_about(&self, pivot: Point) -> Self {
        Self {
            blocks: self.blocks.map(|p| {
                Point::new(pivot.x - (p.y - pivot.y), pivot.y + (p.x - pivot.x))
            }),
            color: self.color,
        }
    }
}
