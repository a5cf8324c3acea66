use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::point::Point;

/// Cell table for the seven piece shapes.
///
/// Each entry holds 4 indices into a 2×4 local frame, decoded as
/// `x = index % 2` and `y = index / 2`. The order of the indices is part of the
/// table: the second cell of every shape is its rotation pivot.
pub const SHAPES: [[u8; 4]; ShapeKind::LEN] = [
    [1, 3, 5, 7], // I
    [2, 4, 5, 7], // Z
    [3, 5, 4, 6], // S
    [3, 5, 4, 7], // T
    [2, 3, 5, 7], // L
    [3, 5, 7, 6], // J
    [2, 3, 4, 5], // O
];

/// Enum representing the shape of a piece.
///
/// The discriminant is the row index into [`SHAPES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum ShapeKind {
    /// I-piece.
    I = 0,
    /// Z-piece.
    Z = 1,
    /// S-piece.
    S = 2,
    /// T-piece.
    T = 3,
    /// L-piece.
    L = 4,
    /// J-piece.
    J = 5,
    /// O-piece.
    O = 6,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        ShapeKind::ALL[rng.random_range(0..ShapeKind::LEN)]
    }
}

impl ShapeKind {
    /// Number of shapes (7).
    pub const LEN: usize = 7;

    /// All shapes in table order.
    pub const ALL: [Self; Self::LEN] = [
        ShapeKind::I,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
    ];

    /// Returns the row index of this shape in [`SHAPES`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a shape by its row index in [`SHAPES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_index(3), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_index(7), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::LEN {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the raw frame indices of this shape.
    #[must_use]
    pub const fn offsets(self) -> [u8; 4] {
        SHAPES[self as usize]
    }

    /// Decodes the shape into local coordinates inside its 2×4 frame.
    ///
    /// Cells are returned in table order.
    #[must_use]
    pub fn cells(self) -> [Point; 4] {
        self.offsets()
            .map(|index| Point::new(i32::from(index % 2), i32::from(index / 2)))
    }

    /// Returns the single character representation of this shape.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::Z => 'Z',
            ShapeKind::S => 'S',
            ShapeKind::T => 'T',
            ShapeKind::L => 'L',
            ShapeKind::J => 'J',
            ShapeKind::O => 'O',
        }
    }

    /// Parses a shape from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_char('O'), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(ShapeKind::I),
            'Z' => Some(ShapeKind::Z),
            'S' => Some(ShapeKind::S),
            'T' => Some(ShapeKind::T),
            'L' => Some(ShapeKind::L),
            'J' => Some(ShapeKind::J),
            'O' => Some(ShapeKind::O),
            _ => None,
        }
    }
}
