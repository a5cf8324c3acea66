pub use self::{board::*, color::*, piece::*, point::*, shape::*};

pub(crate) mod board;
pub(crate) mod color;
pub(crate) mod piece;
pub(crate) mod point;
pub(crate) mod shape;
