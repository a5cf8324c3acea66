/// Discrete player requests.
///
/// Each intent is delivered once per key press. Holding fast-drop is a
/// level-triggered signal and is passed separately, see
/// [`Game::set_fast_drop`](super::Game::set_fast_drop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Shift the piece one column left.
    MoveLeft,
    /// Shift the piece one column right.
    MoveRight,
    /// Rotate the piece 90° around its pivot (bound to the up key).
    Rotate,
}
