/// Counters collected over a game.
///
/// - **Locked pieces**: number of pieces merged into the board
/// - **Cleared lines**: total rows removed
/// - **Line clear distribution**: how many locks removed 0, 1, 2, 3 or 4 rows
///
/// No score is derived from these numbers.
///
/// # Example
///
/// ```
/// use blockfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_lock(0);
/// stats.complete_lock(2);
///
/// assert_eq!(stats.locked_pieces(), 2);
/// assert_eq!(stats.cleared_lines(), 2);
/// assert_eq!(stats.line_cleared_counter()[2], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    locked_pieces: usize,
    cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locked_pieces: 0,
            cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    #[must_use]
    pub const fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    /// Returns a histogram of locks by number of rows they cleared.
    ///
    /// Index `n` counts the locks that removed `n` rows. A piece spans at most
    /// 4 rows, so larger clears cannot happen.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Records one lock that removed `cleared_lines` rows.
    pub const fn complete_lock(&mut self, cleared_lines: usize) {
        self.locked_pieces += 1;
        self.cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
    }
}
