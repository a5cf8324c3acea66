use std::time::Duration;

use crate::core::{board::Board, piece::Piece};

use super::{
    config::GameConfig,
    fall_timer::FallTimer,
    game_stats::GameStats,
    intent::Intent,
    piece_spawner::{PieceSpawner, SpawnSeed},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// A live piece is being controlled and falls under gravity.
    Falling,
    /// A freshly spawned piece did not fit. Only reachable with
    /// [`GameConfig::detect_top_out`].
    GameOver,
}

/// Result of a gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GravityOutcome {
    /// The piece moved down one row.
    Moved,
    /// The piece could not move down: it was locked, full rows were cleared and
    /// a new piece was spawned.
    Locked { cleared_lines: usize },
}

/// The game state machine.
///
/// Owns the board, the current piece, the fall timer and the spawner. Every
/// change to the current piece builds a candidate, checks it with
/// [`Board::is_valid`] and only then replaces the stored piece; rejected
/// candidates are dropped without further effect.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use blockfall_engine::{Game, GameConfig, GravityOutcome, Intent};
///
/// let mut game = Game::new(GameConfig::default());
/// assert!(game.apply_intent(Intent::MoveRight));
///
/// // Not enough time for gravity yet.
/// assert_eq!(game.advance_frame(Duration::from_millis(100), &[], false), None);
/// // Fast-drop shortens the delay.
/// assert_eq!(
///     game.advance_frame(Duration::from_millis(10), &[], true),
///     Some(GravityOutcome::Moved)
/// );
/// assert_eq!(game.fall_timer().elapsed(), Duration::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    current_piece: Piece,
    fall_timer: FallTimer,
    spawner: PieceSpawner,
    status: GameStatus,
    stats: GameStats,
}

impl Game {
    /// Starts a game with pieces drawn from an OS-seeded spawner.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_spawner(config, PieceSpawner::new())
    }

    /// Starts a game whose piece sequence is determined by `seed`.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: SpawnSeed) -> Self {
        Self::with_spawner(config, PieceSpawner::with_seed(seed))
    }

    fn with_spawner(config: GameConfig, mut spawner: PieceSpawner) -> Self {
        let current_piece = spawner.spawn();
        Self {
            fall_timer: FallTimer::new(&config),
            config,
            board: Board::EMPTY,
            current_piece,
            spawner,
            status: GameStatus::Falling,
            stats: GameStats::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_piece(&self) -> &Piece {
        &self.current_piece
    }

    #[must_use]
    pub fn fall_timer(&self) -> &FallTimer {
        &self.fall_timer
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// The seed of the piece sequence, for replaying this game.
    #[must_use]
    pub fn seed(&self) -> SpawnSeed {
        self.spawner.seed()
    }

    /// Replaces the current piece if `candidate` is valid on the board.
    ///
    /// Returns whether the candidate was committed.
    fn try_commit(&mut self, candidate: Piece) -> bool {
        if self.status.is_game_over() || !self.board.is_valid(&candidate) {
            return false;
        }
        self.current_piece = candidate;
        true
    }

    pub fn try_move_left(&mut self) -> bool {
        self.try_commit(self.current_piece.left())
    }

    pub fn try_move_right(&mut self) -> bool {
        self.try_commit(self.current_piece.right())
    }

    pub fn try_rotate(&mut self) -> bool {
        self.try_commit(self.current_piece.rotated())
    }

    /// Applies one intent. Returns `false` when the move was rejected.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::MoveLeft => self.try_move_left(),
            Intent::MoveRight => self.try_move_right(),
            Intent::Rotate => self.try_rotate(),
        }
    }

    /// Selects the fast or normal gravity delay. Never moves the piece.
    pub fn set_fast_drop(&mut self, held: bool) {
        self.fall_timer.set_fast_drop(held);
    }

    /// Runs one gravity step immediately, regardless of the fall timer.
    ///
    /// Returns `None` once the game is over.
    pub fn gravity_tick(&mut self) -> Option<GravityOutcome> {
        if self.status.is_game_over() {
            return None;
        }
        if self.try_commit(self.current_piece.down()) {
            return Some(GravityOutcome::Moved);
        }
        let cleared_lines = self.lock_current_piece();
        Some(GravityOutcome::Locked { cleared_lines })
    }

    /// Runs a gravity step if the fall timer has exceeded its current delay.
    pub fn update(&mut self) -> Option<GravityOutcome> {
        if self.status.is_game_over() || !self.fall_timer.fire() {
            return None;
        }
        self.gravity_tick()
    }

    /// Processes one frame of input and time.
    ///
    /// In order: the elapsed time is accumulated, `intents` are applied as they
    /// arrived, the fast-drop signal is sampled, and gravity is checked.
    pub fn advance_frame(
        &mut self,
        elapsed: Duration,
        intents: &[Intent],
        fast_drop_held: bool,
    ) -> Option<GravityOutcome> {
        self.fall_timer.accumulate(elapsed);
        for &intent in intents {
            self.apply_intent(intent);
        }
        self.set_fast_drop(fast_drop_held);
        self.update()
    }

    /// Starts over on an empty board with the same configuration and spawner.
    pub fn restart(&mut self) {
        self.board = Board::EMPTY;
        self.fall_timer.reset();
        self.stats = GameStats::new();
        self.status = GameStatus::Falling;
        self.current_piece = self.spawner.spawn();
    }

    fn lock_current_piece(&mut self) -> usize {
        self.board.lock(&self.current_piece);
        let cleared_lines = self.board.clear_lines();
        self.stats.complete_lock(cleared_lines);

        self.current_piece = self.spawner.spawn();
        if self.config.detect_top_out && !self.board.is_valid(&self.current_piece) {
            self.status = GameStatus::GameOver;
        }
        cleared_lines
    }
}
