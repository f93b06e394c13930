use std::fmt;

use super::drop::landing_row;
use super::grid::{Grid, HEIGHT, WIDTH};
use super::player::Player;
use super::presenter::Presenter;
use super::win::has_won;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Winner(Player),
    Tie,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::Ongoing
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "In progress"),
            GameOutcome::Winner(player) => write!(f, "{player} won!"),
            GameOutcome::Tie => write!(f, "Tie!"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    Terminal,
}

/// Why a move was dropped without touching the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    ColumnFull,
    OutOfRange,
    GameOver,
}

/// What happened to a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Ignored(Ignored),
    Placed {
        row: usize,
        col: usize,
        player: Player,
        outcome: GameOutcome,
    },
}

/// A single game session: the grid, whose turn it is and how the game stands.
///
/// All mutation goes through [`GameState::play`], which also tells the
/// [`Presenter`] what changed.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    grid: Grid,
    current_player: Player,
    outcome: GameOutcome,
    move_count: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            grid: Grid::new(),
            current_player: Player::One, // Player 1 starts
            outcome: GameOutcome::Ongoing,
            move_count: 0,
        }
    }

    /// Create a new session and announce the empty board
    pub fn start<P: Presenter + ?Sized>(presenter: &mut P) -> Self {
        let state = Self::initial();
        tracing::info!(height = HEIGHT, width = WIDTH, "new game");
        presenter.board_ready(state.grid.height(), state.grid.width());
        state
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn phase(&self) -> Phase {
        if self.outcome.is_terminal() {
            Phase::Terminal
        } else {
            Phase::AwaitingMove
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.phase() == Phase::Terminal
    }

    /// Pieces placed so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..WIDTH)
            .filter(|&col| landing_row(&self.grid, col).is_some())
            .collect()
    }

    /// Drop the current player's piece into `col`.
    ///
    /// Full columns, out-of-range columns and moves after the game has ended
    /// are ignored without notifying the presenter.
    pub fn play<P: Presenter + ?Sized>(&mut self, col: usize, presenter: &mut P) -> MoveResult {
        if self.is_terminal() {
            tracing::debug!(col, "move after game over ignored");
            return MoveResult::Ignored(Ignored::GameOver);
        }

        if col >= WIDTH {
            tracing::warn!(col, width = WIDTH, "column out of range");
            return MoveResult::Ignored(Ignored::OutOfRange);
        }

        let Some(row) = landing_row(&self.grid, col) else {
            tracing::debug!(col, "column full, move ignored");
            return MoveResult::Ignored(Ignored::ColumnFull);
        };

        let player = self.current_player;
        if let Err(err) = self.grid.occupy(row, col, player) {
            tracing::error!(%err, row, col, "landing row rejected by grid");
            panic!("drop resolver and grid out of sync: {err}");
        }
        self.move_count += 1;
        tracing::debug!(row, col, player = player.id(), "piece placed");
        presenter.piece_placed(row, col, player);

        if has_won(&self.grid, player) {
            self.finish(GameOutcome::Winner(player), presenter);
        } else if self.grid.is_row_full(0) {
            self.finish(GameOutcome::Tie, presenter);
        } else {
            self.current_player = player.other();
        }

        MoveResult::Placed {
            row,
            col,
            player,
            outcome: self.outcome,
        }
    }

    fn finish<P: Presenter + ?Sized>(&mut self, outcome: GameOutcome, presenter: &mut P) {
        self.outcome = outcome;
        tracing::info!(?outcome, moves = self.move_count, "game over");
        presenter.game_ended(outcome);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
