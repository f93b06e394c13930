use super::player::Player;
use super::state::GameOutcome;

/// Notifications the turn controller sends to whatever renders the game.
///
/// Implementations must not call back into the game; each method is invoked
/// synchronously from [`GameState::start`](super::GameState::start) or
/// [`GameState::play`](super::GameState::play).
pub trait Presenter {
    /// A fresh grid of the given size exists and can be drawn.
    fn board_ready(&mut self, height: usize, width: usize);

    /// A piece for `player` now occupies (row, col).
    fn piece_placed(&mut self, row: usize, col: usize, player: Player);

    /// The game reached a terminal outcome.
    fn game_ended(&mut self, outcome: GameOutcome);
}

/// A single presenter notification, as recorded by `Vec<GameEvent>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BoardReady { height: usize, width: usize },
    PiecePlaced { row: usize, col: usize, player: Player },
    GameEnded(GameOutcome),
}

impl Presenter for Vec<GameEvent> {
    fn board_ready(&mut self, height: usize, width: usize) {
        self.push(GameEvent::BoardReady { height, width });
    }

    fn piece_placed(&mut self, row: usize, col: usize, player: Player) {
        self.push(GameEvent::PiecePlaced { row, col, player });
    }

    fn game_ended(&mut self, outcome: GameOutcome) {
        self.push(GameEvent::GameEnded(outcome));
    }
}
