use crate::game::{GameOutcome, Player, Presenter};

/// The on-screen copy of the grid, built from presenter notifications.
///
/// It never reads the game state directly: the size comes from
/// `board_ready`, pieces from `piece_placed`, the banner from `game_ended`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    cells: Vec<Vec<Option<Player>>>,
    last_placed: Option<(usize, usize)>,
    banner: Option<String>,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn piece(&self, row: usize, col: usize) -> Option<Player> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied().flatten()
    }

    pub fn last_placed(&self) -> Option<(usize, usize)> {
        self.last_placed
    }

    /// End-of-game text, once the game is over
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }
}

impl Presenter for BoardView {
    fn board_ready(&mut self, height: usize, width: usize) {
        self.cells = vec![vec![None; width]; height];
        self.last_placed = None;
        self.banner = None;
    }

    fn piece_placed(&mut self, row: usize, col: usize, player: Player) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            *slot = Some(player);
            self.last_placed = Some((row, col));
        } else {
            tracing::warn!(row, col, "piece placed outside the rendered board");
        }
    }

    fn game_ended(&mut self, outcome: GameOutcome) {
        self.banner = Some(outcome.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, HEIGHT, WIDTH};

    #[test]
    fn test_board_ready_builds_surface() {
        let mut view = BoardView::new();
        assert_eq!((view.height(), view.width()), (0, 0));

        GameState::start(&mut view);
        assert_eq!((view.height(), view.width()), (HEIGHT, WIDTH));
        assert!(view.banner().is_none());
    }

    #[test]
    fn test_view_mirrors_moves() {
        let mut view = BoardView::new();
        let mut state = GameState::start(&mut view);
        state.play(2, &mut view);
        state.play(2, &mut view);

        assert_eq!(view.piece(HEIGHT - 1, 2), Some(Player::One));
        assert_eq!(view.piece(HEIGHT - 2, 2), Some(Player::Two));
        assert_eq!(view.piece(0, 0), None);
        assert_eq!(view.last_placed(), Some((HEIGHT - 2, 2)));
    }

    #[test]
    fn test_banner_after_win_and_reset_on_restart() {
        let mut view = BoardView::new();
        let mut state = GameState::start(&mut view);
        for col in [0, 1, 0, 1, 0, 1, 0] {
            state.play(col, &mut view);
        }
        assert_eq!(view.banner(), Some("Player 1 won!"));

        GameState::start(&mut view);
        assert!(view.banner().is_none());
        assert_eq!(view.piece(HEIGHT - 1, 0), None);
    }
}
