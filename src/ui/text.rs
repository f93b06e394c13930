//! Plain-text presenter for scripted, non-interactive games.

use std::io::{self, Write};

use crate::game::{GameOutcome, GameState, Grid, Ignored, MoveResult, Player, Presenter};

/// Writes one line per notification. Columns and rows are shown 1-based.
///
/// Presenter callbacks cannot fail, so the first write error is kept and
/// reported by [`TextPresenter::finish`].
pub struct TextPresenter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        TextPresenter { out, error: None }
    }

    fn line(&mut self, text: &str) {
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "{text}") {
                self.error = Some(e);
            }
        }
    }

    /// Flush and hand back the writer, or the first error seen
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn board_ready(&mut self, height: usize, width: usize) {
        self.line(&format!("New game: {height} rows x {width} columns"));
    }

    fn piece_placed(&mut self, row: usize, col: usize, player: Player) {
        self.line(&format!("{player} -> column {} (row {})", col + 1, row + 1));
    }

    fn game_ended(&mut self, outcome: GameOutcome) {
        self.line(&outcome.to_string());
    }
}

/// Render the grid top row first, `1`/`2` for pieces and `.` for empty cells.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                cell.player()
                    .map_or_else(|| ".".to_string(), |player| player.id().to_string())
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    let footer: Vec<String> = (1..=grid.width()).map(|col| col.to_string()).collect();
    out.push_str(&footer.join(" "));
    out.push('\n');
    out
}

/// Play `columns` (0-based) in order, narrating to `out`, then print the grid.
pub fn run_script<W: Write>(columns: &[usize], out: W) -> io::Result<GameState> {
    let mut presenter = TextPresenter::new(out);
    let mut state = GameState::start(&mut presenter);

    for (index, &col) in columns.iter().enumerate() {
        if let MoveResult::Ignored(reason) = state.play(col, &mut presenter) {
            let why = match reason {
                Ignored::ColumnFull => "column full",
                Ignored::OutOfRange => "no such column",
                Ignored::GameOver => "game already over",
            };
            presenter.line(&format!("Move {} (column {}) ignored: {why}", index + 1, col + 1));
        }
    }

    presenter.line("");
    presenter.line(render_grid(state.grid()).trim_end());
    if !state.is_terminal() {
        presenter.line(&format!("{} to move", state.current_player()));
    }

    presenter.finish()?;
    Ok(state)
}
