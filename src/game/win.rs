use super::grid::Grid;
use super::player::Player;

/// Number of pieces in a line needed to win
pub const RUN_LENGTH: usize = 4;

/// (row, col) steps for each axis a run can extend along:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Coordinates of a winning line, in (row, col) order from its anchor
pub type Run = [(usize, usize); RUN_LENGTH];

/// Check whether `player` has four in a row anywhere on the grid
pub fn has_won(grid: &Grid, player: Player) -> bool {
    winning_run(grid, player).is_some()
}

/// Find the first winning run for `player`, scanning anchors top-left to
/// bottom-right and axes in [`DIRECTIONS`] order.
pub fn winning_run(grid: &Grid, player: Player) -> Option<Run> {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            for &(dy, dx) in &DIRECTIONS {
                if let Some(run) = run_at(grid, player, row, col, dy, dx) {
                    return Some(run);
                }
            }
        }
    }
    None
}

/// The run anchored at (row, col) along (dy, dx), if every cell is in bounds
/// and held by `player`.
fn run_at(grid: &Grid, player: Player, row: usize, col: usize, dy: isize, dx: isize) -> Option<Run> {
    let mut run = [(0, 0); RUN_LENGTH];

    for (step, slot) in run.iter_mut().enumerate() {
        let r = row.checked_add_signed(dy * step as isize)?;
        let c = col.checked_add_signed(dx * step as isize)?;
        if grid.get(r, c)?.player() != Some(player) {
            return None;
        }
        *slot = (r, c);
    }

    Some(run)
}
