use super::grid::{Grid, HEIGHT, WIDTH};

/// Row a piece dropped into `col` would land in, or `None` if the column is
/// full.
///
/// Callers must pass a column in `0..WIDTH`.
pub fn landing_row(grid: &Grid, col: usize) -> Option<usize> {
    debug_assert!(col < WIDTH, "column {col} out of range");

    (0..HEIGHT)
        .rev()
        .find(|&row| grid.get(row, col).is_some_and(|cell| cell.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_empty_column_lands_at_bottom() {
        let grid = Grid::new();
        for col in 0..WIDTH {
            assert_eq!(landing_row(&grid, col), Some(HEIGHT - 1));
        }
    }

    #[test]
    fn test_lands_above_existing_piece() {
        let mut grid = Grid::new();
        grid.occupy(HEIGHT - 1, 0, Player::One).unwrap();
        assert_eq!(landing_row(&grid, 0), Some(HEIGHT - 2));
        assert_eq!(landing_row(&grid, 1), Some(HEIGHT - 1));
    }

    #[test]
    fn test_full_column_has_no_landing_row() {
        let mut grid = Grid::new();
        for row in 0..HEIGHT {
            grid.occupy(row, 1, Player::Two).unwrap();
        }
        assert_eq!(landing_row(&grid, 1), None);
    }

    #[test]
    fn test_query_does_not_mutate() {
        let mut grid = Grid::new();
        grid.occupy(HEIGHT - 1, 4, Player::One).unwrap();
        let before = grid;

        let first = landing_row(&grid, 4);
        let second = landing_row(&grid, 4);

        assert_eq!(first, second);
        assert_eq!(grid, before);
    }
}
