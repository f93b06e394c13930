use super::player::Player;
use crate::error::GridError;

pub const HEIGHT: usize = 6;
pub const WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player holding this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Cell occupancy for a single game.
///
/// Row 0 is the top of the grid and row `HEIGHT - 1` the bottom. The only way
/// to change a cell is [`Grid::occupy`], which never overwrites a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    pub fn width(&self) -> usize {
        WIDTH
    }

    /// Get the cell at a specific position, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Place `player` in an empty cell
    pub fn occupy(&mut self, row: usize, col: usize, player: Player) -> Result<(), GridError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(GridError::InvalidCoordinate { row, col })?;

        if !cell.is_empty() {
            return Err(GridError::CellOccupied { row, col });
        }

        *cell = player.to_cell();
        Ok(())
    }

    /// Check whether a row has no empty cell left.
    /// Out-of-range rows are never full.
    pub fn is_row_full(&self, row: usize) -> bool {
        self.cells
            .get(row)
            .is_some_and(|cells| cells.iter().all(|cell| !cell.is_empty()))
    }

    /// Number of cells holding a piece
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; WIDTH]> {
        self.cells.iter()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.rows().count(), HEIGHT);
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                assert_eq!(grid.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new();
        assert_eq!(grid.get(HEIGHT, 0), None);
        assert_eq!(grid.get(0, WIDTH), None);
    }

    #[test]
    fn test_occupy() {
        let mut grid = Grid::new();
        grid.occupy(5, 3, Player::One).unwrap();
        assert_eq!(grid.get(5, 3), Some(Cell::One));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_occupy_rejects_invalid_coordinate() {
        let mut grid = Grid::new();
        assert_eq!(
            grid.occupy(HEIGHT, 0, Player::One),
            Err(GridError::InvalidCoordinate { row: HEIGHT, col: 0 })
        );
        assert_eq!(
            grid.occupy(0, WIDTH, Player::Two),
            Err(GridError::InvalidCoordinate { row: 0, col: WIDTH })
        );
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_occupy_never_overwrites() {
        let mut grid = Grid::new();
        grid.occupy(5, 0, Player::One).unwrap();
        assert_eq!(
            grid.occupy(5, 0, Player::Two),
            Err(GridError::CellOccupied { row: 5, col: 0 })
        );
        assert_eq!(grid.get(5, 0), Some(Cell::One));
    }

    #[test]
    fn test_is_row_full() {
        let mut grid = Grid::new();
        for col in 0..WIDTH - 1 {
            grid.occupy(0, col, Player::One).unwrap();
        }
        assert!(!grid.is_row_full(0));

        grid.occupy(0, WIDTH - 1, Player::Two).unwrap();
        assert!(grid.is_row_full(0));
        assert!(!grid.is_row_full(1));
        assert!(!grid.is_row_full(HEIGHT));
    }
}
