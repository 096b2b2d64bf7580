//! Square game board: ship placement, incoming shots and text rendering.

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::fmt;

use crate::common::{BoardError, Cell, Coordinate, GuessResult};

/// One player's grid of cells.
///
/// Cells are stored row-major, `row * grid_size + col`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid_size: usize,
    total_ships: usize,
    ship_positions: Vec<Coordinate>,
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board with every cell empty except the given ship positions.
    ///
    /// `total_ships` is descriptive only and is not checked against
    /// `ship_positions`. Duplicate positions simply dock twice on the same cell.
    pub fn new(
        grid_size: usize,
        total_ships: usize,
        ship_positions: Vec<Coordinate>,
    ) -> Result<Self, BoardError> {
        let area = grid_size
            .checked_mul(grid_size)
            .ok_or(BoardError::GridTooLarge { grid_size })?;
        let mut board = Board {
            grid_size,
            total_ships,
            ship_positions: Vec::new(),
            cells: vec![Cell::Empty; area],
        };
        for &pos in &ship_positions {
            let idx = board.index(pos)?;
            board.cells[idx] = Cell::Ship;
        }
        board.ship_positions = ship_positions;
        Ok(board)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Declared ship count, as read from the script.
    pub fn total_ships(&self) -> usize {
        self.total_ships
    }

    /// Ship positions in the order they were supplied.
    pub fn ship_positions(&self) -> &[Coordinate] {
        &self.ship_positions
    }

    /// State of the cell at `at`, or `None` outside the grid.
    pub fn cell(&self, at: Coordinate) -> Option<Cell> {
        self.index(at).ok().map(|idx| self.cells[idx])
    }

    /// Number of cells currently in state `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterator over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks(0) panics; a zero-sized board has no rows anyway
        self.cells.chunks(self.grid_size.max(1))
    }

    /// Process one incoming shot.
    ///
    /// `Ship` becomes `Hit`; any other cell ends up `Miss` unless it is already
    /// `Hit`, which stays destroyed. Only the first transition of a ship
    /// segment counts as a hit.
    pub fn fire(&mut self, at: Coordinate) -> Result<GuessResult, BoardError> {
        let idx = self.index(at)?;
        let cell = &mut self.cells[idx];
        match *cell {
            Cell::Ship => {
                *cell = Cell::Hit;
                Ok(GuessResult::Hit)
            }
            Cell::Hit => Ok(GuessResult::Miss),
            Cell::Empty | Cell::Miss => {
                *cell = Cell::Miss;
                Ok(GuessResult::Miss)
            }
        }
    }

    /// Replay every shot of `moves` against this board, returning the hit count.
    pub fn receive_salvo(&mut self, moves: &[Coordinate]) -> Result<usize, BoardError> {
        let mut hits = 0;
        for &at in moves {
            let res = self.fire(at)?;
            log::debug!("shot at {} -> {:?}", at, res);
            if res == GuessResult::Hit {
                hits += 1;
            }
        }
        Ok(hits)
    }

    /// Text form of the board: one row per line, glyphs separated by a space.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn index(&self, at: Coordinate) -> Result<usize, BoardError> {
        if at.row >= self.grid_size || at.col >= self.grid_size {
            return Err(BoardError::OutOfBounds {
                at,
                grid_size: self.grid_size,
            });
        }
        Ok(at.row * self.grid_size + at.col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
