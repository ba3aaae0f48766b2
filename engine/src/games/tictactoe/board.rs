use std::fmt;

use super::types::{Mark, Outcome};
use super::win_detector::check_win;

pub const GRID_SIDE: usize = 3;
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// 3x3 grid indexed 0..9, row by row. Cells are only ever written by
/// `place` and never un-marked; search code works on clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [Mark; GRID_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: [Mark::Empty; GRID_CELLS],
        }
    }

    pub fn from_grid(grid: [Mark; GRID_CELLS]) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &[Mark; GRID_CELLS] {
        &self.grid
    }

    /// Indexes of empty cells, in ascending order.
    pub fn empty_cell_indexes(&self) -> Vec<usize> {
        self.grid
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.iter().all(|&cell| cell == Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.grid.iter().all(|&cell| cell != Mark::Empty)
    }

    /// Evaluates the grid: a completed line wins regardless of remaining
    /// empty cells, a full grid without one is a draw, anything else is
    /// still undecided.
    pub fn winner(&self) -> Option<Outcome> {
        if let Some(mark) = check_win(&self.grid) {
            return Some(Outcome::won_by(mark));
        }

        if self.is_full() {
            return Some(Outcome::Draw);
        }

        None
    }

    /// Writes `mark` at `index` if the cell is empty, otherwise does
    /// nothing. Panics on an out-of-range index; callers are expected to
    /// pick indexes from `empty_cell_indexes`.
    pub fn place(&mut self, index: usize, mark: Mark) {
        debug_assert!(mark != Mark::Empty, "cannot place an empty mark");

        if self.grid[index] == Mark::Empty {
            self.grid[index] = mark;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..GRID_SIDE {
                write!(f, "{}", self.grid[row * GRID_SIDE + col].to_char())?;
            }
        }
        Ok(())
    }
}
