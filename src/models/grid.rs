use super::direction::Direction;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `steps` moves away along `(row_delta, col_delta)`, if it has
    /// non-negative coordinates.
    pub fn offset(self, (row_delta, col_delta): (isize, isize), steps: usize) -> Option<Cell> {
        let steps = isize::try_from(steps).ok()?;
        let row = self.row.checked_add_signed(row_delta.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(col_delta.checked_mul(steps)?)?;
        Some(Cell { row, col })
    }

    pub fn step(self, direction: Direction, steps: usize) -> Option<Cell> {
        self.offset(direction.delta(), steps)
    }

    pub fn within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

/// Square letter matrix. Owned by exactly one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Builds a grid from its rows; `None` unless the rows form a non-empty square.
    pub fn from_rows(cells: Vec<Vec<char>>) -> Option<Self> {
        let size = cells.len();
        if size == 0 || cells.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self { size, cells })
    }

    // Rows must already be `size` cells each.
    pub(crate) fn from_square(cells: Vec<Vec<char>>) -> Self {
        Self {
            size: cells.len(),
            cells,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.within(self.size)
    }

    pub fn get(&self, cell: Cell) -> Option<char> {
        self.cells.get(cell.row)?.get(cell.col).copied()
    }

    /// Letters under `path`, in path order. Cells off the grid contribute nothing.
    pub fn read(&self, path: &[Cell]) -> String {
        path.iter().filter_map(|&cell| self.get(cell)).collect()
    }
}
