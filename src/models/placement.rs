use super::direction::Direction;
use super::grid::Cell;
use serde::Serialize;

/// Where the generator embedded one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub word: String,
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
}

impl Placement {
    pub fn start(&self) -> Cell {
        Cell::new(self.start_row, self.start_col)
    }

    /// Cells covered by the word, first letter first.
    pub fn cells(&self) -> Vec<Cell> {
        let start = self.start();
        (0..self.word.len())
            .filter_map(|i| start.step(self.direction, i))
            .collect()
    }
}
