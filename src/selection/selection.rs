use crate::models::{Cell, Direction, Grid, WordList};
use log::debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Selecting,
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// An unfound word; `cells` run from its first letter to its last.
    Found { word: String, cells: Vec<Cell> },
    /// The selection spells a word that was already found.
    AlreadyFound(String),
    NoMatch,
}

/// Tracks one drag gesture and keeps it on a straight line from its start cell.
#[derive(Debug, Clone)]
pub struct Selection {
    grid_size: usize,
    state: SelectionState,
    cells: Vec<Cell>,
}

impl Selection {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            state: SelectionState::Idle,
            cells: Vec::new(),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Starts a new gesture at `(row, col)`. A start off the grid is ignored.
    pub fn begin(&mut self, row: usize, col: usize) -> bool {
        let start = Cell::new(row, col);
        if !start.within(self.grid_size) {
            debug!("Ignoring selection start outside the grid: {:?}", start);
            return false;
        }
        self.state = SelectionState::Selecting;
        self.cells = vec![start];
        true
    }

    /// Stretches the selection from its start to `(row, col)`.
    ///
    /// Only targets on the same row, column or diagonal as the start are
    /// accepted; anything else leaves the selection untouched. Returns whether
    /// the selection changed length.
    pub fn extend(&mut self, row: usize, col: usize) -> bool {
        if self.state == SelectionState::Idle {
            return false;
        }
        let Some(&start) = self.cells.first() else {
            return false;
        };

        let target = Cell::new(row, col);
        let Some(line) = line_between(start, target, self.grid_size) else {
            debug!("Ignoring non-collinear move {:?} -> {:?}", start, target);
            return false;
        };

        let changed = line.len() != self.cells.len();
        self.cells = line;
        changed
    }

    /// Releases the gesture and checks it against the unfound words in `words`.
    ///
    /// The forward reading is tried before the reversed one. The selection is
    /// cleared whatever the outcome.
    pub fn end(&mut self, grid: &Grid, words: &WordList) -> MatchResult {
        if self.state == SelectionState::Idle {
            return MatchResult::NoMatch;
        }
        self.state = SelectionState::Idle;
        let mut cells = std::mem::take(&mut self.cells);

        let forward = grid.read(&cells);
        let reversed: String = forward.chars().rev().collect();

        if words.is_unfound(&forward) {
            MatchResult::Found {
                word: forward,
                cells,
            }
        } else if words.is_unfound(&reversed) {
            cells.reverse();
            MatchResult::Found {
                word: reversed,
                cells,
            }
        } else if words.contains(&forward) {
            MatchResult::AlreadyFound(forward)
        } else if words.contains(&reversed) {
            MatchResult::AlreadyFound(reversed)
        } else {
            MatchResult::NoMatch
        }
    }
}

// Every cell from `start` to `target` inclusive, clipped to the grid, or None
// when the two are not on one of the eight lines. `start` must be on the grid.
fn line_between(start: Cell, target: Cell, grid_size: usize) -> Option<Vec<Cell>> {
    let row_delta = target.row as i128 - start.row as i128;
    let col_delta = target.col as i128 - start.col as i128;

    let collinear =
        row_delta == 0 || col_delta == 0 || row_delta.abs() == col_delta.abs();
    if !collinear {
        return None;
    }

    let distance = row_delta.unsigned_abs().max(col_delta.unsigned_abs());
    let Some(direction) =
        Direction::from_delta((row_delta.signum() as isize, col_delta.signum() as isize))
    else {
        return Some(vec![start]);
    };

    // A line across the board never holds more than `grid_size` cells.
    let steps = usize::try_from(distance).map_or(grid_size, |d| d.min(grid_size));

    Some(
        (0..=steps)
            .map_while(|i| start.step(direction, i))
            .take_while(|cell| cell.within(grid_size))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    fn assert_collinear(cells: &[Cell]) {
        if cells.len() < 2 {
            return;
        }
        let delta = |a: Cell, b: Cell| {
            (
                b.row as isize - a.row as isize,
                b.col as isize - a.col as isize,
            )
        };
        let first = delta(cells[0], cells[1]);
        assert!((-1..=1).contains(&first.0) && (-1..=1).contains(&first.1));
        assert_ne!(first, (0, 0));
        for pair in cells.windows(2) {
            assert_eq!(delta(pair[0], pair[1]), first);
        }
    }

    #[test]
    fn test_begin_starts_with_single_cell() {
        let mut selection = Selection::new(5);
        assert!(selection.begin(2, 3));
        assert_eq!(selection.state(), SelectionState::Selecting);
        assert_eq!(selection.cells(), &[Cell::new(2, 3)]);
    }

    #[test]
    fn test_begin_outside_grid_is_ignored() {
        let mut selection = Selection::new(3);
        assert!(!selection.begin(3, 0));
        assert_eq!(selection.state(), SelectionState::Idle);
        assert!(selection.cells().is_empty());
    }

    #[test]
    fn test_non_collinear_extend_is_rejected() {
        let mut selection = Selection::new(5);
        selection.begin(0, 0);
        assert!(!selection.extend(2, 1));
        assert_eq!(selection.cells(), &[Cell::new(0, 0)]);
    }

    #[test]
    fn test_rejected_extend_keeps_previous_line() {
        let mut selection = Selection::new(5);
        selection.begin(0, 0);
        assert!(selection.extend(0, 3));
        assert!(!selection.extend(1, 3));
        assert_eq!(selection.cells().len(), 4);
    }

    #[test]
    fn test_extend_fills_every_direction() {
        for (row, col) in [(2, 4), (2, 0), (0, 2), (4, 2), (0, 0), (4, 4), (0, 4), (4, 0)] {
            let mut selection = Selection::new(5);
            selection.begin(2, 2);
            selection.extend(row, col);
            let cells = selection.cells();
            assert_eq!(cells.first(), Some(&Cell::new(2, 2)));
            assert_eq!(cells.last(), Some(&Cell::new(row, col)));
            assert_eq!(cells.len(), 3);
            assert_collinear(cells);
        }
    }

    #[test]
    fn test_extend_clips_to_grid() {
        let mut selection = Selection::new(3);
        selection.begin(1, 1);
        selection.extend(4, 4);
        assert_eq!(selection.cells(), &[Cell::new(1, 1), Cell::new(2, 2)]);
    }

    #[test]
    fn test_extend_back_to_start_shrinks() {
        let mut selection = Selection::new(4);
        selection.begin(1, 1);
        selection.extend(1, 3);
        assert!(selection.extend(1, 1));
        assert_eq!(selection.cells(), &[Cell::new(1, 1)]);
    }

    #[test]
    fn test_extend_and_end_ignored_while_idle() {
        let g = grid(&["CAT", "XXX", "XXX"]);
        let words = WordList::new(&["CAT"]);
        let mut selection = Selection::new(3);
        assert!(!selection.extend(0, 2));
        assert_eq!(selection.end(&g, &words), MatchResult::NoMatch);
    }

    #[test]
    fn test_forward_match() {
        let g = grid(&["CAT", "XXX", "XXX"]);
        let words = WordList::new(&["CAT"]);
        let mut selection = Selection::new(3);
        selection.begin(0, 0);
        selection.extend(0, 2);
        let result = selection.end(&g, &words);
        assert_eq!(
            result,
            MatchResult::Found {
                word: "CAT".to_string(),
                cells: vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
            }
        );
        assert_eq!(selection.state(), SelectionState::Idle);
        assert!(selection.cells().is_empty());
    }

    #[test]
    fn test_reversed_selection_still_matches() {
        let g = grid(&["CAT", "XXX", "XXX"]);
        let words = WordList::new(&["CAT"]);
        let mut selection = Selection::new(3);
        selection.begin(0, 2);
        selection.extend(0, 0);
        match selection.end(&g, &words) {
            MatchResult::Found { word, cells } => {
                assert_eq!(word, "CAT");
                assert_eq!(cells[0], Cell::new(0, 0));
            }
            other => panic!("expected a match, got {:?}", other),
        }
    }

    #[test]
    fn test_forward_reading_wins_ties() {
        let g = grid(&["TOP", "XXX", "XXX"]);
        let words = WordList::new(&["POT", "TOP"]);
        let mut selection = Selection::new(3);
        selection.begin(0, 0);
        selection.extend(0, 2);
        assert!(matches!(
            selection.end(&g, &words),
            MatchResult::Found { word, .. } if word == "TOP"
        ));
    }

    #[test]
    fn test_found_word_is_reported_not_rematched() {
        let g = grid(&["CAT", "XXX", "XXX"]);
        let mut words = WordList::new(&["CAT"]);
        words.mark_found("CAT");
        let mut selection = Selection::new(3);
        selection.begin(0, 0);
        selection.extend(0, 2);
        assert_eq!(
            selection.end(&g, &words),
            MatchResult::AlreadyFound("CAT".to_string())
        );
    }

    #[test]
    fn test_longer_selection_does_not_match_prefix() {
        let g = grid(&["AXX", "XBX", "XXC"]);
        let words = WordList::new(&["AB"]);
        let mut selection = Selection::new(3);
        selection.begin(0, 0);
        selection.extend(2, 2);
        assert_eq!(
            selection.cells(),
            &[Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)]
        );
        assert_eq!(selection.end(&g, &words), MatchResult::NoMatch);
    }

    #[test]
    fn test_far_target_is_clipped_quickly() {
        let mut selection = Selection::new(6);
        selection.begin(0, 0);
        assert!(selection.extend(2_000_000_000, 2_000_000_000));
        assert_eq!(selection.cells().len(), 6);
        assert_eq!(selection.cells().last(), Some(&Cell::new(5, 5)));
        assert_collinear(selection.cells());
    }

    #[test]
    fn test_huge_coordinates_do_not_overflow() {
        let mut selection = Selection::new(6);
        selection.begin(1, 0);
        assert!(selection.extend(1usize << 63, 0));
        assert_eq!(selection.cells().len(), 5);
        assert_eq!(selection.cells().last(), Some(&Cell::new(5, 0)));

        selection.begin(1, 1);
        assert!(selection.extend(usize::MAX, usize::MAX));
        assert_eq!(selection.cells().last(), Some(&Cell::new(5, 5)));
        assert!(!selection.extend(usize::MAX, 0));
    }
}
