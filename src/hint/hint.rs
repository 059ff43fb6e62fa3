use crate::models::{Cell, Direction, Grid};

// Cells revealed by a hint
pub const HINT_LENGTH: usize = 3;

/// Locates `word` in `grid` by brute force.
///
/// Cells are scanned row by row and, from each, the eight directions in
/// `Direction::ALL` order. Returns the path of the first full match, or an
/// empty vector.
pub fn find_word(grid: &Grid, word: &str) -> Vec<Cell> {
    let letters: Vec<char> = word.chars().collect();
    let Some(&first) = letters.first() else {
        return Vec::new();
    };

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let start = Cell::new(row, col);
            if grid.get(start) != Some(first) {
                continue;
            }
            for direction in Direction::ALL {
                if let Some(path) = path_along(grid, start, direction, &letters) {
                    return path;
                }
            }
        }
    }

    Vec::new()
}

fn path_along(grid: &Grid, start: Cell, direction: Direction, letters: &[char]) -> Option<Vec<Cell>> {
    let mut path = Vec::with_capacity(letters.len());
    for (i, &letter) in letters.iter().enumerate() {
        let cell = start.step(direction, i)?;
        if grid.get(cell)? != letter {
            return None;
        }
        path.push(cell);
    }
    Some(path)
}

/// The leading cells of a word path shown as a hint.
pub fn hint_prefix(path: &[Cell]) -> &[Cell] {
    &path[..path.len().min(HINT_LENGTH)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn test_finds_horizontal_word() {
        let g = grid(&["XCAT", "XXXX", "XXXX", "XXXX"]);
        assert_eq!(
            find_word(&g, "CAT"),
            vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(0, 3)]
        );
    }

    #[test]
    fn test_finds_backwards_diagonal_word() {
        let g = grid(&["XXXT", "XXAX", "XCXX", "XXXX"]);
        assert_eq!(
            find_word(&g, "CAT"),
            vec![Cell::new(2, 1), Cell::new(1, 2), Cell::new(0, 3)]
        );
    }

    #[test]
    fn test_first_match_in_scan_order_wins() {
        // "AB" runs both right and down from (0, 0); right is tried first.
        let g = grid(&["AB", "BX"]);
        assert_eq!(find_word(&g, "AB"), vec![Cell::new(0, 0), Cell::new(0, 1)]);
    }

    #[test]
    fn test_missing_word_gives_empty_path() {
        let g = grid(&["AB", "CD"]);
        assert!(find_word(&g, "DOG").is_empty());
        assert!(find_word(&g, "").is_empty());
    }

    #[test]
    fn test_prefix_is_at_most_three_cells() {
        let path: Vec<Cell> = (0..5).map(|c| Cell::new(0, c)).collect();
        assert_eq!(hint_prefix(&path).len(), 3);
        assert_eq!(hint_prefix(&path[..2]).len(), 2);
        assert!(hint_prefix(&[]).is_empty());
    }
}
