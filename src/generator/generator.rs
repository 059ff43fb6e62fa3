use crate::models::{Cell, Difficulty, Grid, Placement, Word};
use log::{debug, warn};
use rand::Rng;

// Placement trials per word before it is given up on
pub const MAX_ATTEMPTS: usize = 100;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A freshly generated grid and the words that made it in.
#[derive(Debug, Clone)]
pub struct Generated {
    pub grid: Grid,
    pub placements: Vec<Placement>,
}

impl Generated {
    pub fn is_placed(&self, word: &str) -> bool {
        self.placements.iter().any(|p| p.word == word)
    }
}

/// Builds a `grid_size` square grid with `words` hidden in it.
///
/// Words that do not fit, or that find no free line in `MAX_ATTEMPTS` random
/// trials, are left out. Every other cell gets a random letter.
pub fn generate(words: &[Word], grid_size: usize, difficulty: Difficulty) -> Generated {
    generate_with_rng(words, grid_size, difficulty, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    words: &[Word],
    grid_size: usize,
    difficulty: Difficulty,
    rng: &mut R,
) -> Generated {
    let size = grid_size.max(1);
    let mut board: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];
    let mut placements = Vec::new();

    // Longest first; sort_by is stable so equal lengths keep their order
    let mut sorted: Vec<&Word> = words.iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));

    for word in sorted {
        if word.is_empty() {
            continue;
        }
        if word.len() > size {
            warn!("Skipping {}: longer than a {}x{} grid", word.text, size, size);
            continue;
        }

        match place_word(&mut board, &word.text, difficulty, rng) {
            Some(placement) => {
                debug!(
                    "Placed {} at ({}, {}) going {:?}",
                    placement.word, placement.start_row, placement.start_col, placement.direction
                );
                placements.push(placement);
            }
            None => warn!(
                "Could not place {} after {} attempts",
                word.text, MAX_ATTEMPTS
            ),
        }
    }

    let cells = board
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.unwrap_or_else(|| random_letter(rng)))
                .collect::<Vec<char>>()
        })
        .collect();

    Generated {
        grid: Grid::from_square(cells),
        placements,
    }
}

fn place_word<R: Rng + ?Sized>(
    board: &mut [Vec<Option<char>>],
    word: &str,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Placement> {
    let size = board.len();
    let directions = difficulty.directions();
    let letters: Vec<char> = word.chars().collect();

    for _ in 0..MAX_ATTEMPTS {
        let start = Cell::new(rng.gen_range(0..size), rng.gen_range(0..size));
        let direction = directions[rng.gen_range(0..directions.len())];

        let path: Option<Vec<Cell>> = (0..letters.len())
            .map(|i| start.step(direction, i).filter(|cell| cell.within(size)))
            .collect();
        let Some(path) = path else {
            continue;
        };

        let fits = path
            .iter()
            .zip(&letters)
            .all(|(cell, &letter)| match board[cell.row][cell.col] {
                None => true,
                Some(existing) => existing == letter,
            });
        if !fits {
            continue;
        }

        for (cell, &letter) in path.iter().zip(&letters) {
            board[cell.row][cell.col] = Some(letter);
        }
        return Some(Placement {
            word: word.to_string(),
            start_row: start.row,
            start_col: start.col,
            direction,
        });
    }

    None
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    LETTERS[rng.gen_range(0..LETTERS.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t)).collect()
    }

    fn assert_filled(grid: &Grid) {
        for row in grid.rows() {
            assert!(row.iter().all(|c| c.is_ascii_uppercase()));
        }
    }

    fn assert_consistent(generated: &Generated) {
        for placement in &generated.placements {
            let cells = placement.cells();
            assert_eq!(cells.len(), placement.word.len());
            assert!(cells.iter().all(|&c| generated.grid.contains(c)));
            assert_eq!(generated.grid.read(&cells), placement.word);
        }
    }

    #[test]
    fn test_grid_is_full_and_square() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in 1..12 {
            let generated =
                generate_with_rng(&words(&["LION", "TIGER"]), size, Difficulty::Hard, &mut rng);
            assert_eq!(generated.grid.size(), size);
            assert_eq!(generated.grid.rows().len(), size);
            assert_filled(&generated.grid);
        }
    }

    #[test]
    fn test_placements_replay_to_their_words() {
        let mut rng = StdRng::seed_from_u64(42);
        let list = words(&["PARIS", "LONDON", "TOKYO", "BERLIN", "ROME"]);
        for _ in 0..50 {
            let generated = generate_with_rng(&list, 10, Difficulty::Medium, &mut rng);
            assert_consistent(&generated);
        }
    }

    #[test]
    fn test_easy_uses_only_right_and_down() {
        let mut rng = StdRng::seed_from_u64(3);
        let list = words(&["APPLE", "BANANA", "PEAR"]);
        for _ in 0..50 {
            let generated = generate_with_rng(&list, 6, Difficulty::Easy, &mut rng);
            for placement in &generated.placements {
                assert!(matches!(
                    placement.direction,
                    Direction::Right | Direction::Down
                ));
            }
        }
    }

    #[test]
    fn test_word_longer_than_grid_is_skipped() {
        let mut rng = StdRng::seed_from_u64(11);
        let generated = generate_with_rng(&words(&["ABCDE"]), 3, Difficulty::Easy, &mut rng);
        assert!(generated.placements.is_empty());
        assert_eq!(generated.grid.size(), 3);
        assert_filled(&generated.grid);
    }

    #[test]
    fn test_empty_word_list_gives_pure_filler() {
        let generated = generate(&[], 4, Difficulty::Easy);
        assert!(generated.placements.is_empty());
        assert_filled(&generated.grid);
    }

    #[test]
    fn test_single_fitting_word_always_placed() {
        // A 3-letter word on an empty 3x3 grid always has a free line within reach.
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let generated = generate_with_rng(&words(&["CAT"]), 3, Difficulty::Easy, &mut rng);
            assert!(generated.is_placed("CAT"));
            assert_consistent(&generated);
        }
    }

    #[test]
    fn test_words_may_share_letters() {
        // Two full-width words on a 2x2 grid must cross or sit side by side.
        let mut rng = StdRng::seed_from_u64(9);
        let generated = generate_with_rng(&words(&["AB", "AC"]), 2, Difficulty::Easy, &mut rng);
        assert_consistent(&generated);
    }

    #[test]
    fn test_zero_size_is_clamped() {
        let generated = generate(&words(&["A"]), 0, Difficulty::Easy);
        assert_eq!(generated.grid.size(), 1);
        assert_eq!(generated.grid.rows()[0][0], 'A');
    }
}
