use super::{Cell, Grid, Placement, WordList};
use crate::config::LevelConfig;
use crate::generator::{generate, Generated};
use crate::hint::{find_word, hint_prefix};
use crate::selection::{MatchResult, Selection};
use log::{debug, info};
use rand::seq::IteratorRandom;
use rand::Rng;

/// Cells of a found word, kept highlighted for the rest of the level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub word: String,
    pub cells: Vec<Cell>,
}

/// Everything one level owns. Replaced wholesale when the level resets or
/// advances; `generation` tells its timers apart from those of the next one.
#[derive(Debug)]
pub struct Level {
    config: &'static LevelConfig,
    generation: u64,
    grid: Grid,
    words: WordList,
    placements: Vec<Placement>,
    selection: Selection,
    highlights: Vec<Highlight>,
    hint_cells: Vec<Cell>,
    ad_remaining: Option<u32>,
    notification: Option<String>,
}

impl Level {
    pub fn new(config: &'static LevelConfig, generation: u64) -> Self {
        let words = WordList::new(config.words);
        let generated = generate(words.as_slice(), config.grid_size, config.difficulty);
        Self::from_generated(config, generation, generated)
    }

    pub fn from_generated(config: &'static LevelConfig, generation: u64, generated: Generated) -> Self {
        let words = WordList::new(config.words);
        for word in words.iter() {
            if !generated.is_placed(&word.text) {
                info!("Level {}: {} is not in the grid", config.number, word.text);
            }
        }

        Self {
            config,
            generation,
            selection: Selection::new(generated.grid.size()),
            grid: generated.grid,
            words,
            placements: generated.placements,
            highlights: Vec::new(),
            hint_cells: Vec::new(),
            ad_remaining: None,
            notification: None,
        }
    }

    pub fn config(&self) -> &'static LevelConfig {
        self.config
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Index of the highlight covering `cell`, if any.
    pub fn highlight_at(&self, cell: Cell) -> Option<usize> {
        self.highlights.iter().position(|h| h.cells.contains(&cell))
    }

    pub fn hint_cells(&self) -> &[Cell] {
        &self.hint_cells
    }

    pub fn hint_active(&self) -> bool {
        !self.hint_cells.is_empty()
    }

    pub fn ad_remaining(&self) -> Option<u32> {
        self.ad_remaining
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.words.is_complete()
    }

    pub fn begin(&mut self, row: usize, col: usize) -> bool {
        self.selection.begin(row, col)
    }

    pub fn extend(&mut self, row: usize, col: usize) -> bool {
        self.selection.extend(row, col)
    }

    /// Releases the current drag. A new match is marked found and highlighted.
    pub fn end(&mut self) -> MatchResult {
        let result = self.selection.end(&self.grid, &self.words);
        if let MatchResult::Found { word, cells } = &result {
            if self.word_found(word) {
                self.highlights.push(Highlight {
                    word: word.clone(),
                    cells: cells.clone(),
                });
            }
        }
        result
    }

    /// Records `word` as found. Returns `false` (and changes nothing) if it was
    /// found before or is not on this level's list.
    pub fn word_found(&mut self, word: &str) -> bool {
        if !self.words.mark_found(word) {
            debug!("Level {}: ignoring repeat find of {}", self.config.number, word);
            return false;
        }
        info!(
            "Level {}: found {} ({}/{})",
            self.config.number,
            word,
            self.words.found_count(),
            self.words.len()
        );
        self.notification = Some(word.to_string());
        true
    }

    /// Points at the first letters of a random unfound word. Returns `false`
    /// when there is nothing to point at.
    pub fn show_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(word) = self.words.unfound().choose(rng) else {
            return false;
        };
        let path = find_word(&self.grid, &word.text);
        if path.is_empty() {
            debug!("Level {}: no hint, {} is not in the grid", self.config.number, word.text);
            return false;
        }
        self.hint_cells = hint_prefix(&path).to_vec();
        true
    }

    pub fn clear_hint(&mut self) {
        self.hint_cells.clear();
    }

    pub fn set_ad_remaining(&mut self, remaining: Option<u32>) {
        self.ad_remaining = remaining;
    }

    pub fn clear_notification(&mut self) {
        self.notification = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LEVELS;
    use crate::models::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    static TEST_LEVEL: LevelConfig = LevelConfig {
        number: 1,
        theme: "Test",
        grid_size: 4,
        difficulty: crate::models::Difficulty::Easy,
        words: &["CAT", "DOG"],
        ad_before_hint: false,
    };

    fn level(rows: &[&str]) -> Level {
        let grid = Grid::from_rows(rows.iter().map(|r| r.chars().collect()).collect()).unwrap();
        let placements = vec![Placement {
            word: "CAT".to_string(),
            start_row: 0,
            start_col: 0,
            direction: Direction::Right,
        }];
        Level::from_generated(&TEST_LEVEL, 1, Generated { grid, placements })
    }

    #[test]
    fn test_new_level_is_generated_from_config() {
        let level = Level::new(&LEVELS[1], 7);
        assert_eq!(level.generation(), 7);
        assert_eq!(level.grid().size(), 8);
        assert_eq!(level.words().len(), 4);
        assert!(!level.is_complete());
    }

    #[test]
    fn test_drag_finds_and_highlights_word() {
        let mut level = level(&["CATX", "XXXX", "XXXX", "DOGX"]);
        level.begin(0, 2);
        level.extend(0, 0);
        assert!(matches!(level.end(), MatchResult::Found { ref word, .. } if word == "CAT"));
        assert_eq!(level.words().found_count(), 1);
        assert_eq!(level.highlight_at(Cell::new(0, 1)), Some(0));
        assert_eq!(level.notification(), Some("CAT"));
        assert!(level.selection().cells().is_empty());
    }

    #[test]
    fn test_word_found_twice_counts_once() {
        let mut level = level(&["CATX", "XXXX", "XXXX", "DOGX"]);
        assert!(level.word_found("CAT"));
        assert!(!level.word_found("CAT"));
        assert_eq!(level.words().found_count(), 1);

        level.begin(0, 0);
        level.extend(0, 2);
        assert_eq!(level.end(), MatchResult::AlreadyFound("CAT".to_string()));
        assert!(level.highlights().is_empty());
    }

    #[test]
    fn test_completes_when_all_words_found() {
        let mut level = level(&["CATX", "XXXX", "XXXX", "DOGX"]);
        level.word_found("CAT");
        assert!(!level.is_complete());
        level.begin(3, 0);
        level.extend(3, 2);
        level.end();
        assert!(level.is_complete());
    }

    #[test]
    fn test_hint_points_at_unfound_word() {
        let mut level = level(&["CATX", "XXXX", "XXXX", "DOGX"]);
        level.word_found("CAT");
        let mut rng = StdRng::seed_from_u64(1);
        assert!(level.show_hint(&mut rng));
        assert_eq!(
            level.hint_cells(),
            &[Cell::new(3, 0), Cell::new(3, 1), Cell::new(3, 2)]
        );
        level.clear_hint();
        assert!(!level.hint_active());
    }

    #[test]
    fn test_hint_for_missing_word_is_empty() {
        let mut level = level(&["CATX", "XXXX", "XXXX", "XXXX"]);
        level.word_found("CAT");
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!level.show_hint(&mut rng));
        assert!(level.hint_cells().is_empty());
    }
}
