use crate::models::Difficulty;

/// Static description of one level.
#[derive(Debug, PartialEq, Eq)]
pub struct LevelConfig {
    pub number: usize,
    pub theme: &'static str,
    pub grid_size: usize,
    pub difficulty: Difficulty,
    pub words: &'static [&'static str],
    /// Whether a hint is preceded by the simulated ad countdown.
    pub ad_before_hint: bool,
}

pub static LEVELS: [LevelConfig; 5] = [
    LevelConfig {
        number: 1,
        theme: "Fruits",
        grid_size: 6,
        difficulty: Difficulty::Easy,
        words: &["APPLE", "BANANA", "PEAR"],
        ad_before_hint: true,
    },
    LevelConfig {
        number: 2,
        theme: "Animals",
        grid_size: 8,
        difficulty: Difficulty::Medium,
        words: &["LION", "TIGER", "BEAR", "WOLF"],
        ad_before_hint: true,
    },
    LevelConfig {
        number: 3,
        theme: "Cities",
        grid_size: 10,
        difficulty: Difficulty::Medium,
        words: &["PARIS", "LONDON", "TOKYO", "BERLIN", "ROME"],
        ad_before_hint: false,
    },
    LevelConfig {
        number: 4,
        theme: "Colors",
        grid_size: 10,
        difficulty: Difficulty::Hard,
        words: &["PURPLE", "ORANGE", "YELLOW", "GREEN", "BLUE", "RED"],
        ad_before_hint: true,
    },
    LevelConfig {
        number: 5,
        theme: "Space",
        grid_size: 12,
        difficulty: Difficulty::Hard,
        words: &["PLANET", "COMET", "GALAXY", "NEBULA", "ORBIT", "STAR"],
        ad_before_hint: true,
    },
];
