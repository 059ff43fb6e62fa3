use serde::{Deserialize, Serialize};

/// One of the eight straight lines a word can run along.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    /// Every direction, in the order the hint search tries them.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// `(row_delta, col_delta)` of a single step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }

    pub fn from_delta(delta: (isize, isize)) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == delta)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Directions the generator may draw from at this difficulty.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Difficulty::Easy => &[Direction::Right, Direction::Down],
            Difficulty::Medium | Difficulty::Hard => &Direction::ALL,
        }
    }
}
