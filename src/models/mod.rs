mod direction;
mod game;
mod grid;
mod level;
mod placement;
mod player;
mod timer;
mod word_list;

pub use direction::{Difficulty, Direction};
pub use game::{Game, GameEvent, GameStage};
pub use grid::{Cell, Grid};
pub use level::{Highlight, Level};
pub use placement::Placement;
pub use player::{PlayerId, PlayerList};
pub use timer::Timer;
pub use word_list::{Word, WordList};
