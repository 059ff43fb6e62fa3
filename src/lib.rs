//! Word search puzzle game: grid generation, drag selection matching and hints,
//! plus the level progression and web host built around them.

pub mod config;
pub mod errors;
pub mod generator;
pub mod handlers;
pub mod hint;
pub mod logger;
pub mod models;
pub mod render;
pub mod selection;

pub use generator::{generate, Generated};
pub use hint::find_word;
pub use models::{Cell, Difficulty, Direction, Game, Grid, Level, Placement, Word, WordList};
pub use selection::{MatchResult, Selection};
