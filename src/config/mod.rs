//! Runtime settings read from the environment, plus the static level table.
mod levels;
mod settings;

pub use levels::{LevelConfig, LEVELS};
pub use settings::{Config, GameTimings};
