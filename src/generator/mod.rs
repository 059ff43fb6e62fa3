mod generator;

pub use generator::{generate, generate_with_rng, Generated, MAX_ATTEMPTS};
