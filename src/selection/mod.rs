mod selection;

pub use selection::{MatchResult, Selection, SelectionState};
