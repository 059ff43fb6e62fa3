mod hint;

pub use hint::{find_word, hint_prefix, HINT_LENGTH};
