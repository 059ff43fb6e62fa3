use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub text: String,
    pub found: bool,
}

impl Word {
    /// Uppercases `text` and drops anything outside A-Z.
    pub fn new(text: &str) -> Self {
        let text = text
            .trim()
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_uppercase())
            .collect::<String>();
        Self { text, found: false }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The target words of one level.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    pub fn new(texts: &[&str]) -> Self {
        WordList {
            words: texts.iter().map(|text| Word::new(text)).collect(),
        }
    }

    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text == text)
    }

    pub fn is_unfound(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text == text && !w.found)
    }

    /// Flips `text` to found. Returns `false` if it was already found or is
    /// not on the list.
    pub fn mark_found(&mut self, text: &str) -> bool {
        match self.words.iter_mut().find(|w| w.text == text && !w.found) {
            Some(word) => {
                word.found = true;
                true
            }
            None => false,
        }
    }

    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        !self.words.is_empty() && self.found_count() == self.words.len()
    }

    pub fn unfound(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| !w.found)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Unfound words first, then found ones; alphabetical within each group.
    pub fn display_order(&self) -> Vec<&Word> {
        let mut sorted: Vec<&Word> = self.words.iter().collect();
        sorted.sort_by(|a, b| a.found.cmp(&b.found).then_with(|| a.text.cmp(&b.text)));
        sorted
    }
}
