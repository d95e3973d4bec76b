use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// The set of distinct words a search may report.
///
/// Words are lowercase ASCII alphanumeric and non-empty; see [`Dictionary::from_text`] for how text is tokenized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

/// Strip everything outside `[a-zA-Z0-9]` from `token` and lowercase the rest.
/// `None` if nothing is left.
pub(crate) fn normalize(token: &str) -> Option<String> {
    let word: String = token.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match word.is_empty() {
        true => None,
        false => Some(word),
    }
}

impl Dictionary {
    /// Tokenize arbitrary text: split on whitespace, strip non-alphanumerics, lowercase, drop empties and duplicates.
    pub fn from_text(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// Read and tokenize a text file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        Ok(Self::from_text(&text))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether there are no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is in the dictionary, exactly as given.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// All words, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Length of the longest word, 0 if empty.
    /// No path deeper than this can match anything.
    pub fn longest_word_len(&self) -> usize {
        self.iter().map(str::len).max().unwrap_or(0)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    /// Normalize every item as a token of dictionary text would be.
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().filter_map(|token| normalize(token.as_ref())).collect(),
        }
    }
}
