use crate::dictionary::Dictionary;

/// The dictionary words still consistent with a path's prefix.
///
/// Sets borrow their words from a [`Dictionary`] and are never narrowed in place:
/// [`filter_by_position_char`](Self::filter_by_position_char) returns a fresh set,
/// so sibling branches of a search each hold their own view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet<'d> {
    words: Vec<&'d str>,
}

impl<'d> CandidateSet<'d> {
    /// The words of this set that are longer than `position` and have `letter` at `position`.
    ///
    /// Dictionary words are ASCII, so positions are byte offsets.
    /// A non-ASCII `letter` matches nothing.
    pub fn filter_by_position_char(&self, position: usize, letter: char) -> Self {
        if !letter.is_ascii() {
            return Self::default();
        }
        let byte = letter as u8;

        Self {
            words: self.words.iter()
                .copied()
                .filter(|word| word.as_bytes().get(position) == Some(&byte))
                .collect(),
        }
    }

    /// Whether `word` is one of the candidates.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|candidate| *candidate == word)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// An empty set means no word can continue along this path.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The candidates, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &'d str> + '_ {
        self.words.iter().copied()
    }
}

impl<'d> From<&'d Dictionary> for CandidateSet<'d> {
    fn from(dictionary: &'d Dictionary) -> Self {
        Self { words: dictionary.iter().collect() }
    }
}

impl<'d> FromIterator<&'d str> for CandidateSet<'d> {
    fn from_iter<T: IntoIterator<Item = &'d str>>(iter: T) -> Self {
        Self { words: iter.into_iter().collect() }
    }
}
