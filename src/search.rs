use std::fmt::{Display, Formatter};

use log::{debug, info};
use rayon::prelude::*;

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::index::CandidateSet;
use crate::location::Location;

/// The outcome of a search: the longest word found and the cell its path starts on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LongestWord {
    /// The word, empty if nothing was found.
    pub word: String,
    /// Where the word's path starts. `None` exactly when `word` is empty.
    pub start: Option<Location>,
}

impl LongestWord {
    /// The "no word found" result.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether a word was found.
    pub fn is_found(&self) -> bool {
        self.start.is_some()
    }

    // strictly longer only, so the first of several equally long words stays
    fn merge(self, word: String, start: Location) -> Self {
        if word.len() > self.word.len() {
            Self { word, start: Some(start) }
        } else {
            self
        }
    }
}

impl Display for LongestWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.start {
            Some(start) => write!(f, "Longest word is {} starting at position {}", self.word, start),
            None => write!(f, "No words found in the grid."),
        }
    }
}

/// Walk knight paths from `location`, whose letter would sit at `depth` in the word being built.
///
/// `prefix` holds the letters of the path so far and `candidates` the words still consistent with it.
/// Returns the longest of `best` and every dictionary word spelled by a path through here,
/// keeping `best` on ties.
///
/// # Termination
/// Paths may revisit cells, so the knight graph's cycles are walked freely; there is deliberately no visited set,
/// since a word may need the same square twice. Recursion stops because every frame narrows `candidates`
/// to words longer than `depth`, which is empty once `depth` reaches the longest candidate's length.
pub fn explore(
    board: &Board,
    location: Location,
    depth: usize,
    prefix: &str,
    candidates: &CandidateSet,
    best: String,
) -> String {
    let letter = board.letter_at(location);
    let candidates = candidates.filter_by_position_char(depth, letter);
    if candidates.is_empty() {
        return best;
    }

    let mut prefix = prefix.to_owned();
    prefix.push(letter);

    let mut best = best;
    // a match here may still be the prefix of a longer word, so keep going either way
    if prefix.len() > best.len() && candidates.contains(&prefix) {
        best = prefix.clone();
    }

    board.knight_moves(location)
        .fold(best, |best, next| explore(board, next, depth + 1, &prefix, &candidates, best))
}

/// The longest word whose path starts at `start`, or an empty string.
pub fn search_from(board: &Board, dictionary: &Dictionary, start: Location) -> String {
    explore(board, start, 0, "", &CandidateSet::from(dictionary), String::new())
}

/// The longest dictionary word spelled by knight moves anywhere on `board`.
///
/// Starting cells are tried in row-major order; the first of several equally long words wins.
pub fn find_longest_word(board: &Board, dictionary: &Dictionary) -> LongestWord {
    info!("searching {} words", dictionary.len());

    let result = board.locations()
        .map(|start| (start, search_from(board, dictionary, start)))
        .inspect(log_cell)
        .fold(LongestWord::none(), |best, (start, word)| best.merge(word, start));

    info!("result: {}", result);
    result
}

/// As [`find_longest_word`], with starting cells searched in parallel on the `rayon` pool.
///
/// Results are reduced in row-major order, so the outcome is identical to the sequential search.
pub fn find_longest_word_parallel(board: &Board, dictionary: &Dictionary) -> LongestWord {
    info!("searching {} words on {} threads", dictionary.len(), rayon::current_num_threads());

    let starts: Vec<Location> = board.locations().collect();
    let per_cell: Vec<(Location, String)> = starts.par_iter()
        .map(|start| (*start, search_from(board, dictionary, *start)))
        .collect();

    let result = per_cell.into_iter()
        .inspect(log_cell)
        .fold(LongestWord::none(), |best, (start, word)| best.merge(word, start));

    info!("result: {}", result);
    result
}

fn log_cell((start, word): &(Location, String)) {
    if !word.is_empty() {
        debug!("longest word from {}: {}", start, word);
    }
}

/// One knight path starting at `start` that spells `word`, trying moves in canonical order.
///
/// `None` if `word` is empty or no such path exists.
pub fn trace_path(board: &Board, start: Location, word: &str) -> Option<Vec<Location>> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return None;
    }

    let mut path = Vec::with_capacity(letters.len());
    match extend_path(board, start, &letters, &mut path) {
        true => Some(path),
        false => None,
    }
}

// depth is bounded by the word, so no visited set is needed here either
fn extend_path(board: &Board, location: Location, letters: &[char], path: &mut Vec<Location>) -> bool {
    let Some((first, rest)) = letters.split_first() else {
        return true;
    };
    if board.letter_at(location) != *first {
        return false;
    }

    path.push(location);
    if rest.is_empty() || board.knight_moves(location).any(|next| extend_path(board, next, rest, path)) {
        return true;
    }
    path.pop();

    false
}
