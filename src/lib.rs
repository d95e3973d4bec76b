#![warn(missing_docs)]

//! # `knightword`
//!
//! Finds the longest dictionary word that can be spelled on an 8x8 letter grid by a chess knight,
//! reading one letter per square and moving by a knight's move between letters.
//!
//! Build a [`Board`] with a [`BoardBuilder`] or parse one from grid text, tokenize some text into a [`Dictionary`],
//! then call [`find_longest_word`].
//!
//! # Internals
//! Every cell is tried as a starting square. From there the search walks knight moves depth first,
//! carrying the letters read so far and the set of dictionary words still consistent with them
//! (a [`CandidateSet`]). Each step keeps only the words with the current square's letter at the current depth,
//! so the frontier shrinks as the path grows and a branch ends as soon as no word can continue.
//!
//! Squares may be revisited; the knight graph has cycles, and the search still terminates because
//! no candidate survives past the length of the longest word.
//!
//! The best word is threaded through return values rather than shared, so the 64 starting squares
//! are independent and [`find_longest_word_parallel`] can spread them across threads.

pub use board::{Board, GRID_SIZE};
pub use builder::{BoardBuilder, BuilderInvalidReason};
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use index::CandidateSet;
pub use location::Location;
pub use search::{explore, find_longest_word, find_longest_word_parallel, search_from, trace_path, LongestWord};
pub use step::KnightStep;

pub(crate) mod board;
pub(crate) mod builder;
pub(crate) mod dictionary;
pub(crate) mod error;
pub(crate) mod index;
pub(crate) mod location;
pub(crate) mod search;
pub(crate) mod step;
#[cfg(feature = "wasm")]
pub mod wasm;
