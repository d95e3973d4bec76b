//! JavaScript binding, enabled by the `wasm` feature.

use wasm_bindgen::prelude::*;

use crate::{find_longest_word, Board, Dictionary};

/// Search `grid_text` for the longest word of `dictionary_text`, returning the formatted result line.
///
/// Grid errors are thrown as JavaScript `Error`s.
#[wasm_bindgen(js_name = longestWord)]
pub fn longest_word(dictionary_text: &str, grid_text: &str) -> Result<String, JsError> {
    let board: Board = grid_text.parse()?;
    let dictionary = Dictionary::from_text(dictionary_text);
    Ok(find_longest_word(&board, &dictionary).to_string())
}
