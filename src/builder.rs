use ndarray::Array2;

use crate::board::{Board, GRID_SIZE};
use crate::location::Location;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuilderInvalidReason {
    /// A letter was placed outside the 8x8 board.
    LocationOutOfBounds,
    /// A row was set from a string that does not hold exactly 8 letters.
    RowLength,
}

/// Builds a [`Board`] one cell or one row at a time.
///
/// Letters are folded to ASCII lowercase as they are placed.
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    cells: Array2<char>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// A builder whose every cell holds `'.'`, which no dictionary word contains.
    pub fn new() -> Self {
        Self::filled('.')
    }

    /// A builder whose every cell holds `letter`.
    pub fn filled(letter: char) -> Self {
        Self {
            cells: Array2::from_elem((GRID_SIZE, GRID_SIZE), letter.to_ascii_lowercase()),
            invalid_reasons: Default::default(),
        }
    }

    /// Place `letter` at `location`.
    ///
    /// May cause the builder to enter a [`LocationOutOfBounds`](BuilderInvalidReason::LocationOutOfBounds) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn set(&mut self, location: Location, letter: char) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match self.cells.get_mut(location.as_index()) {
            Some(cell) => *cell = letter.to_ascii_lowercase(),
            None => self.invalid_reasons.push(BuilderInvalidReason::LocationOutOfBounds),
        }

        self
    }

    /// Place each letter of `letters` along a path of cells, e.g. one produced by knight moves.
    /// Stops at the shorter of the two.
    pub fn spell(&mut self, path: &[Location], letters: &str) -> &mut Self {
        for (location, letter) in path.iter().zip(letters.chars()) {
            self.set(*location, letter);
        }

        self
    }

    /// Overwrite row `row` with the 8 characters of `letters`.
    ///
    /// May cause the builder to enter a [`RowLength`](BuilderInvalidReason::RowLength)
    /// or [`LocationOutOfBounds`](BuilderInvalidReason::LocationOutOfBounds) invalid state.
    pub fn set_row(&mut self, row: usize, letters: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if letters.chars().count() != GRID_SIZE {
            self.invalid_reasons.push(BuilderInvalidReason::RowLength);
            return self;
        }

        for (col, letter) in letters.chars().enumerate() {
            self.set(Location(row, col), letter);
        }

        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        match self.invalid_reasons.is_empty() {
            true => None,
            false => Some(&self.invalid_reasons),
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        match self.is_valid() {
            Some(reasons) => Err(reasons),
            None => Ok(Board { cells: self.cells.clone() }),
        }
    }
}
