use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;

use crate::error::{Error, Result};
use crate::location::Location;
use crate::step::KnightStep;

/// Side length of every board.
pub const GRID_SIZE: usize = 8;

/// An immutable 8x8 grid of lowercase letters.
///
/// [`Board`]s are made by a [`BoardBuilder`](crate::BoardBuilder), or parsed from grid text with [`str::parse`] / [`Board::from_path`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: Array2<char>,
}

impl Board {
    /// The board's `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// The letter at `location`.
    ///
    /// # Panics
    /// If `location` is off the board. Locations produced by [`Self::knight_moves`] and [`Self::locations`] never are.
    pub fn letter_at(&self, location: Location) -> char {
        self.cells[location.as_index()]
    }

    /// Cells one knight move away from `location`, in the fixed order of [`KnightStep`]'s variants.
    pub fn knight_moves(&self, location: Location) -> impl Iterator<Item = Location> {
        KnightStep::destinations_from(location, self.dims())
    }

    /// Every cell, in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let (rows, cols) = self.dims();
        (0..rows).cartesian_product(0..cols).map(Location::from)
    }

    /// Read and parse a grid file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_path_buf(), source })?
            .parse()
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse grid text: exactly 8 lines of exactly 8 whitespace separated single characters.
    ///
    /// A blank line is a row with no cells, not a separator.
    fn from_str(s: &str) -> Result<Self> {
        let rows = s.lines()
            .map(|line| line.split_whitespace().collect_vec())
            .collect_vec();
        if rows.len() != GRID_SIZE {
            return Err(Error::RowCount { found: rows.len() });
        }

        let mut cells = Array2::from_elem((GRID_SIZE, GRID_SIZE), '.');
        for (row, tokens) in rows.into_iter().enumerate() {
            if tokens.len() != GRID_SIZE {
                return Err(Error::ColumnCount { row: row + 1, found: tokens.len() });
            }

            for (col, token) in tokens.into_iter().enumerate() {
                match token.chars().exactly_one() {
                    Ok(letter) => cells[(row, col)] = letter.to_ascii_lowercase(),
                    Err(_) => return Err(Error::CellNotSingleChar { row: row + 1, col: col + 1, token: token.to_string() }),
                }
            }
        }

        Ok(Self { cells })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
