use std::path::PathBuf;

/// Failures while loading a dictionary or a grid. All of these are fatal configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Io {
        /// The file that failed to open or read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The grid does not have exactly 8 rows.
    #[error("grid must have 8 rows, found {found}")]
    RowCount {
        /// Number of lines seen.
        found: usize,
    },
    /// A grid row does not have exactly 8 columns.
    #[error("grid row {row} must have 8 columns, found {found}")]
    ColumnCount {
        /// 1-indexed row number.
        row: usize,
        /// Number of tokens on that row.
        found: usize,
    },
    /// A grid token is not a single character.
    #[error("grid cell ({row}, {col}) must be a single character, found {token:?}")]
    CellNotSingleChar {
        /// 1-indexed row number.
        row: usize,
        /// 1-indexed column number.
        col: usize,
        /// The offending token.
        token: String,
    },
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
