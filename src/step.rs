use strum::VariantArray;

use crate::location::Location;

/// The eight moves of a chess knight, as `(row, col)` offsets.
///
/// The declaration order is the canonical enumeration order used everywhere moves are generated.
/// Among equally long words, the search reports the first one found, so reordering these variants
/// can change which of them is reported (never its length).
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum KnightStep {
    /// `(+1, +2)`
    DownRightRight,
    /// `(+1, -2)`
    DownLeftLeft,
    /// `(-1, +2)`
    UpRightRight,
    /// `(-1, -2)`
    UpLeftLeft,
    /// `(+2, +1)`
    DownDownRight,
    /// `(+2, -1)`
    DownDownLeft,
    /// `(-2, +1)`
    UpUpRight,
    /// `(-2, -1)`
    UpUpLeft,
}

impl KnightStep {
    /// The `(row, col)` offset of this move.
    pub const fn offset(&self) -> (isize, isize) {
        match self {
            Self::DownRightRight => (1, 2),
            Self::DownLeftLeft => (1, -2),
            Self::UpRightRight => (-1, 2),
            Self::UpLeftLeft => (-1, -2),
            Self::DownDownRight => (2, 1),
            Self::DownDownLeft => (2, -1),
            Self::UpUpRight => (-2, 1),
            Self::UpUpLeft => (-2, -1),
        }
    }

    /// Attempt the step from `location` on a board of `dims` (rows, cols).
    /// `None` if the knight would leave the board.
    pub fn attempt_from(&self, location: Location, dims: (usize, usize)) -> Option<Location> {
        location.offset_within(self.offset(), dims)
    }

    /// Every in-bounds destination from `location`, in canonical order.
    pub fn destinations_from(location: Location, dims: (usize, usize)) -> impl Iterator<Item = Location> {
        Self::VARIANTS.iter().filter_map(move |step| step.attempt_from(location, dims))
    }
}
