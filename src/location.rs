use std::fmt::{Display, Formatter};

use ndarray::Ix;

type Coord = usize;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(row, col)` on a board. The top left corner is `Location(0, 0)`.
///
/// Locations are 0-indexed; the [`Display`] impl renders them 1-indexed, as reported to users.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    /// Offset by `rhs`, returning `None` if the result leaves the `rows` x `cols` rectangle.
    pub(crate) fn offset_within(self, rhs: (isize, isize), dims: (usize, usize)) -> Option<Self> {
        let row = self.0.checked_add_signed(rhs.0).filter(|row| *row < dims.0)?;
        let col = self.1.checked_add_signed(rhs.1).filter(|col| *col < dims.1)?;
        Some(Self(row, col))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0 + 1, self.1 + 1)
    }
}
