//! Word orientations and the coordinate geometry derived from them.

use core::fmt;

use crate::common::GridError;

/// Grid coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// Direction a word is laid out along. Every orientation reads forward
/// (downward or rightward); reversed words are produced by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Orientation {
    /// All orientations in index order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDownRight,
        Orientation::DiagonalDownLeft,
    ];

    /// Row and column increments for one step along the orientation.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDownRight => (1, 1),
            Orientation::DiagonalDownLeft => (1, -1),
        }
    }

    /// Stable index, also used to select the occupancy mask.
    pub const fn index(self) -> usize {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
            Orientation::DiagonalDownRight => 2,
            Orientation::DiagonalDownLeft => 3,
        }
    }
}

impl TryFrom<usize> for Orientation {
    type Error = GridError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Orientation::ALL
            .get(index)
            .copied()
            .ok_or(GridError::InvalidOrientation(index))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::DiagonalDownRight => "diagonal-down-right",
            Orientation::DiagonalDownLeft => "diagonal-down-left",
        };
        f.write_str(name)
    }
}

/// Cell reached by moving `offset` steps from `origin` along `orientation`.
/// Returns `None` when the step leaves the grid through row or column zero.
pub fn cell_at(origin: Coord, offset: usize, orientation: Orientation) -> Option<Coord> {
    let (dr, dc) = orientation.step();
    let row = shift(origin.0, dr, offset)?;
    let col = shift(origin.1, dc, offset)?;
    Some((row, col))
}

#[inline]
fn shift(base: usize, delta: isize, offset: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        d if d > 0 => base.checked_add(offset),
        _ => base.checked_sub(offset),
    }
}

/// True when `coord` lies inside a `size×size` grid.
#[inline]
pub fn in_bounds(coord: Coord, size: usize) -> bool {
    coord.0 < size && coord.1 < size
}
