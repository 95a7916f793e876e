//! Exhaustive placement search over every origin of the grid.
//! Pure with respect to the grid: nothing here mutates it.

use alloc::vec::Vec;
use rand::Rng;

use crate::grid::Grid;
use crate::orientation::{cell_at, in_bounds, Coord, Orientation};

/// A word's position: origin, orientation and length. Together they fix every
/// covered cell. Placements are transient values, committed or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    origin: Coord,
    orientation: Orientation,
    len: usize,
}

impl Placement {
    pub const fn new(origin: Coord, orientation: Orientation, len: usize) -> Self {
        Self {
            origin,
            orientation,
            len,
        }
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cells covered in word order. `None` marks a step past row or column zero.
    pub fn cells(self) -> impl Iterator<Item = Option<Coord>> {
        (0..self.len).map(move |offset| cell_at(self.origin, offset, self.orientation))
    }

    /// All covered cells, or `None` if any of them falls outside a
    /// `size×size` grid.
    pub fn cells_within(&self, size: usize) -> Option<Vec<Coord>> {
        self.cells()
            .map(|cell| cell.filter(|&c| in_bounds(c, size)))
            .collect()
    }
}

/// Whether `letters` may be committed at `placement`: every cell in bounds,
/// none already claimed along the same orientation, and each either empty or
/// holding the same letter.
pub fn fits(grid: &Grid, letters: &[char], placement: &Placement) -> bool {
    if letters.len() != placement.len() {
        return false;
    }
    let cells = match placement.cells_within(grid.size()) {
        Some(cells) => cells,
        None => return false,
    };
    let mask = grid.mask(placement.orientation());
    if cells
        .iter()
        .any(|&(r, c)| mask.get(r, c).unwrap_or(true))
    {
        return false;
    }
    cells
        .iter()
        .zip(letters)
        .all(|(&coord, &letter)| grid.accepts(coord, letter))
}

/// Every origin at which `letters` fits along `orientation`, in row-major order.
pub fn candidate_origins(grid: &Grid, letters: &[char], orientation: Orientation) -> Vec<Coord> {
    let size = grid.size();
    let mut origins = Vec::new();
    for r in 0..size {
        for c in 0..size {
            let placement = Placement::new((r, c), orientation, letters.len());
            if fits(grid, letters, &placement) {
                origins.push((r, c));
            }
        }
    }
    origins
}

/// Pick one candidate origin uniformly at random. `None` when the word does
/// not fit anywhere along `orientation`.
pub fn choose_placement<R: Rng + ?Sized>(
    grid: &Grid,
    letters: &[char],
    orientation: Orientation,
    rng: &mut R,
) -> Option<Placement> {
    let origins = candidate_origins(grid, letters, orientation);
    if origins.is_empty() {
        return None;
    }
    let origin = origins[rng.random_range(0..origins.len())];
    Some(Placement::new(origin, orientation, letters.len()))
}
