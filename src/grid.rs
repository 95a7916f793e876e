//! The word-search grid: a letter matrix plus one occupancy mask per orientation.
//!
//! Words are committed greedily and irrevocably. Each `put` picks among the
//! origins valid *now*, so a word list that fits in one order may fail in
//! another; nothing is ever undone to make room for a later word.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::common::GridError;
use crate::config::{ALPHABET, EMPTY_CELL_CHAR};
use crate::mask::OccupancyMask;
use crate::orientation::{Coord, Orientation};
use crate::search::{self, Placement};
use crate::words::normalize_word;

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    /// An uppercase A–Z letter from a placed word or the fill pass.
    Letter(char),
}

impl Cell {
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Letter(c) => Some(c),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character shown when rendering.
    pub fn glyph(self) -> char {
        self.letter().unwrap_or(EMPTY_CELL_CHAR)
    }
}

pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    masks: [OccupancyMask; 4],
    filled: bool,
}

impl Grid {
    /// Create an empty `size×size` grid with all masks clear.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize(size));
        }
        Ok(Grid {
            size,
            cells: alloc::vec![Cell::Empty; size * size],
            masks: core::array::from_fn(|_| OccupancyMask::new(size)),
            filled: false,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at (row, col), or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Occupancy mask of words placed along `orientation`.
    pub fn mask(&self, orientation: Orientation) -> &OccupancyMask {
        &self.masks[orientation.index()]
    }

    /// Returns `true` once `fill_empty_cells` has run.
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Whether `letter` may be written at `coord`: the cell is empty or
    /// already holds exactly that letter.
    pub fn accepts(&self, coord: Coord, letter: char) -> bool {
        match self.cell(coord.0, coord.1) {
            Some(Cell::Empty) => true,
            Some(Cell::Letter(c)) => c == letter,
            None => false,
        }
    }

    /// Origins at which `word` fits along `orientation`, row-major.
    pub fn candidates(&self, word: &str, orientation: Orientation) -> Vec<Coord> {
        match normalize_word(word) {
            Some(letters) => search::candidate_origins(self, &letters, orientation),
            None => Vec::new(),
        }
    }

    /// Hide `word` along `orientation` at a uniformly random candidate origin.
    /// Returns `false`, leaving the grid untouched, when no origin fits.
    pub fn put<R: Rng + ?Sized>(&mut self, rng: &mut R, word: &str, orientation: Orientation) -> bool {
        self.try_put(rng, word, orientation).is_some()
    }

    /// Like [`Grid::put`] but reports where the word went.
    pub fn try_put<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        word: &str,
        orientation: Orientation,
    ) -> Option<Placement> {
        let letters = self.placeable(word)?;
        match search::choose_placement(self, &letters, orientation, rng) {
            Some(placement) => {
                self.commit(&letters, &placement);
                debug!("placed {:?} at {:?} {}", word, placement.origin(), orientation);
                Some(placement)
            }
            None => {
                debug!("no candidate origin for {:?} {}", word, orientation);
                None
            }
        }
    }

    /// Commit `word` at a fixed origin if that origin is a candidate.
    pub fn place_at(&mut self, word: &str, origin: Coord, orientation: Orientation) -> bool {
        let letters = match self.placeable(word) {
            Some(letters) => letters,
            None => return false,
        };
        let placement = Placement::new(origin, orientation, letters.len());
        if !search::fits(self, &letters, &placement) {
            return false;
        }
        self.commit(&letters, &placement);
        true
    }

    fn placeable(&self, word: &str) -> Option<Vec<char>> {
        if self.filled {
            // filler letters carry no mask bit, so the word may land on them
            warn!("placing {:?} after the fill pass: filler letters are not protected", word);
        }
        let letters = normalize_word(word);
        if letters.is_none() {
            warn!("cannot place {:?}: not an A-Z word", word);
        }
        letters
    }

    // Caller has validated the placement with `search::fits`.
    fn commit(&mut self, letters: &[char], placement: &Placement) {
        let mask = &mut self.masks[placement.orientation().index()];
        for (cell, &letter) in placement.cells().flatten().zip(letters) {
            let set = mask.set(cell.0, cell.1);
            debug_assert!(set.is_ok(), "validated placement left the grid at {:?}", cell);
            self.cells[cell.0 * self.size + cell.1] = Cell::Letter(letter);
        }
    }

    /// Give every empty cell a uniformly random letter A–Z. Masks are not
    /// touched, so this belongs after the last `put`: a later word may cross
    /// filler letters as if they were committed.
    pub fn fill_empty_cells<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut filled = 0usize;
        for cell in self.cells.iter_mut().filter(|c| c.is_empty()) {
            let letter = ALPHABET.as_bytes()[rng.random_range(0..ALPHABET.len())] as char;
            *cell = Cell::Letter(letter);
            filled += 1;
        }
        self.filled = true;
        debug!("filled {} empty cells", filled);
    }

    /// Rows of characters for display. Empty cells show as `.`.
    pub fn render(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.glyph()).collect())
            .collect()
    }

    /// All cells flattened row-major.
    pub fn letters(&self) -> Vec<char> {
        self.cells.iter().map(|c| c.glyph()).collect()
    }

    /// Number of cells still holding no letter.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.glyph())?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ size: {}, filled: {} }}", self.size, self.filled)?;
        writeln!(f, "{}", self)?;
        for o in Orientation::ALL {
            writeln!(f, "{} mask:\n{}", o, self.mask(o))?;
        }
        Ok(())
    }
}
