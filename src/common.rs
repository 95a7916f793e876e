//! Common error types for the grid, its masks and the puzzle builder.

use alloc::string::String;

/// Errors returned by occupancy mask operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for MaskError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MaskError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// Errors returned by Grid operations. These are caller wiring mistakes,
/// never routine placement failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Underlying mask error.
    MaskError(MaskError),
    /// Grid side must be at least 1.
    InvalidSize(usize),
    /// Orientation index outside 0..=3.
    InvalidOrientation(usize),
}

impl From<MaskError> for GridError {
    fn from(err: MaskError) -> Self {
        GridError::MaskError(err)
    }
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::MaskError(e) => write!(f, "Mask error: {}", e),
            GridError::InvalidSize(n) => write!(f, "Invalid grid size {}, must be at least 1", n),
            GridError::InvalidOrientation(i) => {
                write!(f, "Invalid orientation index {}, expected 0..=3", i)
            }
        }
    }
}

/// Errors returned while building a whole puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Underlying grid error.
    Grid(GridError),
    /// No placeable target words were supplied.
    NoWords,
    /// A target word is empty or holds characters outside A–Z.
    InvalidWord(String),
    /// A target word found no candidate origin within the retry budget.
    WordDidNotFit(String),
    /// Difficulty name not recognised.
    UnknownDifficulty(String),
}

impl From<GridError> for PuzzleError {
    fn from(err: GridError) -> Self {
        PuzzleError::Grid(err)
    }
}

impl core::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PuzzleError::Grid(e) => write!(f, "Grid error: {}", e),
            PuzzleError::NoWords => write!(f, "No placeable words were provided"),
            PuzzleError::InvalidWord(w) => write!(f, "Word {:?} is not an A-Z word", w),
            PuzzleError::WordDidNotFit(w) => write!(f, "Failed to put word {}", w),
            PuzzleError::UnknownDifficulty(d) => {
                write!(f, "Unknown difficulty '{}', expected easy, medium or hard", d)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MaskError {}
#[cfg(feature = "std")]
impl std::error::Error for GridError {}
#[cfg(feature = "std")]
impl std::error::Error for PuzzleError {}
