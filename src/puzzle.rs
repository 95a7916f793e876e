use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info, warn};
use rand::Rng;

use crate::{
    common::PuzzleError,
    config::{DEFAULT_MARGIN, FILLER_MAX_LEN, RETRY_WORD_PLACEMENT_CNT, TOTAL_WORDS_IN_SEARCH},
    difficulty::{Difficulty, FixedOrientation, WordPolicy},
    grid::Grid,
    orientation::Orientation,
    search::Placement,
    words::{normalize_word, sample_filler},
};

/// Settings for building a whole puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Cells added to the longest target word to get the grid side.
    pub margin: usize,
    /// Placement attempts per target word, each with a fresh transform.
    pub retries: usize,
    pub difficulty: Difficulty,
    /// Targets plus filler words.
    pub total_words: usize,
    pub filler_max_len: usize,
    /// Fail the build when a target is not an A–Z word or does not fit,
    /// instead of dropping it.
    pub strict: bool,
    /// Lay filler words out with the target policy instead of horizontally.
    pub filler_uses_policy: bool,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            retries: RETRY_WORD_PLACEMENT_CNT,
            difficulty: Difficulty::Easy,
            total_words: TOTAL_WORDS_IN_SEARCH,
            filler_max_len: FILLER_MAX_LEN,
            strict: true,
            filler_uses_policy: false,
        }
    }
}

/// A finished, filled puzzle and the words hidden in it.
#[derive(Debug)]
pub struct Puzzle {
    grid: Grid,
    words: Vec<String>,
    placements: Vec<Placement>,
    dropped: Vec<String>,
}

impl Puzzle {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Target words the solver has to find, normalized: whitespace stripped
    /// and uppercased, so "ice cream" is listed as "ICECREAM".
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Where each entry of [`Puzzle::words`] was placed.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Targets that were not A–Z words or did not fit (lenient builds only),
    /// as supplied.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.grid)?;
        write!(f, "Find: ")?;
        for (i, w) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", w)?;
        }
        Ok(())
    }
}

/// Serializable view of a puzzle for JSON output.
#[cfg(feature = "std")]
#[derive(Debug, Clone, serde::Serialize)]
pub struct PuzzleView {
    pub size: usize,
    pub rows: Vec<String>,
    pub words: Vec<String>,
    pub dropped: Vec<String>,
}

#[cfg(feature = "std")]
impl From<&Puzzle> for PuzzleView {
    fn from(p: &Puzzle) -> Self {
        PuzzleView {
            size: p.grid.size(),
            rows: p.grid.render().into_iter().map(|r| r.into_iter().collect()).collect(),
            words: p.words.clone(),
            dropped: p.dropped.clone(),
        }
    }
}

/// Greedy puzzle construction: targets first, in the given order, then
/// filler words (horizontal unless `filler_uses_policy`), then the random
/// fill pass.
pub struct PuzzleBuilder {
    config: PuzzleConfig,
}

impl PuzzleBuilder {
    pub fn new(config: PuzzleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Build with the configured difficulty as the word policy.
    pub fn build<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        targets: &[String],
        filler_pool: &[String],
    ) -> Result<Puzzle, PuzzleError> {
        let mut policy = self.config.difficulty;
        self.build_with(rng, targets, filler_pool, &mut policy)
    }

    /// Build using an explicit word policy for the targets, and for filler
    /// words when `filler_uses_policy` is set.
    pub fn build_with<R, P>(
        &self,
        rng: &mut R,
        targets: &[String],
        filler_pool: &[String],
        policy: &mut P,
    ) -> Result<Puzzle, PuzzleError>
    where
        R: Rng + ?Sized,
        P: WordPolicy,
    {
        let mut dropped = Vec::new();
        let mut normalized: Vec<String> = Vec::with_capacity(targets.len());
        for raw in targets {
            match normalize_word(raw) {
                Some(letters) => normalized.push(letters.into_iter().collect()),
                None if self.config.strict => {
                    return Err(PuzzleError::InvalidWord(raw.clone()));
                }
                None => {
                    warn!("dropping {:?}: not an A-Z word", raw);
                    dropped.push(raw.clone());
                }
            }
        }
        let targets = normalized;
        let longest = targets
            .iter()
            .map(|w| w.len())
            .max()
            .ok_or(PuzzleError::NoWords)?;

        let mut grid = Grid::new(longest + self.config.margin)?;
        info!(
            "building {}x{} puzzle for {} words ({})",
            grid.size(),
            grid.size(),
            targets.len(),
            self.config.difficulty
        );

        let mut words = Vec::with_capacity(targets.len());
        let mut placements = Vec::with_capacity(targets.len());
        for word in &targets {
            let mut placed = None;
            for _ in 0..self.config.retries.max(1) {
                let (form, orientation) = policy.transform(rng, word);
                placed = grid.try_put(rng, &form, orientation);
                if placed.is_some() {
                    break;
                }
            }
            match placed {
                Some(p) => {
                    words.push(word.clone());
                    placements.push(p);
                }
                None if self.config.strict => {
                    debug!("grid at failure:\n{}", grid);
                    return Err(PuzzleError::WordDidNotFit(word.clone()));
                }
                None => {
                    warn!("dropping {}: no room left", word);
                    dropped.push(word.clone());
                }
            }
        }

        let filler_count = self.config.total_words.saturating_sub(targets.len());
        let filler = sample_filler(rng, filler_pool, filler_count, self.config.filler_max_len);
        let mut horizontal = FixedOrientation(Orientation::Horizontal);
        let mut filler_placed = 0usize;
        for word in &filler {
            let (form, orientation) = if self.config.filler_uses_policy {
                policy.transform(rng, word)
            } else {
                horizontal.transform(rng, word)
            };
            if grid.put(rng, &form, orientation) {
                filler_placed += 1;
            }
        }
        debug!("placed {} of {} filler words", filler_placed, filler.len());

        grid.fill_empty_cells(rng);
        Ok(Puzzle {
            grid,
            words,
            placements,
            dropped,
        })
    }
}
