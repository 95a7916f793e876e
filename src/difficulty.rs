use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use rand::Rng;

use crate::common::PuzzleError;
use crate::orientation::Orientation;

/// Decides how a word is laid out before it reaches `Grid::put`: which form
/// of the word to hide and along which orientation.
pub trait WordPolicy {
    /// Return the word to place (possibly transformed) and its orientation.
    fn transform<R: Rng + ?Sized>(&mut self, rng: &mut R, word: &str) -> (String, Orientation);
}

/// Puzzle difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize, clap::ValueEnum))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Horizontal or vertical, read forwards.
    #[default]
    Easy,
    /// Any orientation, read forwards.
    Medium,
    /// Any orientation; half of the words are reversed.
    Hard,
}

impl WordPolicy for Difficulty {
    fn transform<R: Rng + ?Sized>(&mut self, rng: &mut R, word: &str) -> (String, Orientation) {
        let pick = |rng: &mut R, n: usize| Orientation::ALL[rng.random_range(0..n)];
        match self {
            Difficulty::Easy => (String::from(word), pick(rng, 2)),
            Difficulty::Medium => (String::from(word), pick(rng, 4)),
            Difficulty::Hard => {
                let word = if rng.random::<bool>() {
                    word.chars().rev().collect()
                } else {
                    String::from(word)
                };
                (word, pick(rng, 4))
            }
        }
    }
}

impl FromStr for Difficulty {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(PuzzleError::UnknownDifficulty(String::from(s))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Places every word unchanged along one orientation. Filler words use
/// `FixedOrientation(Orientation::Horizontal)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOrientation(pub Orientation);

impl WordPolicy for FixedOrientation {
    fn transform<R: Rng + ?Sized>(&mut self, _rng: &mut R, word: &str) -> (String, Orientation) {
        (String::from(word), self.0)
    }
}
