//! A runtime-sized occupancy mask packed into unsigned words.
//!
//! The grid side is only known once the word list has been read, so unlike a
//! fixed bitboard the `N×N` bits live in a `Vec<T>` of words. `T` is any
//! unsigned primitive; `u64` is the default.

use alloc::vec;
use alloc::vec::Vec;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::MaskError;

/// An `N×N` bit grid, one bit per cell, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct OccupancyMask<T = u64>
where
    T: PrimInt + Unsigned + Zero,
{
    size: usize,
    words: Vec<T>,
}

impl<T> OccupancyMask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Create an empty `size×size` mask (all bits cleared).
    pub fn new(size: usize) -> Self {
        let bits = size * size;
        let len = bits.div_ceil(Self::WORD_BITS);
        OccupancyMask {
            size,
            words: vec![T::zero(); len],
        }
    }

    /// Side length of the mask.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, MaskError> {
        let (word, bit) = self.locate(row, col)?;
        Ok(((self.words[word] >> bit) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] | (T::one() << bit);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), MaskError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] & !(T::one() << bit);
        Ok(())
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), MaskError> {
        if row >= self.size || col >= self.size {
            return Err(MaskError::IndexOutOfBounds { row, col });
        }
        let idx = row * self.size + col;
        Ok((idx / Self::WORD_BITS, idx % Self::WORD_BITS))
    }

    /// Creates a mask from an iterator over `(row, col)` positions.
    pub fn from_iter<I>(size: usize, iter: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut mask = Self::new(size);
        for (r, c) in iter {
            mask.set(r, c)?;
        }
        Ok(mask)
    }

    /// Iterator over the set bits of the mask, row-major.
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits { mask: self, idx: 0 }
    }

    /// True when no cell is set in both masks.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| (*a & *b).is_zero())
    }
}

impl<T> fmt::Debug for OccupancyMask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OccupancyMask<{}>:", self.size)?;
        write!(f, "{}", self)
    }
}

impl<T> fmt::Display for OccupancyMask<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                let bit = if self.get(r, c).unwrap_or(false) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set bits of a mask.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    mask: &'a OccupancyMask<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.mask.size;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            let word = self.mask.words[idx / OccupancyMask::<T>::WORD_BITS];
            if ((word >> (idx % OccupancyMask::<T>::WORD_BITS)) & T::one()) != T::zero() {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}
