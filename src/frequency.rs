//! Frequency analysis of symbol index sequences.
//!
//! Produces a complete table (one entry per alphabet symbol, zero-filled)
//! so a rendering layer can draw a stable bar per symbol without knowing
//! which symbols happened to occur.

use serde::Serialize;

use crate::alphabet::Alphabet;
use crate::codec::Codec;
use crate::error::Result;

/// Occurrence count of every alphabet symbol, in alphabet order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    entries: Vec<(char, usize)>,
}

impl FrequencyTable {
    /// Count for `symbol`, or `None` if it is not an alphabet symbol.
    pub fn get(&self, symbol: char) -> Option<usize> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, count)| count)
    }

    /// `(symbol, count)` pairs in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Counts in alphabet order (bar heights).
    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|&(_, count)| count).collect()
    }

    /// Number of entries; always equals the alphabet size.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts; equals the length of the counted sequence.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Share of each symbol in `[0, 1]`, in alphabet order. All zero when
    /// nothing was counted.
    pub fn relative(&self) -> Vec<f64> {
        let total = self.total();
        self.entries
            .iter()
            .map(|&(_, count)| {
                if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                }
            })
            .collect()
    }

    /// Most frequent symbol and its count. Ties go to the symbol earliest
    /// in the alphabet; `None` when nothing was counted.
    pub fn most_common(&self) -> Option<(char, usize)> {
        self.entries
            .iter()
            .copied()
            .filter(|&(_, count)| count > 0)
            .fold(None, |best, (symbol, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((symbol, count)),
            })
    }
}

/// Symbol counter bound to one alphabet.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyAnalyzer<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> FrequencyAnalyzer<'a> {
    /// Creates an analyzer over `alphabet`.
    pub fn new(alphabet: &'a Alphabet) -> Self {
        FrequencyAnalyzer { alphabet }
    }

    /// Counts how often each symbol occurs in `indices`.
    ///
    /// Every alphabet symbol is present in the result, with count 0 if it
    /// does not occur. Only multiplicities matter, not order.
    ///
    /// # Errors
    /// Returns [`VigenereError::OutOfRange`] if an index is `>= N`.
    ///
    /// [`VigenereError::OutOfRange`]: crate::VigenereError::OutOfRange
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere::{Alphabet, FrequencyAnalyzer};
    ///
    /// let alphabet = Alphabet::new("ABC").unwrap();
    /// let table = FrequencyAnalyzer::new(&alphabet).count_symbols(&[2, 0, 2]).unwrap();
    /// assert_eq!(table.counts(), vec![1, 0, 2]);
    /// ```
    pub fn count_symbols(&self, indices: &[usize]) -> Result<FrequencyTable> {
        for &index in indices {
            self.alphabet.symbol_at(index)?;
        }
        Ok(self.tally(indices))
    }

    /// Counts the alphabet symbols of raw `text`; other characters are
    /// ignored.
    pub fn count_text(&self, text: &str) -> FrequencyTable {
        self.tally(&Codec::new(self.alphabet).encode(text))
    }

    /// Counts indices already known to be in range.
    fn tally(&self, indices: &[usize]) -> FrequencyTable {
        let mut counts = vec![0usize; self.alphabet.len()];
        for &index in indices {
            counts[index] += 1;
        }
        let entries = self
            .alphabet
            .symbols()
            .iter()
            .copied()
            .zip(counts)
            .collect();
        FrequencyTable { entries }
    }
}

/// Returns true if `recovered` (the decryption of a ciphertext) reproduces
/// `original` exactly.
pub fn is_round_trip<T: PartialEq>(original: &[T], recovered: &[T]) -> bool {
    original == recovered
}
