//! Codec: conversion between raw text and symbol index sequences.
//!
//! Encoding walks the text in order and keeps only characters present in the
//! alphabet; everything else (whitespace, punctuation, unsupported case) is
//! dropped without error. Decoding maps indices back to symbols and rejects
//! indices outside the alphabet.

use log::debug;

use crate::alphabet::Alphabet;
use crate::config::CipherConfig;
use crate::error::Result;

/// Ordered sequence of symbol indices, each in `[0, N)` when produced by
/// this crate.
pub type IndexSequence = Vec<usize>;

/// Text codec bound to one alphabet.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'a> {
    alphabet: &'a Alphabet,
    fold_case: bool,
}

impl<'a> Codec<'a> {
    /// Creates a codec over `alphabet`. Case folding is on when the
    /// alphabet has upper-case letters (see [`CipherConfig::new`]).
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Codec {
            alphabet,
            fold_case: alphabet.has_uppercase(),
        }
    }

    /// Creates a codec from a startup configuration.
    pub fn from_config(config: &'a CipherConfig) -> Self {
        Codec {
            alphabet: &config.alphabet,
            fold_case: config.fold_case,
        }
    }

    /// The alphabet this codec encodes into.
    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Converts `text` to symbol indices, dropping characters that are not
    /// in the alphabet. Case is never folded here.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere::{Alphabet, Codec};
    ///
    /// let alphabet = Alphabet::default();
    /// let codec = Codec::new(&alphabet);
    /// assert_eq!(codec.encode("AB-C!"), vec![0, 1, 2]);
    /// assert_eq!(codec.encode("abc"), Vec::<usize>::new());
    /// ```
    pub fn encode(&self, text: &str) -> IndexSequence {
        text.chars()
            .filter_map(|c| self.alphabet.index_of(c))
            .collect()
    }

    /// Converts symbol indices back to text.
    ///
    /// # Errors
    /// Returns [`VigenereError::OutOfRange`] on the first index outside the
    /// alphabet.
    ///
    /// [`VigenereError::OutOfRange`]: crate::VigenereError::OutOfRange
    pub fn decode(&self, indices: &[usize]) -> Result<String> {
        indices
            .iter()
            .map(|&index| self.alphabet.symbol_at(index))
            .collect()
    }

    /// Prepares raw text (e.g. a loaded sample file) for encryption:
    /// upper-cases it when case folding is on, then keeps only alphabet
    /// symbols.
    ///
    /// ```
    /// use vigenere::{Alphabet, Codec};
    ///
    /// let alphabet = Alphabet::default();
    /// let codec = Codec::new(&alphabet);
    /// assert_eq!(codec.normalize("Attack at dawn!"), "ATTACKATDAWN");
    /// ```
    pub fn normalize(&self, text: &str) -> String {
        let normalized: String = if self.fold_case {
            text.to_uppercase()
                .chars()
                .filter(|&c| self.alphabet.contains(c))
                .collect()
        } else {
            text.chars()
                .filter(|&c| self.alphabet.contains(c))
                .collect()
        };
        debug!(
            "Normalized {} input chars to {} symbols",
            text.chars().count(),
            normalized.chars().count()
        );
        normalized
    }

    /// Encodes `text` after [`normalize`](Self::normalize).
    pub fn encode_folded(&self, text: &str) -> IndexSequence {
        self.encode(&self.normalize(text))
    }
}
