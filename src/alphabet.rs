//! Alphabet: the ordered symbol set that defines the modular space.
//!
//! Symbol `i` of the alphabet is represented by index `i`; the alphabet size
//! `N` is the modulus used by the cipher engine.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VigenereError};

/// The 26 upper-case Latin letters, in order.
pub const LATIN_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered set of unique symbols.
///
/// Immutable after construction. Serializes as its symbol string and is
/// validated again when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
    lookup: HashMap<char, usize>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::build(LATIN_UPPERCASE.chars().collect())
    }
}

impl Alphabet {
    /// Creates an alphabet from the characters of `symbols`, in order.
    ///
    /// # Errors
    /// Returns [`VigenereError::EmptyAlphabet`] if `symbols` is empty and
    /// [`VigenereError::DuplicateSymbol`] if a character appears twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere::Alphabet;
    ///
    /// let binary = Alphabet::new("01").unwrap();
    /// assert_eq!(binary.len(), 2);
    /// assert!(Alphabet::new("ABA").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(VigenereError::EmptyAlphabet);
        }
        let mut seen = HashSet::with_capacity(symbols.len());
        for &symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(VigenereError::DuplicateSymbol(symbol));
            }
        }
        Ok(Self::build(symbols))
    }

    fn build(symbols: Vec<char>) -> Self {
        let lookup = symbols
            .iter()
            .enumerate()
            .map(|(index, &symbol)| (symbol, index))
            .collect();
        Alphabet { symbols, lookup }
    }

    /// Returns the index of `symbol`, or `None` if it is not in the alphabet.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.lookup.get(&symbol).copied()
    }

    /// Returns the symbol at `index`.
    ///
    /// # Errors
    /// Returns [`VigenereError::OutOfRange`] if `index >= self.len()`.
    pub fn symbol_at(&self, index: usize) -> Result<char> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(VigenereError::OutOfRange {
                index,
                size: self.symbols.len(),
            })
    }

    /// Returns true if `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.lookup.contains_key(&symbol)
    }

    /// Returns true if any symbol is an upper-case letter, i.e. upper-casing
    /// raw text can map it onto this alphabet.
    pub fn has_uppercase(&self) -> bool {
        self.symbols.iter().any(|c| c.is_uppercase())
    }

    /// Number of symbols `N`. Always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// The symbols in alphabet order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Alphabet {
    type Err = VigenereError;

    fn from_str(s: &str) -> Result<Self> {
        Alphabet::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = VigenereError;

    fn try_from(value: String) -> Result<Self> {
        Alphabet::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}
