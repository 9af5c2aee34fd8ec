//! Error types for the vigenere library.

use thiserror::Error;

/// Errors produced by the vigenere library.
///
/// Characters outside the alphabet are never an error: the codec drops them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VigenereError {
    /// The key has no symbols, so no key alignment can be produced.
    #[error("Key must contain at least 1 alphabet symbol")]
    EmptyKey,
    /// A symbol index falls outside `[0, size)`.
    #[error("Index {index} is outside the alphabet range [0, {size})")]
    OutOfRange { index: usize, size: usize },
    /// The alphabet was built from an empty symbol set.
    #[error("Alphabet must contain at least 1 symbol")]
    EmptyAlphabet,
    /// The alphabet lists the same symbol more than once.
    #[error("Alphabet symbol '{0}' appears more than once")]
    DuplicateSymbol(char),
}

/// Convenience result alias used across the crate.
pub type Result<T> = std::result::Result<T, VigenereError>;
