//! Startup configuration for the cipher core.

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;

/// Configuration chosen once by the surrounding harness.
///
/// Deserializable from any serde format; missing fields take their defaults
/// (upper-case Latin alphabet, case folding on).
///
/// ```
/// use vigenere::CipherConfig;
///
/// let config = CipherConfig::default();
/// assert_eq!(config.alphabet.len(), 26);
/// assert!(config.fold_case);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Symbol set defining the modular space.
    pub alphabet: Alphabet,
    /// Upper-case raw text before filtering it in [`Codec::normalize`].
    ///
    /// [`Codec::normalize`]: crate::Codec::normalize
    pub fold_case: bool,
}

impl Default for CipherConfig {
    fn default() -> Self {
        CipherConfig {
            alphabet: Alphabet::default(),
            fold_case: true,
        }
    }
}

impl CipherConfig {
    /// Creates a configuration over `alphabet`.
    ///
    /// Case folding is on only when the alphabet has upper-case letters:
    /// folding text onto a lower-case alphabet such as `"abc"` would drop
    /// every symbol. Use [`with_fold_case`](Self::with_fold_case) to
    /// override.
    pub fn new(alphabet: Alphabet) -> Self {
        let fold_case = alphabet.has_uppercase();
        CipherConfig {
            alphabet,
            fold_case,
        }
    }

    /// Returns this configuration with case folding set to `fold_case`.
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }
}
