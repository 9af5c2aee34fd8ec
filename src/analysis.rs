//! Key comparison: the data behind a "letter frequency per key" chart.
//!
//! One message is encrypted under several keys and the ciphertext letter
//! frequencies are collected per key, so a rendering layer can show how a
//! key spreads (or fails to spread) the plaintext's frequency pattern.
//! Nothing here draws or prints.

use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::alphabet::Alphabet;
use crate::codec::{Codec, IndexSequence};
use crate::error::Result;
use crate::frequency::{is_round_trip, FrequencyAnalyzer, FrequencyTable};
use crate::vigenere::Vigenere;

/// Keys compared by default: a no-op key, two Caesar shifts, and two
/// Vigenère keys built from them.
pub const DEMO_KEYS: [&str; 5] = ["A", "B", "F", "BF", "BEFORE"];

/// Label used for a key that leaves the message unchanged.
pub const PLAIN_LABEL: &str = "plain";

/// Ciphertext statistics of one message under one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyProfile {
    /// Key as given by the caller.
    pub key: String,
    /// [`PLAIN_LABEL`] when the key did not change the message, else the key.
    pub label: String,
    /// The encrypted message.
    pub ciphertext: IndexSequence,
    /// Symbol counts of `ciphertext`.
    pub frequencies: FrequencyTable,
    /// True when encryption under this key left the message unchanged.
    pub plain: bool,
}

/// Result of encrypting then decrypting one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTripReport {
    /// Message reduced to alphabet symbols.
    pub plaintext: String,
    pub key: String,
    pub ciphertext: String,
    pub decrypted: String,
}

impl RoundTripReport {
    /// True when decryption reproduced the plaintext.
    pub fn recovered(&self) -> bool {
        is_round_trip(self.plaintext.as_bytes(), self.decrypted.as_bytes())
    }
}

/// Runs the engine and the frequency analyzer for one or more keys.
#[derive(Debug, Clone, Copy)]
pub struct KeyAnalyzer<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> KeyAnalyzer<'a> {
    /// Creates an analyzer over `alphabet`.
    pub fn new(alphabet: &'a Alphabet) -> Self {
        KeyAnalyzer { alphabet }
    }

    /// Encrypts `plaintext` under `key` and counts the ciphertext symbols.
    ///
    /// # Errors
    /// Returns [`VigenereError::EmptyKey`] if `key` has no alphabet symbols,
    /// and [`VigenereError::OutOfRange`] if `plaintext` holds an index
    /// `>= N`.
    ///
    /// [`VigenereError::EmptyKey`]: crate::VigenereError::EmptyKey
    /// [`VigenereError::OutOfRange`]: crate::VigenereError::OutOfRange
    pub fn profile(&self, plaintext: &[usize], key: &str) -> Result<KeyProfile> {
        let codec = Codec::new(self.alphabet);
        let engine = Vigenere::new(self.alphabet);
        let key_indices = codec.encode(key);

        let ciphertext = engine.encrypt(plaintext, &key_indices)?;
        let frequencies = FrequencyAnalyzer::new(self.alphabet).count_symbols(&ciphertext)?;

        // A key is "plain" on this message if decrypting the ciphertext
        // changes nothing.
        let redecrypted = engine.decrypt(&ciphertext, &key_indices)?;
        let plain = is_round_trip(&ciphertext, &redecrypted);
        let label = if plain {
            PLAIN_LABEL.to_string()
        } else {
            key.to_string()
        };

        debug!(
            "Profiled key {:?} over {} symbols (cipher most common: {:?})",
            key,
            plaintext.len(),
            frequencies.most_common()
        );

        Ok(KeyProfile {
            key: key.to_string(),
            label,
            ciphertext,
            frequencies,
            plain,
        })
    }

    /// Profiles `plaintext` under every key, in parallel.
    ///
    /// Results are in the same order as `keys`.
    ///
    /// # Errors
    /// Fails if any key fails (see [`profile`](Self::profile)). When several
    /// keys fail, which of their errors is returned is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere::{Alphabet, Codec, KeyAnalyzer, DEMO_KEYS};
    ///
    /// let alphabet = Alphabet::default();
    /// let plain = Codec::new(&alphabet).encode_folded("It was the best of times");
    /// let profiles = KeyAnalyzer::new(&alphabet).compare_keys(&plain, &DEMO_KEYS).unwrap();
    /// assert_eq!(profiles.len(), 5);
    /// assert_eq!(profiles[0].label, "plain");
    /// assert_eq!(profiles[4].label, "BEFORE");
    /// ```
    pub fn compare_keys<K>(&self, plaintext: &[usize], keys: &[K]) -> Result<Vec<KeyProfile>>
    where
        K: AsRef<str> + Sync,
    {
        debug!(
            "Comparing {} keys over {} symbols",
            keys.len(),
            plaintext.len()
        );
        keys.par_iter()
            .map(|key| self.profile(plaintext, key.as_ref()))
            .collect()
    }

    /// Encrypts and decrypts raw `plaintext` under `key` and reports the
    /// outcome.
    ///
    /// # Errors
    /// Returns [`VigenereError::EmptyKey`] if `key` has no alphabet symbols.
    ///
    /// [`VigenereError::EmptyKey`]: crate::VigenereError::EmptyKey
    pub fn round_trip(&self, plaintext: &str, key: &str) -> Result<RoundTripReport> {
        let codec = Codec::new(self.alphabet);
        let engine = Vigenere::new(self.alphabet);

        let plain_indices = codec.encode(plaintext);
        let ciphertext = engine.encrypt_text(plaintext, key)?;
        let decrypted = engine.decrypt_text(&ciphertext, key)?;

        let report = RoundTripReport {
            plaintext: codec.decode(&plain_indices)?,
            key: key.to_string(),
            ciphertext,
            decrypted,
        };
        if !report.recovered() {
            warn!(
                "Decryption under key {:?} produced {:?} instead of {:?}",
                report.key, report.decrypted, report.plaintext
            );
        }
        Ok(report)
    }
}
