//! Vigenère cipher engine.
//!
//! Each message index is shifted by the key index at the same position, the
//! key being repeated cyclically to the message length. A one-symbol key is
//! therefore a Caesar cipher; it goes through the same code path.
//!
//! ```text
//! plain   A  T  T  A  C  K  A  T  D  A  W  N
//! key     L  E  M  O  N  L  E  M  O  N  L  E
//! cipher  L  X  F  O  P  V  E  F  R  N  H  R
//! ```

use log::debug;

use crate::alphabet::Alphabet;
use crate::codec::{Codec, IndexSequence};
use crate::error::{Result, VigenereError};
use crate::utils::modular::{add_mod, sub_mod};

/// Repeats `key` cyclically to exactly `target_len` elements.
///
/// Element `i` of the result is `key[i % key.len()]`.
///
/// # Errors
/// Returns [`VigenereError::EmptyKey`] if `key` is empty, whatever
/// `target_len` is.
///
/// # Examples
///
/// ```
/// use vigenere::align;
///
/// assert_eq!(align(&[1, 2], 5).unwrap(), vec![1, 2, 1, 2, 1]);
/// assert!(align(&[], 5).is_err());
/// ```
pub fn align(key: &[usize], target_len: usize) -> Result<IndexSequence> {
    if key.is_empty() {
        return Err(VigenereError::EmptyKey);
    }
    Ok(key.iter().copied().cycle().take(target_len).collect())
}

/// Stateless cipher engine bound to one alphabet.
#[derive(Debug, Clone, Copy)]
pub struct Vigenere<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Vigenere<'a> {
    /// Creates an engine whose modulus is `alphabet.len()`.
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Vigenere { alphabet }
    }

    /// The alphabet this engine works over.
    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Encrypts `plain`: `result[i] = (plain[i] + k[i]) mod N` where `k` is
    /// the key aligned to the message.
    ///
    /// The result has the same length as `plain` and every element lies in
    /// `[0, N)`.
    ///
    /// # Errors
    /// Returns [`VigenereError::EmptyKey`] if `key` is empty and
    /// [`VigenereError::OutOfRange`] if `plain` or `key` holds an index
    /// `>= N`.
    pub fn encrypt(&self, plain: &[usize], key: &[usize]) -> Result<IndexSequence> {
        self.combine(plain, key, add_mod)
    }

    /// Decrypts `cipher`: `result[i] = (cipher[i] - k[i]) mod N`, always
    /// non-negative.
    ///
    /// `decrypt(encrypt(p, key), key) == p` for every `p` in `[0, N)`.
    ///
    /// # Errors
    /// Returns [`VigenereError::EmptyKey`] if `key` is empty and
    /// [`VigenereError::OutOfRange`] if `cipher` or `key` holds an index
    /// `>= N`.
    pub fn decrypt(&self, cipher: &[usize], key: &[usize]) -> Result<IndexSequence> {
        self.combine(cipher, key, sub_mod)
    }

    /// Shared body of encrypt/decrypt: align the key, then apply `op`
    /// position by position.
    fn combine(
        &self,
        message: &[usize],
        key: &[usize],
        op: fn(usize, usize, usize) -> usize,
    ) -> Result<IndexSequence> {
        let aligned = align(key, message.len())?;
        // Indices are never wrapped into range: a bad one is reported.
        for &index in message.iter().chain(key) {
            self.alphabet.symbol_at(index)?;
        }
        let n = self.alphabet.len();
        debug!(
            "Combining {} symbols with a {}-symbol key (N = {})",
            message.len(),
            key.len(),
            n
        );
        Ok(message
            .iter()
            .zip(aligned.iter())
            .map(|(&m, &k)| op(m, k, n))
            .collect())
    }

    /// Encrypts raw text under a raw key.
    ///
    /// Both strings go through [`Codec::encode`], so characters outside the
    /// alphabet are dropped from the message and from the key.
    ///
    /// # Errors
    /// Returns [`VigenereError::EmptyKey`] if the key has no alphabet
    /// symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use vigenere::{Alphabet, Vigenere};
    ///
    /// let alphabet = Alphabet::default();
    /// let engine = Vigenere::new(&alphabet);
    /// assert_eq!(
    ///     engine.encrypt_text("ATTACKATDAWN", "LEMON").unwrap(),
    ///     "LXFOPVEFRNHR"
    /// );
    /// ```
    pub fn encrypt_text(&self, plaintext: &str, key: &str) -> Result<String> {
        let codec = Codec::new(self.alphabet);
        let cipher = self.encrypt(&codec.encode(plaintext), &codec.encode(key))?;
        codec.decode(&cipher)
    }

    /// Decrypts raw text under a raw key. Inverse of
    /// [`encrypt_text`](Self::encrypt_text) on alphabet-only text.
    ///
    /// # Errors
    /// Returns [`VigenereError::EmptyKey`] if the key has no alphabet
    /// symbols.
    pub fn decrypt_text(&self, ciphertext: &str, key: &str) -> Result<String> {
        let codec = Codec::new(self.alphabet);
        let plain = self.decrypt(&codec.encode(ciphertext), &codec.encode(key))?;
        codec.decode(&plain)
    }

    /// Returns true if encrypting under `key` leaves every message
    /// unchanged, i.e. the key is non-empty and made only of the first
    /// alphabet symbol. An empty key is not a key, so it returns false.
    pub fn is_identity_key(&self, key: &[usize]) -> bool {
        !key.is_empty() && key.iter().all(|&k| k == 0)
    }
}
