//! Vigenère cipher engine with letter-frequency analysis.
//!
//! Text is encoded into the index space of a fixed, ordered alphabet, shifted
//! position by position by a repeating key (modulo the alphabet size), and
//! the result is summarized as per-symbol frequency tables. The crate is
//! meant for showing how the cipher leaks the plaintext's statistics; it
//! offers no security.
//!
//! # Architecture
//!
//! ```text
//! Alphabet           (ordered symbol set, size N is the modulus)
//!     ↓
//! Codec              (text ↔ index sequences, drops foreign characters)
//!     ↓
//! Vigenere           (key alignment + modular add / subtract)
//!     ↓
//! FrequencyAnalyzer  (complete, zero-filled symbol counts)
//!     ↓
//! KeyAnalyzer        (one message under many keys, in parallel)
//! ```
//!
//! Every component borrows the alphabet it was built with; nothing is
//! global, so alternate alphabets are a constructor argument away.
//!
//! # Examples
//!
//! Encrypt and decrypt with the classic `LEMON` key:
//!
//! ```
//! use vigenere::{Alphabet, Codec, Vigenere};
//!
//! let alphabet = Alphabet::default();
//! let codec = Codec::new(&alphabet);
//! let engine = Vigenere::new(&alphabet);
//!
//! let plain = codec.encode("ATTACK AT DAWN");
//! let key = codec.encode("LEMON");
//!
//! let cipher = engine.encrypt(&plain, &key).unwrap();
//! assert_eq!(codec.decode(&cipher).unwrap(), "LXFOPVEFRNHR");
//!
//! let recovered = engine.decrypt(&cipher, &key).unwrap();
//! assert_eq!(recovered, plain);
//! ```
//!
//! Count ciphertext letters for a chart:
//!
//! ```
//! use vigenere::{Alphabet, Codec, FrequencyAnalyzer, Vigenere};
//!
//! let alphabet = Alphabet::default();
//! let codec = Codec::new(&alphabet);
//! let cipher = Vigenere::new(&alphabet)
//!     .encrypt(&codec.encode("EEEE"), &codec.encode("B"))
//!     .unwrap();
//!
//! let table = FrequencyAnalyzer::new(&alphabet).count_symbols(&cipher).unwrap();
//! assert_eq!(table.len(), 26);
//! assert_eq!(table.get('F'), Some(4));
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod analysis;
mod codec;
mod config;
mod frequency;
pub(crate) mod utils;
mod vigenere;

pub use alphabet::{Alphabet, LATIN_UPPERCASE};
pub use analysis::{KeyAnalyzer, KeyProfile, RoundTripReport, DEMO_KEYS, PLAIN_LABEL};
pub use codec::{Codec, IndexSequence};
pub use config::CipherConfig;
pub use error::{Result, VigenereError};
pub use frequency::{is_round_trip, FrequencyAnalyzer, FrequencyTable};
pub use vigenere::{align, Vigenere};
