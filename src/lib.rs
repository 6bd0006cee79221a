// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Somoan Affine Cipher
//!
//! Affine substitution cipher over the reduced Somoan alphabet. Each symbol
//! index `x` is mapped to `(a·x + b) mod n`, where `n` is the alphabet size
//! and `a` must be coprime to `n` so that decryption
//! `a⁻¹·(y - b) mod n` exists.
//!
//! The default alphabet has 18 symbols: space (index 0) followed by
//! `a e i o u f g l m n p s t v h k r`. A 17-letter variant without space
//! is available through [`Alphabet::somoan_letters`].
//!
//! ## Security
//!
//! This is a teaching cipher. It is a monoalphabetic substitution and falls
//! to frequency analysis; do not use it to protect data.
//!
//! ## Example
//!
//! ```rust
//! use somoan_affine::{AffineCipher, Decrypt, Encrypt};
//!
//! let cipher = AffineCipher::somoan(5, 3).expect("5 is coprime to 18");
//! let message = "Talofa lava";
//!
//! let ciphertext = cipher.encrypt(message).expect("encryption failed");
//! let decrypted = cipher.decrypt(&ciphertext).expect("decryption failed");
//! assert_eq!(message, decrypted);
//! ```

mod alphabet;
mod cipher;
mod crypto;
mod error;
mod key;
pub mod modular;

pub use alphabet::*;
pub use cipher::*;
pub use crypto::{Decrypt, Decryptor, Encrypt, Encryptor, Stream};
pub use error::*;
pub use key::{validate_key, Key};
pub use modular::{inverse_of, mod18};

/// Encrypt `message` with key `(a, b)` over the 18-symbol Somoan alphabet.
///
/// The key is validated before any character is transformed.
pub fn encrypt(message: &str, a: i64, b: i64) -> Result<String> {
    AffineCipher::somoan(a, b)?.encrypt(message)
}

/// Decrypt `ciphertext` with key `(a, b)` over the 18-symbol Somoan alphabet.
pub fn decrypt(ciphertext: &str, a: i64, b: i64) -> Result<String> {
    AffineCipher::somoan(a, b)?.decrypt(ciphertext)
}
