// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::alphabet::Alphabet;
use crate::crypto::{util, Decrypt, Decryptor, Encrypt, Encryptor};
use crate::error::{Error, Result};
use crate::key::Key;

/// Affine cipher `E(x) = (a·x + b) mod n` over an [`Alphabet`] of size `n`.
///
/// The key is validated on construction, so every cipher value can both
/// encrypt and decrypt.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq)]
pub struct AffineCipher {
    alphabet: Alphabet,
    key: Key,
}

impl AffineCipher {
    /// Build a cipher from raw key integers.
    ///
    /// ## Error
    ///
    /// [`Error::NoInverse`] if `a` is not invertible modulo the alphabet size.
    pub fn new(alphabet: Alphabet, a: i64, b: i64) -> Result<Self> {
        let key = Key::new(a, b, alphabet.size())?;
        Ok(Self { alphabet, key })
    }

    /// Build a cipher from an existing key.
    ///
    /// ## Error
    ///
    /// [`Error::KeyMismatch`] if the key was made for another modulus.
    pub fn with_key(alphabet: Alphabet, key: Key) -> Result<Self> {
        if key.modulus() != alphabet.size() {
            return Err(Error::KeyMismatch {
                key_modulus: key.modulus(),
                alphabet_size: alphabet.size(),
            });
        }
        Ok(Self { alphabet, key })
    }

    /// Cipher over the 18-symbol Somoan alphabet (space included).
    pub fn somoan(a: i64, b: i64) -> Result<Self> {
        Self::new(Alphabet::somoan(), a, b)
    }

    pub fn builder() -> CipherBuilder {
        CipherBuilder::new()
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Create a streaming encryptor bound to this cipher.
    pub fn encryptor(&self) -> Encryptor<'_> {
        Encryptor::new(self)
    }

    /// Create a streaming decryptor bound to this cipher.
    pub fn decryptor(&self) -> Decryptor<'_> {
        Decryptor::new(self)
    }

    pub(crate) fn encrypt_at(&self, message: &str, offset: usize) -> Result<String> {
        util::transform(&self.alphabet, message, offset, |x| self.key.forward(x))
    }

    pub(crate) fn decrypt_at(&self, ciphertext: &str, offset: usize) -> Result<String> {
        util::transform(&self.alphabet, ciphertext, offset, |y| self.key.backward(y))
    }
}

impl Encrypt for AffineCipher {
    fn encrypt<M: AsRef<str>>(&self, message: M) -> Result<String> {
        self.encrypt_at(message.as_ref(), 0)
    }
}

impl Decrypt for AffineCipher {
    fn decrypt<C: AsRef<str>>(&self, ciphertext: C) -> Result<String> {
        self.decrypt_at(ciphertext.as_ref(), 0)
    }
}

/// Builder for ciphers with a chosen alphabet and key.
///
/// Without an explicit key, `build` generates a random one.
#[derive(Default)]
pub struct CipherBuilder {
    alphabet: Alphabet,
    key: Option<(i64, i64)>,
}

impl CipherBuilder {
    /// Create a builder for the 18-symbol Somoan alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Use the 17-letter alphabet; spaces pass through unchanged.
    pub fn letters_only(self) -> Self {
        self.alphabet(Alphabet::somoan_letters())
    }

    /// Set the key `(a, b)`.
    pub fn key(mut self, a: i64, b: i64) -> Self {
        self.key = Some((a, b));
        self
    }

    /// Validate the key and build the cipher.
    pub fn build(self) -> Result<AffineCipher> {
        let modulus = self.alphabet.size();
        let key = match self.key {
            Some((a, b)) => Key::new(a, b, modulus)?,
            None => Key::generate(modulus)?,
        };

        if key.is_identity() {
            tracing::warn!(modulus, "identity key: ciphertext equals plaintext");
        } else if key.a() == 1 {
            tracing::warn!(modulus, "multiplier a ≡ 1 reduces the cipher to a shift");
        }

        AffineCipher::with_key(self.alphabet, key)
    }
}
