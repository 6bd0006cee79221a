// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{util, Stream};
use crate::cipher::AffineCipher;
use crate::error::{Error, Result};

/// A container for enabling incremental (streaming) decryption.
///
/// Mirrors [`Encryptor`](super::Encryptor): complete characters are
/// decrypted as soon as they arrive.
pub struct Decryptor<'a> {
    cipher: &'a AffineCipher,

    /// Trailing bytes of an incomplete UTF-8 sequence
    buffer: Vec<u8>,

    chars: usize,
    bytes: usize,

    /// First error; the stream stays failed once it is set
    failed: Option<Error>,
}

impl<'a> Decryptor<'a> {
    pub(crate) fn new(cipher: &'a AffineCipher) -> Self {
        Self {
            cipher,
            buffer: Vec::new(),
            chars: 0,
            bytes: 0,
            failed: None,
        }
    }

    fn process(&mut self, data: &[u8]) -> Result<String> {
        self.buffer.extend_from_slice(data);

        let text = util::drain_utf8(&mut self.buffer, self.bytes)?;
        let plaintext = self.cipher.decrypt_at(&text, self.chars)?;

        self.bytes += text.len();
        self.chars += text.chars().count();

        Ok(plaintext)
    }
}

impl Stream for Decryptor<'_> {
    fn update<D: AsRef<[u8]>>(&mut self, data: D) -> Result<String> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        self.process(data.as_ref())
            .inspect_err(|err| self.failed = Some(err.clone()))
    }

    fn finalize(self) -> Result<String> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        if !self.buffer.is_empty() {
            return Err(Error::InvalidUtf8 { offset: self.bytes });
        }
        Ok(String::new())
    }
}
