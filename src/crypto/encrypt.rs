// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{util, Stream};
use crate::cipher::AffineCipher;
use crate::error::{Error, Result};

/// A container for enabling incremental (streaming) encryption.
///
/// Input arrives as raw bytes, so a chunk may end in the middle of a UTF-8
/// sequence; those bytes are held until the next chunk completes them.
///
/// # Example
/// ```
/// use somoan_affine::{AffineCipher, Stream};
///
/// let cipher = AffineCipher::somoan(5, 3).unwrap();
/// let mut encryptor = cipher.encryptor();
///
/// let mut ciphertext = encryptor.update("talofa ").unwrap();
/// ciphertext.push_str(&encryptor.update("lava").unwrap());
/// ciphertext.push_str(&encryptor.finalize().unwrap());
/// ```
pub struct Encryptor<'a> {
    cipher: &'a AffineCipher,

    /// Trailing bytes of an incomplete UTF-8 sequence
    buffer: Vec<u8>,

    /// Characters encrypted so far
    chars: usize,

    /// Bytes consumed so far
    bytes: usize,

    /// First error; the stream stays failed once it is set
    failed: Option<Error>,
}

impl<'a> Encryptor<'a> {
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
        let ciphertext = self.cipher.encrypt_at(&text, self.chars)?;

        self.bytes += text.len();
        self.chars += text.chars().count();

        Ok(ciphertext)
    }
}

impl Stream for Encryptor<'_> {
    /// Feed more plaintext and return its ciphertext.
    ///
    /// `InvalidSymbol` positions count characters from the start of the
    /// stream.
    fn update<D: AsRef<[u8]>>(&mut self, data: D) -> Result<String> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        self.process(data.as_ref())
            .inspect_err(|err| self.failed = Some(err.clone()))
    }

    /// Finish the stream.
    ///
    /// Fails if the input ended inside a multi-byte character.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{Decrypt, Encrypt};

    fn cipher() -> AffineCipher {
        AffineCipher::somoan(7, 4).unwrap()
    }

    #[test]
    fn streaming_encrypt_single_chunk() {
        let cipher = cipher();
        let message = "Tusi lelei ia te oe";

        let mut encryptor = cipher.encryptor();
        let mut ciphertext = encryptor.update(message).unwrap();
        ciphertext.push_str(&encryptor.finalize().unwrap());

        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn streaming_encrypt_byte_by_byte() {
        let cipher = cipher();
        // ideographic space and no-break space are multi-byte whitespace
        let message = "Ua\u{3000}malie\u{a0}lava";

        let mut encryptor = cipher.encryptor();
        let mut ciphertext = String::new();
        for byte in message.bytes() {
            ciphertext.push_str(&encryptor.update([byte]).unwrap());
        }
        ciphertext.push_str(&encryptor.finalize().unwrap());

        assert_eq!(ciphertext, cipher.encrypt(message).unwrap());
        assert!(ciphertext.contains('\u{3000}'));
    }

    #[test]
    fn streaming_encrypt_empty_message() {
        let cipher = cipher();

        let mut encryptor = cipher.encryptor();
        assert_eq!(encryptor.update(b"").unwrap(), "");
        assert_eq!(encryptor.finalize().unwrap(), "");
    }

    #[test]
    fn error_position_spans_chunks() {
        let cipher = cipher();

        let mut encryptor = cipher.encryptor();
        encryptor.update("talofa ").unwrap();
        assert_eq!(
            encryptor.update("lava x"),
            Err(Error::InvalidSymbol {
                symbol: 'x',
                position: 12
            })
        );
    }

    #[test]
    fn stream_stays_failed_after_error() {
        let cipher = cipher();
        let expected = Err(Error::InvalidSymbol {
            symbol: 'x',
            position: 2,
        });

        let mut encryptor = cipher.encryptor();
        assert_eq!(encryptor.update("aex"), expected);
        assert_eq!(encryptor.update("io"), expected);
        assert_eq!(encryptor.update("b"), expected);
        assert_eq!(encryptor.finalize(), expected);
    }

    #[test]
    fn split_multibyte_is_buffered() {
        let cipher = cipher();
        // 'ā' is two bytes and not a symbol, so the error only shows once
        // both halves have arrived
        let bytes = "aā".as_bytes();

        let mut encryptor = cipher.encryptor();
        assert!(encryptor.update(&bytes[..2]).is_ok());
        assert_eq!(
            encryptor.update(&bytes[2..]),
            Err(Error::InvalidSymbol {
                symbol: 'ā',
                position: 1
            })
        );
    }

    #[test]
    fn finalize_with_truncated_sequence() {
        let cipher = cipher();

        let mut encryptor = cipher.encryptor();
        encryptor.update([b'a', 0xC4]).unwrap();
        assert_eq!(
            encryptor.finalize(),
            Err(Error::InvalidUtf8 { offset: 1 })
        );
    }

    #[test]
    fn invalid_utf8_rejected() {
        let cipher = cipher();

        let mut encryptor = cipher.encryptor();
        encryptor.update("ae").unwrap();
        assert_eq!(
            encryptor.update([0xFF]),
            Err(Error::InvalidUtf8 { offset: 2 })
        );
    }
}
