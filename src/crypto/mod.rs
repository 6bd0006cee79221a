// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod decrypt;
mod encrypt;
pub(crate) mod util;

pub use decrypt::Decryptor;
pub use encrypt::Encryptor;

use crate::error::Result;

/// Encrypts a complete message.
pub trait Encrypt {
    /// Encrypt `message` symbol by symbol.
    ///
    /// ## Error
    ///
    /// Fails on the first character that is neither an alphabet symbol nor
    /// whitespace. No partial ciphertext is returned.
    fn encrypt<M: AsRef<str>>(&self, message: M) -> Result<String>;
}

/// Decrypts a complete message.
pub trait Decrypt {
    /// Recover the plaintext from `ciphertext`.
    fn decrypt<C: AsRef<str>>(&self, ciphertext: C) -> Result<String>;
}

/// Stateful interface for incremental processing.
///
/// Implementations accept input in chunks via [`update`](Stream::update)
/// and return whatever output the chunk completes. Input still buffered is
/// checked by [`finalize`](Stream::finalize). After the first error every
/// later call returns that same error.
pub trait Stream {
    /// Processes the next chunk of input bytes.
    ///
    /// May return an empty string when the chunk ends inside a multi-byte
    /// character.
    fn update<D: AsRef<[u8]>>(&mut self, data: D) -> Result<String>;

    /// Completes processing and returns any remaining output.
    fn finalize(self) -> Result<String>;
}
