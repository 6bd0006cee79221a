// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur while encoding symbols, validating keys or
/// transforming messages.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The character '{symbol}' at position {position} is not in the alphabet")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Index {index} is outside the alphabet range [0, {size})")]
    InvalidIndex { index: usize, size: usize },

    #[error("Invalid key: a = {a} has no inverse modulo {modulus} (gcd(a, {modulus}) must be 1)")]
    NoInverse { a: i64, modulus: usize },

    #[error("Invalid modulus {0}: must be between 2 and 4294967295")]
    InvalidModulus(usize),

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Key was built for modulus {key_modulus} but the alphabet has {alphabet_size} symbols")]
    KeyMismatch {
        key_modulus: usize,
        alphabet_size: usize,
    },

    #[error("Input is not valid UTF-8 at byte offset {offset}")]
    InvalidUtf8 { offset: usize },
}

impl Error {
    /// Relocate an `InvalidSymbol` error to `position` within a message.
    ///
    /// Other variants are returned unchanged.
    pub(crate) fn at(self, position: usize) -> Self {
        match self {
            Error::InvalidSymbol { symbol, .. } => Error::InvalidSymbol { symbol, position },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_symbol() {
        let err = Error::InvalidSymbol {
            symbol: 'x',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "The character 'x' at position 3 is not in the alphabet"
        );
    }

    #[test]
    fn display_no_inverse() {
        let err = Error::NoInverse { a: 4, modulus: 18 };
        assert_eq!(
            err.to_string(),
            "Invalid key: a = 4 has no inverse modulo 18 (gcd(a, 18) must be 1)"
        );
    }

    #[test]
    fn display_invalid_modulus() {
        assert_eq!(
            Error::InvalidModulus(0).to_string(),
            "Invalid modulus 0: must be between 2 and 4294967295"
        );
    }

    #[test]
    fn at_moves_only_symbol_errors() {
        let err = Error::InvalidSymbol {
            symbol: 'b',
            position: 0,
        };
        assert_eq!(
            err.at(7),
            Error::InvalidSymbol {
                symbol: 'b',
                position: 7
            }
        );

        let err = Error::NoInverse { a: 2, modulus: 18 };
        assert_eq!(err.clone().at(7), err);
    }
}
