// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::alphabet::{self, Alphabet};
use crate::error::{Error, Result};

/// Map every symbol of `message` through `map`, left to right.
///
/// Whitespace that is not itself a symbol is copied verbatim. Letters keep
/// the case of the input character; a space result has no case. The first
/// character outside the alphabet aborts the transform, reported at
/// `offset` plus its character position.
pub(crate) fn transform<F>(
    alphabet: &Alphabet,
    message: &str,
    offset: usize,
    map: F,
) -> Result<String>
where
    F: Fn(usize) -> usize,
{
    let mut output = String::with_capacity(message.len());

    for (position, ch) in message.chars().enumerate() {
        if ch.is_whitespace() && !alphabet.contains(ch) {
            output.push(ch);
            continue;
        }

        let index = alphabet.symbol_to_index(ch).map_err(|err| {
            tracing::debug!(position = offset + position, "rejected symbol outside alphabet");
            err.at(offset + position)
        })?;
        let symbol = alphabet.index_to_symbol(map(index))?;

        output.push(match_case(ch, symbol));
    }

    Ok(output)
}

#[inline]
fn match_case(original: char, symbol: char) -> char {
    if original.is_uppercase() {
        alphabet::to_upper(symbol).unwrap_or(symbol)
    } else {
        symbol
    }
}

/// Split off the longest valid UTF-8 prefix of `buffer` and return it.
///
/// An incomplete multi-byte sequence at the end stays in `buffer` for the
/// next chunk. `consumed` is the stream offset of `buffer[0]`, used for
/// error reporting.
pub(crate) fn drain_utf8(buffer: &mut Vec<u8>, consumed: usize) -> Result<String> {
    let valid = match std::str::from_utf8(buffer) {
        Ok(_) => buffer.len(),
        Err(err) if err.error_len().is_none() => err.valid_up_to(),
        Err(err) => {
            return Err(Error::InvalidUtf8 {
                offset: consumed + err.valid_up_to(),
            });
        }
    };

    let tail = buffer.split_off(valid);
    let complete = std::mem::replace(buffer, tail);

    String::from_utf8(complete).map_err(|err| Error::InvalidUtf8 {
        offset: consumed + err.utf8_error().valid_up_to(),
    })
}
