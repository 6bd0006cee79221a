// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{Error, Result};

/// The 17 letters of the reduced Somoan alphabet, in index order.
pub const SOMOAN_LETTERS: [char; 17] = [
    'a', 'e', 'i', 'o', 'u', 'f', 'g', 'l', 'm', 'n', 'p', 's', 't', 'v', 'h', 'k', 'r',
];

/// Ordered symbol table mapping characters to indices and back.
///
/// Letters are matched case-insensitively; the table itself only holds
/// lowercase letters and, optionally, the plain space. The alphabet size is
/// the modulus of every cipher built on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build a custom alphabet from symbols in index order.
    ///
    /// ## Error
    ///
    /// Fails with [`Error::InvalidAlphabet`] when there are fewer than two
    /// symbols, a symbol repeats, a letter is uppercase, or a symbol is
    /// whitespace other than `' '`.
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();

        if symbols.len() < 2 {
            return Err(Error::InvalidAlphabet(format!(
                "need at least 2 symbols, got {}",
                symbols.len()
            )));
        }

        for (i, &symbol) in symbols.iter().enumerate() {
            if symbol.is_uppercase() {
                return Err(Error::InvalidAlphabet(format!(
                    "symbol '{symbol}' must be lowercase"
                )));
            }
            if symbol.is_whitespace() && symbol != ' ' {
                return Err(Error::InvalidAlphabet(format!(
                    "whitespace {symbol:?} cannot be a symbol"
                )));
            }
            if symbols[..i].contains(&symbol) {
                return Err(Error::InvalidAlphabet(format!(
                    "symbol '{symbol}' appears more than once"
                )));
            }
        }

        Ok(Self { symbols })
    }

    /// Space followed by the 17 Somoan letters: `' '` = 0, `a` = 1, …, `r` = 17.
    pub fn somoan() -> Self {
        let symbols = std::iter::once(' ').chain(SOMOAN_LETTERS).collect();
        Self { symbols }
    }

    /// The 17 Somoan letters without space: `a` = 0, …, `r` = 16.
    ///
    /// Spaces are passed through unchanged by ciphers using this alphabet.
    pub fn somoan_letters() -> Self {
        Self {
            symbols: SOMOAN_LETTERS.to_vec(),
        }
    }

    /// Number of symbols, which is also the cipher modulus.
    #[inline]
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Symbols in index order.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns `true` if `ch` (ignoring case) is a symbol.
    pub fn contains(&self, ch: char) -> bool {
        self.symbols.contains(&to_lower(ch))
    }

    /// Index of `ch`, matching letters case-insensitively.
    ///
    /// ## Error
    ///
    /// Fails with [`Error::InvalidSymbol`] (position 0) when `ch` is not in
    /// the table.
    pub fn symbol_to_index(&self, ch: char) -> Result<usize> {
        let lower = to_lower(ch);
        self.symbols
            .iter()
            .position(|&symbol| symbol == lower)
            .ok_or(Error::InvalidSymbol {
                symbol: ch,
                position: 0,
            })
    }

    /// Lowercase symbol at `index`.
    pub fn index_to_symbol(&self, index: usize) -> Result<char> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(Error::InvalidIndex {
                index,
                size: self.size(),
            })
    }
}

/// Single-character lowercase mapping; `ch` itself when the mapping
/// expands to several characters.
pub(crate) fn to_lower(ch: char) -> char {
    single(ch.to_lowercase()).unwrap_or(ch)
}

/// Uppercase form of `symbol` that folds back to it, if there is one.
pub(crate) fn to_upper(symbol: char) -> Option<char> {
    single(symbol.to_uppercase()).filter(|&upper| to_lower(upper) == symbol)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::somoan()
    }
}
