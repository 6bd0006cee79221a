// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Modular arithmetic over the small moduli used by the cipher.
//!
//! The modulus is the alphabet size and is capped at [`MAX_MODULUS`], so
//! the product of two residues always fits in a `u64`.

use num_integer::Integer;

use crate::{Error, Result};

/// Size of the default Somoan alphabet (space plus 17 letters).
pub const SOMOAN_MODULUS: usize = 18;

/// Largest supported modulus.
pub const MAX_MODULUS: usize = u32::MAX as usize;

/// Check that `modulus` is in `[2, MAX_MODULUS]`.
pub fn check_modulus(modulus: usize) -> Result<()> {
    if (2..=MAX_MODULUS).contains(&modulus) {
        Ok(())
    } else {
        Err(Error::InvalidModulus(modulus))
    }
}

/// Canonical non-negative residue of `n` modulo `modulus`.
///
/// Always in `[0, modulus)`, including for negative `n`:
/// `reduce(-1, 18) == Ok(17)`.
///
/// ## Error
///
/// [`Error::InvalidModulus`] outside `[2, MAX_MODULUS]`.
pub fn reduce(n: i64, modulus: usize) -> Result<usize> {
    check_modulus(modulus)?;
    Ok(n.mod_floor(&(modulus as i64)) as usize)
}

/// [`reduce`] for the Somoan modulus.
#[inline]
pub fn mod18(n: i64) -> usize {
    n.mod_floor(&(SOMOAN_MODULUS as i64)) as usize
}

/// Multiplicative inverse of `a` modulo `modulus`.
///
/// Candidates `1..modulus` are searched in order and the first `i` with
/// `a·i ≡ 1` is returned. `a` is reduced first, so any representative of
/// the residue class gives the same answer.
///
/// ## Error
///
/// Fails with [`Error::NoInverse`] when gcd(a, modulus) ≠ 1, which includes
/// `a ≡ 0`, and with [`Error::InvalidModulus`] outside `[2, MAX_MODULUS]`.
pub fn inverse_of(a: i64, modulus: usize) -> Result<usize> {
    let residue = reduce(a, modulus)? as u64;
    let m = modulus as u64;
    (1..m)
        .find(|&i| (residue * i) % m == 1)
        .map(|i| i as usize)
        .ok_or(Error::NoInverse { a, modulus })
}

/// Returns `true` when gcd(a, modulus) = 1.
///
/// Always `false` for a modulus outside `[2, MAX_MODULUS]`.
#[inline]
pub fn is_coprime(a: i64, modulus: usize) -> bool {
    check_modulus(modulus).is_ok() && a.gcd(&(modulus as i64)) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNITS: [i64; 6] = [1, 5, 7, 11, 13, 17];
    const NON_UNITS: [i64; 12] = [0, 2, 3, 4, 6, 8, 9, 10, 12, 14, 15, 16];

    #[test]
    fn mod18_handles_negatives() {
        assert_eq!(mod18(-1), 17);
        assert_eq!(mod18(-18), 0);
        assert_eq!(mod18(-19), 17);
        assert_eq!(mod18(18), 0);
        assert_eq!(mod18(35), 17);
    }

    #[test]
    fn mod18_stays_in_range() {
        for n in -100..100 {
            assert!(mod18(n) < 18, "mod18({n}) out of range");
        }
        assert!(mod18(i64::MIN) < 18);
        assert!(mod18(i64::MAX) < 18);
    }

    #[test]
    fn inverse_of_units() {
        for a in UNITS {
            let inv = inverse_of(a, SOMOAN_MODULUS).unwrap();
            assert_eq!((a as usize * inv) % 18, 1, "a = {a}");
        }
        assert_eq!(inverse_of(5, 18), Ok(11));
        assert_eq!(inverse_of(17, 18), Ok(17));
    }

    #[test]
    fn inverse_of_non_units_fails() {
        for a in NON_UNITS {
            assert_eq!(
                inverse_of(a, SOMOAN_MODULUS),
                Err(Error::NoInverse { a, modulus: 18 })
            );
        }
    }

    #[test]
    fn inverse_of_unreduced_multiplier() {
        // 23 ≡ 5 and -1 ≡ 17 (mod 18)
        assert_eq!(inverse_of(23, 18), inverse_of(5, 18));
        assert_eq!(inverse_of(-1, 18), Ok(17));
        assert_eq!(
            inverse_of(20, 18),
            Err(Error::NoInverse { a: 20, modulus: 18 })
        );
    }

    #[test]
    fn prime_modulus_has_inverse_for_every_nonzero_residue() {
        for a in 1..17 {
            let inv = inverse_of(a, 17).unwrap();
            assert_eq!((a as usize * inv) % 17, 1);
        }
        assert!(inverse_of(0, 17).is_err());
    }

    #[test]
    fn degenerate_modulus_is_an_error() {
        for modulus in [0, 1] {
            assert_eq!(reduce(5, modulus), Err(Error::InvalidModulus(modulus)));
            assert_eq!(inverse_of(5, modulus), Err(Error::InvalidModulus(modulus)));
            assert!(!is_coprime(5, modulus));
        }
    }

    #[test]
    fn oversized_modulus_is_an_error() {
        let modulus = MAX_MODULUS + 1;
        assert_eq!(reduce(-1, modulus), Err(Error::InvalidModulus(modulus)));
        assert_eq!(inverse_of(3, usize::MAX), Err(Error::InvalidModulus(usize::MAX)));
        assert!(!is_coprime(1, usize::MAX));
    }

    #[test]
    fn large_modulus_does_not_overflow() {
        // MAX_MODULUS = 2³² - 1, so 2³¹·2 ≡ 1
        assert_eq!(reduce(-1, MAX_MODULUS), Ok(MAX_MODULUS - 1));
        assert_eq!(inverse_of(1 << 31, MAX_MODULUS), Ok(2));
        assert!(is_coprime(-1, MAX_MODULUS));
    }

    #[test]
    fn reduce_matches_mod18() {
        for n in -40..40 {
            assert_eq!(reduce(n, SOMOAN_MODULUS), Ok(mod18(n)));
        }
        assert_eq!(reduce(-1, 17), Ok(16));
    }

    #[test]
    fn coprime_agrees_with_inverse_search() {
        for a in -40..40 {
            assert_eq!(is_coprime(a, 18), inverse_of(a, 18).is_ok(), "a = {a}");
        }
    }
}
