// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod util;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;
use crate::modular::{check_modulus, inverse_of, reduce};

/// Check that the multiplier `a` is usable modulo `modulus`.
///
/// Returns the inverse of `a`, which decryption needs. Must succeed before
/// any message is transformed with `a`.
///
/// ## Error
///
/// [`Error::NoInverse`] when gcd(a, modulus) ≠ 1, [`Error::InvalidModulus`]
/// when `modulus` is outside `[2, MAX_MODULUS]`.
///
/// [`Error::NoInverse`]: crate::Error::NoInverse
/// [`Error::InvalidModulus`]: crate::Error::InvalidModulus
/// [`MAX_MODULUS`]: crate::modular::MAX_MODULUS
pub fn validate_key(a: i64, modulus: usize) -> Result<usize> {
    check_modulus(modulus)?;

    inverse_of(a, modulus).inspect_err(|_| {
        tracing::debug!(modulus, "rejected multiplier without inverse");
    })
}

/// Validated affine key `(a, b)` for a fixed modulus.
///
/// Both components are stored reduced, together with the inverse of `a`.
/// Key material is zeroized on drop.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct Key {
    a: usize,
    b: usize,
    a_inv: usize,
    modulus: usize,
}

impl Key {
    /// Validate `a` and build the key.
    ///
    /// `b` is unconstrained and taken modulo `modulus`.
    pub fn new(a: i64, b: i64, modulus: usize) -> Result<Self> {
        let a_inv = validate_key(a, modulus)?;

        Ok(Self {
            a: reduce(a, modulus)?,
            b: reduce(b, modulus)?,
            a_inv,
            modulus,
        })
    }

    /// Generate a random key from an OS-seeded generator.
    pub fn generate(modulus: usize) -> Result<Self> {
        let mut rng = StdRng::from_os_rng();
        Self::generate_with_rng(&mut rng, modulus)
    }

    /// Generate a random key using `rng`.
    ///
    /// The multiplier is uniform over the units modulo `modulus` and the
    /// shift is uniform over `[0, modulus)`.
    pub fn generate_with_rng<R: Rng + ?Sized>(rng: &mut R, modulus: usize) -> Result<Self> {
        check_modulus(modulus)?;

        let a = util::random_unit(rng, modulus);
        let b = rng.random_range(0..modulus) as i64;

        Self::new(a, b, modulus)
    }

    /// Reduced multiplier.
    #[inline]
    pub fn a(&self) -> usize {
        self.a
    }

    /// Reduced shift.
    #[inline]
    pub fn b(&self) -> usize {
        self.b
    }

    /// Inverse of the multiplier.
    #[inline]
    pub fn inverse(&self) -> usize {
        self.a_inv
    }

    #[inline]
    pub fn modulus(&self) -> usize {
        self.modulus
    }

    /// Returns `true` when encryption leaves every index unchanged.
    pub fn is_identity(&self) -> bool {
        self.a == 1 && self.b == 0
    }

    // E(x) = (a·x + b) mod n, with x < n
    #[inline]
    pub(crate) fn forward(&self, x: usize) -> usize {
        let n = self.modulus as u64;
        ((self.a as u64 * x as u64 + self.b as u64) % n) as usize
    }

    // D(y) = a⁻¹·(y - b) mod n, with y < n
    #[inline]
    pub(crate) fn backward(&self, y: usize) -> usize {
        let n = self.modulus as u64;
        ((self.a_inv as u64 * ((y as u64 + n - self.b as u64) % n)) % n) as usize
    }
}
