// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::Rng;

use crate::modular::is_coprime;

/// Pick a multiplier uniformly from the units modulo `modulus`.
///
/// Candidates are drawn from `[1, modulus)` until one is coprime. `1` is
/// always a unit, so this terminates for any checked modulus.
pub(super) fn random_unit<R: Rng + ?Sized>(rng: &mut R, modulus: usize) -> i64 {
    loop {
        let candidate = rng.random_range(1..modulus) as i64;
        if is_coprime(candidate, modulus) {
            return candidate;
        }
    }
}
