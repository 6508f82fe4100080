// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ground-truth helpers for checking homomorphic results.
//!
//! Nothing here touches ciphertexts or keys. The encrypted counterpart of
//! [`add_plaintexts`] is [`Homomorphic::combine`](crate::Homomorphic::combine).

use num_bigint_dig::BigUint;

/// Plain integer sum `a + b`, with no modular reduction.
///
/// Matches the decrypted result of combining `E(a)` and `E(b)` whenever
/// `a + b < n`.
pub fn add_plaintexts(a: &BigUint, b: &BigUint) -> BigUint {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_without_reduction() {
        let a = BigUint::from(70790604053396213u64);
        let b = BigUint::from(11995564545564541u64);
        assert_eq!(add_plaintexts(&a, &b), BigUint::from(82786168598960754u64));
    }
}
