// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigInt, BigUint, ModInverse, ToBigInt, ToBigUint};
use num_traits::Zero;

use crate::{Error, Result};

/// L(x) = (x - 1) / d
///
/// `x` is a residue modulo `modulus`. For well-formed ciphertexts `x ≡ 1 (mod d)`
/// and the division is exact. A zero residue only arises from a forged
/// ciphertext; it wraps to `modulus - 1` so decryption yields an arbitrary
/// value instead of underflowing.
#[inline]
pub fn l_function(x: &BigUint, d: &BigUint, modulus: &BigUint) -> BigUint {
    debug_assert!(!d.is_zero(), "divisor must be nonzero in L function");

    let x_minus_1 = if x.is_zero() {
        modulus - 1u32
    } else {
        x - 1u32
    };
    x_minus_1 / d
}

/// Computes the modular inverse a⁻¹ mod m.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    a.mod_inverse(m)
        .and_then(|inv| inv.to_biguint())
        .ok_or(Error::ModularInverseNotExist)
}

/// Converts a caller-supplied integer into the non-negative range `[0, bound)`.
///
/// Negative values and values `>= bound` map to `err`.
pub fn to_bounded<T: ToBigInt>(value: &T, bound: &BigUint, err: Error) -> Result<BigUint> {
    let value = to_non_negative(value, err.clone())?;
    if &value >= bound {
        return Err(err);
    }
    Ok(value)
}

/// Converts a caller-supplied integer into a `BigUint`, rejecting negatives.
pub fn to_non_negative<T: ToBigInt>(value: &T, err: Error) -> Result<BigUint> {
    value
        .to_bigint()
        .as_ref()
        .and_then(BigInt::to_biguint)
        .ok_or(err)
}
