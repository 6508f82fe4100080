// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod decrypt;
mod encrypt;
mod homomorphic;
pub(crate) mod util;

use num_bigint_dig::{BigUint, ToBigInt};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::ciphertext::Ciphertext;
use crate::error::Result;

/// Encrypts a single plaintext integer.
pub trait Encrypt {
    /// Encrypt `plaintext` using blinding randomness drawn from `rng`.
    ///
    /// The plaintext must lie in `[0, n)`; anything else, including negative
    /// values, fails with [`Error::PlaintextOutOfRange`](crate::Error::PlaintextOutOfRange).
    fn encrypt_with_rng<M, R>(&self, plaintext: &M, rng: &mut R) -> Result<Ciphertext>
    where
        M: ToBigInt,
        R: RngCore + CryptoRng + ?Sized;

    /// Encrypt `plaintext` with randomness from the operating system.
    fn encrypt<M: ToBigInt>(&self, plaintext: &M) -> Result<Ciphertext> {
        self.encrypt_with_rng(plaintext, &mut OsRng)
    }
}

/// Decrypts a single ciphertext into its plaintext integer.
pub trait Decrypt {
    /// Recover the plaintext `m ∈ [0, n)` from a ciphertext `c ∈ [0, n²)`.
    ///
    /// A ciphertext that was not produced under the matching key decrypts to
    /// an arbitrary value; this cannot be detected.
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint>;
}

/// Operations on ciphertexts that need only the public key.
///
/// Every operand ciphertext is range-checked against `n²`. Results are
/// reduced modulo `n²`, and the plaintext relations hold modulo `n`.
pub trait Homomorphic {
    /// `E(m₁) · E(m₂) = E(m₁ + m₂)`
    fn combine(&self, lhs: &Ciphertext, rhs: &Ciphertext) -> Result<Ciphertext>;

    /// `E(m)^k = E(k · m)` for any non-negative `k`.
    fn scale<K: ToBigInt>(&self, ciphertext: &Ciphertext, k: &K) -> Result<Ciphertext>;

    /// `E(m) · g^k = E(m + k)` for a plaintext `k ∈ [0, n)`.
    fn add_plaintext<K: ToBigInt>(&self, ciphertext: &Ciphertext, k: &K) -> Result<Ciphertext>;

    /// `E(m)⁻¹ = E(-m)`
    fn negate(&self, ciphertext: &Ciphertext) -> Result<Ciphertext>;

    /// `E(m₁) · E(m₂)⁻¹ = E(m₁ - m₂)`
    fn subtract(&self, lhs: &Ciphertext, rhs: &Ciphertext) -> Result<Ciphertext>;

    /// Fold [`Homomorphic::combine`] over a non-empty slice.
    fn sum(&self, ciphertexts: &[Ciphertext]) -> Result<Ciphertext>;

    /// `∏ E(mᵢ)^kᵢ = E(Σ kᵢ · mᵢ)`
    fn linear_combination<K: ToBigInt>(
        &self,
        ciphertexts: &[Ciphertext],
        coefficients: &[K],
    ) -> Result<Ciphertext>;

    /// Multiply by a fresh encryption of zero drawn from `rng`.
    ///
    /// The result decrypts to the same plaintext but is unlinkable to the input.
    fn rerandomize_with_rng<R>(&self, ciphertext: &Ciphertext, rng: &mut R) -> Result<Ciphertext>
    where
        R: RngCore + CryptoRng + ?Sized;

    /// [`Homomorphic::rerandomize_with_rng`] with randomness from the operating system.
    fn rerandomize(&self, ciphertext: &Ciphertext) -> Result<Ciphertext> {
        self.rerandomize_with_rng(ciphertext, &mut OsRng)
    }
}
