// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Randomness for key generation and encryption.
//!
//! Every sampler takes its generator as an argument so callers decide where
//! entropy comes from. The crate's own defaults are OS-seeded
//! (`OsRng`, or `StdRng::from_entropy()` per worker thread).

use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::{Error, Result};

/// Small odd primes used to reject candidates before Miller-Rabin.
const SIEVE_PRIMES: &[u32] = &[
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421,
    431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
];

/// Smallest prime size the sampler accepts. Two bits is the only size that
/// admits exactly one odd prime, which is useful for exercising retry bounds.
pub const MIN_PRIME_BITS: usize = 2;

/// Candidate draws before the prime sampler reports exhaustion.
pub const MAX_PRIME_DRAWS: usize = 1 << 20;

/// Redraws of the blinding factor before encryption gives up.
pub const MAX_RANDOMNESS_DRAWS: usize = 128;

/// Sample a uniformly random probable prime of exactly `bits` bits.
///
/// Each draw is independent: the top bit is forced so the length is exact,
/// the low bit is forced so the candidate is odd, then the candidate is
/// sieved and tested with a bit-length dependent Miller-Rabin round count.
///
/// # Errors
///
/// - [`Error::InvalidKeySize`] if `bits < MIN_PRIME_BITS`.
/// - [`Error::PrimeGenerationFailed`] if no prime is found within
///   [`MAX_PRIME_DRAWS`] candidates.
pub fn generate_prime<R>(bits: usize, rng: &mut R) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if bits < MIN_PRIME_BITS {
        return Err(Error::InvalidKeySize {
            min: MIN_PRIME_BITS,
            actual: bits,
        });
    }

    let rounds = miller_rabin_rounds(bits);

    for _ in 0..MAX_PRIME_DRAWS {
        let candidate = generate_candidate(bits, rng);
        if has_small_factor(&candidate) {
            continue;
        }
        if probably_prime(&candidate, rounds) {
            return Ok(candidate);
        }
    }

    Err(Error::PrimeGenerationFailed(bits))
}

/// Draw `r` uniformly from `[0, n)`, rejecting zero.
///
/// A zero draw is reported as [`Error::ZeroRandomness`]; callers redraw.
pub(crate) fn draw_nonzero<R>(n: &BigUint, rng: &mut R) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let r = rng.gen_biguint_below(n);
    if r.is_zero() {
        return Err(Error::ZeroRandomness);
    }
    Ok(r)
}

/// Draw a blinding factor `r ∈ [1, n)` with `gcd(r, n) = 1`.
///
/// # Errors
///
/// [`Error::RandomnessExhausted`] after [`MAX_RANDOMNESS_DRAWS`] rejected
/// draws.
pub fn sample_unit<R>(n: &BigUint, rng: &mut R) -> Result<BigUint>
where
    R: RngCore + CryptoRng + ?Sized,
{
    for _ in 0..MAX_RANDOMNESS_DRAWS {
        let r = match draw_nonzero(n, rng) {
            Ok(r) => r,
            Err(Error::ZeroRandomness) => {
                tracing::trace!("zero blinding factor drawn, redrawing");
                continue;
            }
            Err(err) => return Err(err),
        };

        if r.gcd(n).is_one() {
            return Ok(r);
        }
        tracing::trace!("blinding factor shares a factor with n, redrawing");
    }

    Err(Error::RandomnessExhausted)
}

/// Random odd integer with exactly `bits` bits.
#[inline]
fn generate_candidate<R>(bits: usize, rng: &mut R) -> BigUint
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut candidate = rng.gen_biguint(bits);
    candidate |= BigUint::one() << (bits - 1);
    candidate |= BigUint::one();
    candidate
}

/// True if `n` is a proper multiple of a sieve prime.
#[inline]
fn has_small_factor(n: &BigUint) -> bool {
    for &prime in SIEVE_PRIMES {
        if (n % prime).is_zero() {
            return *n != BigUint::from(prime);
        }
    }
    false
}

/// Miller-Rabin rounds for a target error below 2^-100 (FIPS 186-4, C.3).
#[inline]
const fn miller_rabin_rounds(bits: usize) -> usize {
    match bits {
        0..=256 => 40,
        257..=512 => 15,
        513..=1024 => 10,
        1025..=2048 => 6,
        _ => 4,
    }
}
