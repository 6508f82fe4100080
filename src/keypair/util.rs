// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

use crate::{Error, Result};

/// Resample budget for p == q collisions.
pub const MAX_DISTINCT_ATTEMPTS: usize = 64;

/// Draws prime pairs from `sample` until the two primes differ.
///
/// Collisions are only plausible at toy bit lengths. Both primes are
/// resampled on every collision, and the loop gives up with
/// [`Error::InvalidKeyPair`] after [`MAX_DISTINCT_ATTEMPTS`] tries.
pub fn distinct_primes<F>(mut sample: F) -> Result<(BigUint, BigUint)>
where
    F: FnMut() -> Result<(BigUint, BigUint)>,
{
    for attempt in 1..=MAX_DISTINCT_ATTEMPTS {
        let (p, q) = sample()?;
        if p != q {
            return Ok((p, q));
        }
        tracing::debug!(attempt, "prime collision p == q, resampling both");
    }

    Err(Error::InvalidKeyPair(format!(
        "no distinct prime pair after {MAX_DISTINCT_ATTEMPTS} attempts"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retries_until_distinct() {
        let mut calls = 0;
        let (p, q) = distinct_primes(|| {
            calls += 1;
            let q = if calls < 3 { 5u32 } else { 7u32 };
            Ok((BigUint::from(5u32), BigUint::from(q)))
        })
        .unwrap();

        assert_eq!(calls, 3);
        assert_eq!(p, BigUint::from(5u32));
        assert_eq!(q, BigUint::from(7u32));
    }

    #[test]
    fn gives_up_after_bound() {
        let mut calls = 0;
        let result = distinct_primes(|| {
            calls += 1;
            Ok((BigUint::from(3u32), BigUint::from(3u32)))
        });

        assert!(matches!(result, Err(Error::InvalidKeyPair(_))));
        assert_eq!(calls, MAX_DISTINCT_ATTEMPTS);
    }

    #[test]
    fn sampler_errors_propagate() {
        let result = distinct_primes(|| Err(Error::PrimeGenerationFailed(8)));
        assert_eq!(result, Err(Error::PrimeGenerationFailed(8)));
    }
}
