// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{util, Encrypt};
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::PublicKey;
use crate::util::rand::sample_unit;

use num_bigint_dig::{BigUint, ToBigInt};
use rand::{CryptoRng, RngCore};

impl Encrypt for PublicKey {
    fn encrypt_with_rng<M, R>(&self, plaintext: &M, rng: &mut R) -> Result<Ciphertext>
    where
        M: ToBigInt,
        R: RngCore + CryptoRng + ?Sized,
    {
        let m = util::to_bounded(plaintext, &self.n, Error::PlaintextOutOfRange)?;

        // c = g^m · r^n mod n²
        let x = self.blinding_factor(rng)?;
        let y = self.g.modpow(&m, &self.n_sq);

        Ok(Ciphertext::new((y * x) % &self.n_sq))
    }
}

impl PublicKey {
    /// `r^n mod n²` for a fresh unit `r ∈ [1, n)`, i.e. a random encryption of zero.
    pub(crate) fn blinding_factor<R>(&self, rng: &mut R) -> Result<BigUint>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let r = sample_unit(&self.n, rng)?;
        Ok(r.modpow(&self.n, &self.n_sq))
    }
}
