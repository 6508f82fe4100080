// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{util, Homomorphic};
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::PublicKey;

use num_bigint_dig::ToBigInt;
use rand::{CryptoRng, RngCore};

impl Homomorphic for PublicKey {
    fn combine(&self, lhs: &Ciphertext, rhs: &Ciphertext) -> Result<Ciphertext> {
        let a = self.check_ciphertext(lhs)?;
        let b = self.check_ciphertext(rhs)?;

        Ok(Ciphertext::new((a * b) % &self.n_sq))
    }

    fn scale<K: ToBigInt>(&self, ciphertext: &Ciphertext, k: &K) -> Result<Ciphertext> {
        let c = self.check_ciphertext(ciphertext)?;
        let k = util::to_non_negative(k, Error::PlaintextOutOfRange)?;

        Ok(Ciphertext::new(c.modpow(&k, &self.n_sq)))
    }

    fn add_plaintext<K: ToBigInt>(&self, ciphertext: &Ciphertext, k: &K) -> Result<Ciphertext> {
        let c = self.check_ciphertext(ciphertext)?;
        let k = util::to_bounded(k, &self.n, Error::PlaintextOutOfRange)?;

        let gk = self.g.modpow(&k, &self.n_sq);
        Ok(Ciphertext::new((c * gk) % &self.n_sq))
    }

    fn negate(&self, ciphertext: &Ciphertext) -> Result<Ciphertext> {
        let c = self.check_ciphertext(ciphertext)?;
        let inv = util::mod_inverse(c, &self.n_sq)?;

        Ok(Ciphertext::new(inv))
    }

    fn subtract(&self, lhs: &Ciphertext, rhs: &Ciphertext) -> Result<Ciphertext> {
        self.check_ciphertext(lhs)?;
        let neg = self.negate(rhs)?;
        self.combine(lhs, &neg)
    }

    fn sum(&self, ciphertexts: &[Ciphertext]) -> Result<Ciphertext> {
        let (first, rest) = ciphertexts.split_first().ok_or(Error::EmptyBatch)?;

        let mut acc = self.check_ciphertext(first)?.clone();
        for ciphertext in rest {
            acc = (acc * self.check_ciphertext(ciphertext)?) % &self.n_sq;
        }

        Ok(Ciphertext::new(acc))
    }

    fn linear_combination<K: ToBigInt>(
        &self,
        ciphertexts: &[Ciphertext],
        coefficients: &[K],
    ) -> Result<Ciphertext> {
        if ciphertexts.len() != coefficients.len() {
            return Err(Error::LengthMismatch {
                left: ciphertexts.len(),
                right: coefficients.len(),
            });
        }

        let terms = ciphertexts
            .iter()
            .zip(coefficients)
            .map(|(c, k)| self.scale(c, k))
            .collect::<Result<Vec<_>>>()?;

        self.sum(&terms)
    }

    fn rerandomize_with_rng<R>(&self, ciphertext: &Ciphertext, rng: &mut R) -> Result<Ciphertext>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let c = self.check_ciphertext(ciphertext)?;
        let x = self.blinding_factor(rng)?;

        Ok(Ciphertext::new((c * x) % &self.n_sq))
    }
}
