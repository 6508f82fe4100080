// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{util, Decrypt};
use crate::ciphertext::Ciphertext;
use crate::error::Result;
use crate::keypair::PrivateKey;

use num_bigint_dig::BigUint;

impl Decrypt for PrivateKey {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint> {
        let public = &self.public_key;
        let c = public.check_ciphertext(ciphertext)?;

        // m = L(c^λ mod n²) · μ mod n
        let u = c.modpow(&self.lambda, &public.n_sq);
        let l = util::l_function(&u, &public.n, &public.n_sq);

        Ok((l * &self.mu) % &public.n)
    }
}

impl PrivateKey {
    /// Decrypt via the Chinese Remainder Theorem.
    ///
    /// Works modulo `p²` and `q²` separately and recombines, which is roughly
    /// four times faster than [`Decrypt::decrypt`] and returns the same
    /// plaintext for every ciphertext produced under this key.
    pub fn decrypt_crt(&self, ciphertext: &Ciphertext) -> Result<BigUint> {
        let c = self.public_key.check_ciphertext(ciphertext)?;

        let mp = crt_residue(c, &self.p, &self.p_sq, &self.hp);
        let mq = crt_residue(c, &self.q, &self.q_sq, &self.hq);

        // m = mp + p · ((mq - mp) · p⁻¹ mod q)
        let q = &self.q;
        let diff = (&mq + q - (&mp % q)) % q;
        let h = (diff * &self.p_inv_q) % q;

        Ok(mp + &self.p * h)
    }
}

/// `m mod prime = L(c^(prime-1) mod prime²) · h mod prime`
#[inline]
fn crt_residue(c: &BigUint, prime: &BigUint, prime_sq: &BigUint, h: &BigUint) -> BigUint {
    let u = (c % prime_sq).modpow(&(prime - 1u32), prime_sq);
    (util::l_function(&u, prime, prime_sq) * h) % prime
}
