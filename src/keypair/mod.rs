// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod util;

pub use util::MAX_DISTINCT_ATTEMPTS;

use crate::ciphertext::Ciphertext;
use crate::crypto::{self, Decrypt, Encrypt, Homomorphic};
use crate::error::{Error, Result};
use crate::util::rand::{generate_prime, MIN_PRIME_BITS};

use num_bigint_dig::prime::probably_prime;
use num_bigint_dig::{BigUint, ToBigInt};
use num_traits::{One, Zero};
use rand::rngs::StdRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Public parameters of the cryptosystem.
///
/// `n = pq`, `n_sq = n²` and the generator is fixed to `g = n + 1`, so the
/// whole key is determined by `n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) n_sq: BigUint,
    pub(crate) g: BigUint,
}

impl PublicKey {
    /// Construct a public key from its modulus. `g` and `n²` are derived.
    pub fn new(n: BigUint) -> Result<Self> {
        if n <= BigUint::one() {
            return Err(Error::InvalidPublicKey);
        }

        let n_sq = &n * &n;
        let g = &n + BigUint::one();

        Ok(Self { n, n_sq, g })
    }

    /// Return the public modulus `n`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Return the ciphertext modulus `n²`.
    pub fn n_sq(&self) -> &BigUint {
        &self.n_sq
    }

    /// Return the generator `g = n + 1`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Return the bit length of `n`.
    pub fn bits(&self) -> usize {
        self.n.bits()
    }

    /// Wrap a raw integer as a ciphertext under this key.
    ///
    /// Fails with [`Error::CiphertextOutOfRange`] unless `0 <= value < n²`.
    pub fn ciphertext<C: ToBigInt>(&self, value: &C) -> Result<Ciphertext> {
        let value = crypto::util::to_bounded(value, &self.n_sq, Error::CiphertextOutOfRange)?;
        Ok(Ciphertext::new(value))
    }

    /// Range check applied to every ciphertext a key consumes.
    pub(crate) fn check_ciphertext<'c>(&self, ciphertext: &'c Ciphertext) -> Result<&'c BigUint> {
        let c = ciphertext.value();
        if c >= &self.n_sq {
            return Err(Error::CiphertextOutOfRange);
        }
        Ok(c)
    }
}

/// Secret key material.
///
/// Holds `λ = (p-1)(q-1)` and `μ = λ⁻¹ mod n` for textbook decryption, plus
/// the factorization and CRT constants for [`PrivateKey::decrypt_crt`].
/// Sensitive fields are zeroized on drop.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) public_key: PublicKey,
    pub(crate) lambda: BigUint,
    pub(crate) mu: BigUint,

    pub(crate) p: BigUint,
    pub(crate) q: BigUint,
    pub(crate) p_sq: BigUint,
    pub(crate) q_sq: BigUint,

    /// `L_p(g^(p-1) mod p²)⁻¹ mod p`
    pub(crate) hp: BigUint,
    /// `L_q(g^(q-1) mod q²)⁻¹ mod q`
    pub(crate) hq: BigUint,
    /// `p⁻¹ mod q`
    pub(crate) p_inv_q: BigUint,
}

impl PrivateKey {
    /// Construct a private key from the factors of the public modulus.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPrivateKey`] if the factors are zero, equal, or do
    ///   not reconstruct `n`.
    /// - [`Error::ModularInverseNotExist`] if `gcd(λ, n) != 1`.
    pub fn new(public_key: PublicKey, p: BigUint, q: BigUint) -> Result<Self> {
        if p.is_zero() || q.is_zero() || p == q {
            return Err(Error::InvalidPrivateKey);
        }
        if &p * &q != public_key.n {
            return Err(Error::InvalidPrivateKey);
        }

        let lambda = (&p - 1u32) * (&q - 1u32);
        let mu = crypto::util::mod_inverse(&lambda, &public_key.n)?;

        let p_sq = &p * &p;
        let q_sq = &q * &q;
        let hp = crt_factor(&public_key.g, &p, &p_sq)?;
        let hq = crt_factor(&public_key.g, &q, &q_sq)?;
        let p_inv_q = crypto::util::mod_inverse(&p, &q)?;

        Ok(Self {
            public_key,
            lambda,
            mu,
            p,
            q,
            p_sq,
            q_sq,
            hp,
            hq,
            p_inv_q,
        })
    }

    /// Return a reference to the associated public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Return `λ = (p-1)(q-1)`.
    pub fn lambda(&self) -> &BigUint {
        &self.lambda
    }

    /// Return `μ = λ⁻¹ mod n`.
    pub fn mu(&self) -> &BigUint {
        &self.mu
    }
}

/// `L(g^(prime-1) mod prime²)⁻¹ mod prime`
fn crt_factor(g: &BigUint, prime: &BigUint, prime_sq: &BigUint) -> Result<BigUint> {
    let g_p = (g % prime_sq).modpow(&(prime - 1u32), prime_sq);
    let l = crypto::util::l_function(&g_p, prime, prime_sq);
    crypto::util::mod_inverse(&l, prime)
}

/// A complete key pair consisting of public and private components.
///
/// Secret material is zeroized when dropped.
#[allow(missing_debug_implementations)]
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct KeyPair {
    #[zeroize(skip)]
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Generate a key pair with default parameters (two 1024-bit primes).
    pub fn generate() -> Result<Self> {
        KeyPairBuilder::new().build()
    }

    /// Generate a key pair whose primes are `prime_bits` bits each.
    pub fn generate_with_size(prime_bits: usize) -> Result<Self> {
        KeyPairBuilder::new().prime_bits(prime_bits).build()
    }

    /// Build a key pair from known primes.
    ///
    /// Intended for fixtures and interop; `p` and `q` must be distinct primes.
    pub fn from_primes(p: BigUint, q: BigUint) -> Result<Self> {
        if p == q {
            return Err(Error::InvalidKeyPair("primes must be distinct".into()));
        }
        for factor in [&p, &q] {
            if !probably_prime(factor, 20) {
                return Err(Error::InvalidKeyPair(format!("{factor} is not prime")));
            }
        }

        Self::assemble(p, q)
    }

    fn assemble(p: BigUint, q: BigUint) -> Result<Self> {
        let public = PublicKey::new(&p * &q)?;
        let secret = PrivateKey::new(public.clone(), p, q)?;

        Ok(Self { public, secret })
    }

    /// Return the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }
}

impl Encrypt for KeyPair {
    fn encrypt_with_rng<M, R>(&self, plaintext: &M, rng: &mut R) -> Result<Ciphertext>
    where
        M: ToBigInt,
        R: RngCore + CryptoRng + ?Sized,
    {
        self.public.encrypt_with_rng(plaintext, rng)
    }
}

impl Decrypt for KeyPair {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<BigUint> {
        self.secret.decrypt(ciphertext)
    }
}

impl Homomorphic for KeyPair {
    fn combine(&self, lhs: &Ciphertext, rhs: &Ciphertext) -> Result<Ciphertext> {
        self.public.combine(lhs, rhs)
    }

    fn scale<K: ToBigInt>(&self, ciphertext: &Ciphertext, k: &K) -> Result<Ciphertext> {
        self.public.scale(ciphertext, k)
    }

    fn add_plaintext<K: ToBigInt>(&self, ciphertext: &Ciphertext, k: &K) -> Result<Ciphertext> {
        self.public.add_plaintext(ciphertext, k)
    }

    fn negate(&self, ciphertext: &Ciphertext) -> Result<Ciphertext> {
        self.public.negate(ciphertext)
    }

    fn subtract(&self, lhs: &Ciphertext, rhs: &Ciphertext) -> Result<Ciphertext> {
        self.public.subtract(lhs, rhs)
    }

    fn sum(&self, ciphertexts: &[Ciphertext]) -> Result<Ciphertext> {
        self.public.sum(ciphertexts)
    }

    fn linear_combination<K: ToBigInt>(
        &self,
        ciphertexts: &[Ciphertext],
        coefficients: &[K],
    ) -> Result<Ciphertext> {
        self.public.linear_combination(ciphertexts, coefficients)
    }

    fn rerandomize_with_rng<R>(&self, ciphertext: &Ciphertext, rng: &mut R) -> Result<Ciphertext>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        self.public.rerandomize_with_rng(ciphertext, rng)
    }
}

/// Generate a key pair with `bit_length`-bit primes, returned as separate keys.
pub fn generate_keypair(bit_length: usize) -> Result<(PrivateKey, PublicKey)> {
    let keypair = KeyPair::generate_with_size(bit_length)?;
    Ok((keypair.private_key().clone(), keypair.public_key().clone()))
}

/// Builder for generating key pairs with configurable parameters.
#[derive(Debug)]
pub struct KeyPairBuilder {
    prime_bits: usize,
}

impl KeyPairBuilder {
    /// Default size of each prime factor.
    pub const DEFAULT_PRIME_BITS: usize = 1024;

    /// Smallest prime size not flagged as weak (2048-bit modulus).
    pub const MIN_SECURE_PRIME_BITS: usize = 1024;

    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self {
            prime_bits: Self::DEFAULT_PRIME_BITS,
        }
    }

    /// Set the bit length of each prime factor.
    pub fn prime_bits(mut self, bits: usize) -> Self {
        self.prime_bits = bits;
        self
    }

    /// Generate the key pair from OS entropy.
    ///
    /// `p` and `q` are searched concurrently, each with its own OS-seeded
    /// generator.
    pub fn build(self) -> Result<KeyPair> {
        let bits = self.check_prime_bits()?;

        let (p, q) = util::distinct_primes(|| {
            let (p, q) = rayon::join(
                || generate_prime(bits, &mut StdRng::from_entropy()),
                || generate_prime(bits, &mut StdRng::from_entropy()),
            );
            Ok((p?, q?))
        })?;

        KeyPair::assemble(p, q)
    }

    /// Generate the key pair from a caller-supplied randomness source.
    ///
    /// The same seeded generator always yields the same key pair.
    pub fn build_with_rng<R>(self, rng: &mut R) -> Result<KeyPair>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let bits = self.check_prime_bits()?;

        let (p, q) = util::distinct_primes(|| {
            let p = generate_prime(bits, &mut *rng)?;
            let q = generate_prime(bits, &mut *rng)?;
            Ok((p, q))
        })?;

        KeyPair::assemble(p, q)
    }

    fn check_prime_bits(&self) -> Result<usize> {
        let bits = self.prime_bits;
        if bits < MIN_PRIME_BITS {
            return Err(Error::InvalidKeySize {
                min: MIN_PRIME_BITS,
                actual: bits,
            });
        }

        if bits < Self::MIN_SECURE_PRIME_BITS {
            tracing::warn!(
                prime_bits = bits,
                recommended = Self::MIN_SECURE_PRIME_BITS,
                "prime size is cryptographically weak"
            );
        }
        tracing::debug!(prime_bits = bits, "generating Paillier key pair");

        Ok(bits)
    }
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn fixture() -> KeyPair {
        KeyPair::from_primes(BigUint::from(13u32), BigUint::from(17u32)).unwrap()
    }

    #[test]
    fn fixed_primes_key_material() {
        let keypair = fixture();
        let public = keypair.public_key();
        let secret = keypair.private_key();

        assert_eq!(public.n(), &BigUint::from(221u32));
        assert_eq!(public.n_sq(), &BigUint::from(221u32 * 221));
        assert_eq!(public.g(), &BigUint::from(222u32));
        assert_eq!(secret.lambda(), &BigUint::from(192u32));
        assert_eq!((secret.lambda() * secret.mu()) % public.n(), BigUint::one());
        assert_eq!(secret.public_key(), public);
    }

    #[test]
    fn generated_key_invariants() {
        let keypair = KeyPair::generate_with_size(128).unwrap();
        let public = keypair.public_key();
        let secret = keypair.private_key();

        assert_ne!(secret.p, secret.q);
        assert_eq!(secret.p.bits(), 128);
        assert_eq!(secret.q.bits(), 128);
        assert!(probably_prime(&secret.p, 20));
        assert!(probably_prime(&secret.q, 20));
        assert_eq!(&secret.p * &secret.q, *public.n());
        assert_eq!(public.n_sq(), &(public.n() * public.n()));
        assert_eq!(public.g(), &(public.n() + 1u32));
        assert_eq!((secret.lambda() * secret.mu()) % public.n(), BigUint::one());
    }

    #[test]
    fn generate_keypair_returns_matching_keys() {
        let (secret, public) = generate_keypair(64).unwrap();
        assert_eq!(secret.public_key(), &public);
        assert!(public.bits() >= 127);
    }

    #[test]
    fn seeded_builder_is_reproducible() {
        let a = KeyPairBuilder::new()
            .prime_bits(64)
            .build_with_rng(&mut ChaCha20Rng::seed_from_u64(1))
            .unwrap();
        let b = KeyPairBuilder::new()
            .prime_bits(64)
            .build_with_rng(&mut ChaCha20Rng::seed_from_u64(1))
            .unwrap();
        let c = KeyPairBuilder::new()
            .prime_bits(64)
            .build_with_rng(&mut ChaCha20Rng::seed_from_u64(2))
            .unwrap();

        assert_eq!(a.public_key(), b.public_key());
        assert_ne!(a.public_key(), c.public_key());
    }

    #[test]
    fn small_prime_pool_still_yields_distinct_primes() {
        // Only 5 and 7 are 3-bit primes, so collisions happen half the time.
        for _ in 0..8 {
            let keypair = KeyPair::generate_with_size(3).unwrap();
            assert_eq!(keypair.public_key().n(), &BigUint::from(35u32));
        }
    }

    #[test]
    fn exhausted_prime_pool_is_invalid_key_pair() {
        // 3 is the only 2-bit prime, so p == q on every attempt.
        let result = KeyPair::generate_with_size(2);
        assert!(matches!(result, Err(Error::InvalidKeyPair(_))));
    }

    #[test]
    fn rejects_sub_minimum_prime_size() {
        let result = KeyPair::generate_with_size(1);
        assert!(matches!(
            result,
            Err(Error::InvalidKeySize { min: 2, actual: 1 })
        ));
    }

    #[test]
    fn from_primes_rejects_bad_input() {
        let equal = KeyPair::from_primes(BigUint::from(13u32), BigUint::from(13u32));
        assert!(matches!(equal, Err(Error::InvalidKeyPair(_))));

        let composite = KeyPair::from_primes(BigUint::from(13u32), BigUint::from(15u32));
        assert!(matches!(composite, Err(Error::InvalidKeyPair(_))));
    }

    #[test]
    fn non_invertible_lambda_is_reported() {
        // λ = 2·6 = 12 shares the factor 3 with n = 21.
        let result = KeyPair::from_primes(BigUint::from(3u32), BigUint::from(7u32));
        assert!(matches!(result, Err(Error::ModularInverseNotExist)));
    }

    #[test]
    fn private_key_must_factor_modulus() {
        let public = PublicKey::new(BigUint::from(221u32)).unwrap();
        let result = PrivateKey::new(public, BigUint::from(11u32), BigUint::from(17u32));
        assert_eq!(result.err(), Some(Error::InvalidPrivateKey));
    }

    #[test]
    fn public_key_rejects_degenerate_modulus() {
        assert_eq!(PublicKey::new(BigUint::zero()), Err(Error::InvalidPublicKey));
        assert_eq!(PublicKey::new(BigUint::one()), Err(Error::InvalidPublicKey));
    }

    #[test]
    fn ciphertext_range_validation() {
        let keypair = fixture();
        let public = keypair.public_key();

        assert!(public.ciphertext(&0u32).is_ok());
        assert!(public.ciphertext(&(221u32 * 221 - 1)).is_ok());
        assert_eq!(
            public.ciphertext(&(221u32 * 221)),
            Err(Error::CiphertextOutOfRange)
        );
        assert_eq!(public.ciphertext(&-1i64), Err(Error::CiphertextOutOfRange));
    }
}
