// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur during cryptographic operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid key size: primes must be at least {min} bits, got {actual}")]
    InvalidKeySize { min: usize, actual: usize },

    #[error("Invalid key pair: {0}")]
    InvalidKeyPair(String),

    #[error("Prime sampler exhausted while searching for a {0}-bit prime")]
    PrimeGenerationFailed(usize),

    #[error("Modular inverse does not exist")]
    ModularInverseNotExist,

    #[error("Plaintext is outside the range [0, n)")]
    PlaintextOutOfRange,

    #[error("Ciphertext is outside the range [0, n²)")]
    CiphertextOutOfRange,

    /// Internal only: a zero blinding factor is redrawn and never surfaced.
    #[error("Randomness source produced zero")]
    ZeroRandomness,

    #[error("Could not draw a blinding factor coprime to n")]
    RandomnessExhausted,

    #[error("Invalid public key")]
    InvalidPublicKey,

    #[error("Invalid private key")]
    InvalidPrivateKey,

    #[error("Empty list provided for batch operation")]
    EmptyBatch,

    #[error("Mismatched lengths: {left} ciphertexts, {right} coefficients")]
    LengthMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
