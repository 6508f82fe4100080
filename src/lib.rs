// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Paillier Cryptosystem
//!
//! Probabilistic public-key encryption with additive homomorphism, based on
//! the decisional composite residuosity assumption for n = pq.
//!
//! Reference: [Paillier (1999), EUROCRYPT](https://link.springer.com/chapter/10.1007/3-540-48910-X_16)
//!
//! ## Security
//!
//! The scheme is semantically secure under chosen-plaintext attack only; it is
//! malleable by construction. Arithmetic is not constant-time. The private key
//! is zeroized on drop via the `zeroize` crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use paillier::{Decrypt, Encrypt, Homomorphic, KeyPair};
//! use num_bigint_dig::BigUint;
//!
//! let keypair = KeyPair::generate().expect("key generation failed");
//!
//! let c1 = keypair.encrypt(&5u32).expect("encryption failed");
//! let c2 = keypair.encrypt(&7u32).expect("encryption failed");
//! let sum = keypair.combine(&c1, &c2).expect("combine failed");
//!
//! assert_eq!(keypair.decrypt(&sum).unwrap(), BigUint::from(12u32));
//! ```

mod ciphertext;
mod crypto;
mod error;
mod keypair;
pub mod oracle;
pub mod util;

pub use ciphertext::*;
pub use crypto::{Decrypt, Encrypt, Homomorphic};
pub use error::*;
pub use keypair::*;
