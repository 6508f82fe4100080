// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::ops::Deref;

use num_bigint_dig::BigUint;

/// A Paillier ciphertext, an element of `[0, n²)`.
///
/// A ciphertext carries no reference to its key or to the randomness used to
/// produce it. Range checks happen when it is consumed by a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ciphertext {
    value: BigUint,
}

impl Ciphertext {
    pub fn new(value: BigUint) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_inner(self) -> BigUint {
        self.value
    }

    /// Minimal big-endian encoding of the ciphertext integer.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.value.to_bytes_be()
    }
}

impl Deref for Ciphertext {
    type Target = BigUint;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> From<T> for Ciphertext
where
    T: AsRef<[u8]>,
{
    fn from(data: T) -> Self {
        Self {
            value: BigUint::from_bytes_be(data.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_conversion() {
        let val = BigUint::from(0xDEADBEEFu64);
        let c = Ciphertext::new(val.clone());

        let bytes = c.to_bytes();
        let restored = Ciphertext::from(&bytes);

        assert_eq!(c, restored);
        assert_eq!(restored.value(), &val);
        assert_eq!(restored.into_inner(), val);
    }
}
