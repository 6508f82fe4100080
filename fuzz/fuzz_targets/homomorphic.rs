#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use paillier::{Decrypt, Encrypt, Homomorphic, KeyPair};

use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(256).unwrap());
    let n = keypair.public_key().n();

    let (m1_bytes, m2_bytes) = data.split_at(data.len() / 2);
    let m1 = BigUint::from_bytes_be(m1_bytes) % n;
    let m2 = BigUint::from_bytes_be(m2_bytes) % n;

    let c1 = keypair.encrypt(&m1).unwrap();
    let c2 = keypair.encrypt(&m2).unwrap();

    let sum = keypair.combine(&c1, &c2).unwrap();
    assert_eq!(keypair.decrypt(&sum).unwrap(), (&m1 + &m2) % n);

    let diff = keypair.subtract(&c1, &c2).unwrap();
    assert_eq!(keypair.decrypt(&diff).unwrap(), (&m1 + n - &m2) % n);

    let scaled = keypair.scale(&c1, &m2).unwrap();
    assert_eq!(keypair.decrypt(&scaled).unwrap(), (&m1 * &m2) % n);
});
