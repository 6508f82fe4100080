#![no_main]

use libfuzzer_sys::fuzz_target;
use paillier::{Ciphertext, Decrypt, Error, KeyPair};
use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

// Forged ciphertexts must never panic: in range they decrypt to some value
// below n, out of range they are rejected.
fuzz_target!(|data: &[u8]| {
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(128).unwrap());
    let public = keypair.public_key();

    let ciphertext = Ciphertext::from(data);

    match keypair.decrypt(&ciphertext) {
        Ok(m) => assert!(&m < public.n()),
        Err(err) => {
            assert_eq!(err, Error::CiphertextOutOfRange);
            assert!(ciphertext.value() >= public.n_sq());
        }
    }
});
