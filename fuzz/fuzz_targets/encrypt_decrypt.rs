#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use paillier::{Decrypt, Encrypt, KeyPair};
use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(256).unwrap());
    let n = keypair.public_key().n();

    let plaintext = BigUint::from_bytes_be(data);

    let Ok(ciphertext) = keypair.encrypt(&plaintext) else {
        // only out-of-range plaintexts may be rejected
        assert!(&plaintext >= n);
        return;
    };
    assert!(ciphertext.value() < keypair.public_key().n_sq());

    let decrypted = keypair.decrypt(&ciphertext).unwrap();
    assert_eq!(plaintext, decrypted);

    let decrypted_crt = keypair.private_key().decrypt_crt(&ciphertext).unwrap();
    assert_eq!(plaintext, decrypted_crt);
});
