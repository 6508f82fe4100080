use num_bigint_dig::BigUint;
use num_traits::One;

use paillier::oracle::add_plaintexts;
use paillier::{generate_keypair, Decrypt, Encrypt, Error, Homomorphic, KeyPair};

fn fixed_keypair() -> KeyPair {
    KeyPair::from_primes(BigUint::from(13u32), BigUint::from(17u32)).unwrap()
}

#[test]
fn fixed_primes_scenario() {
    let keypair = fixed_keypair();
    let public = keypair.public_key();

    assert_eq!(public.n(), &BigUint::from(221u32));
    assert_eq!(public.g(), &BigUint::from(222u32));
    assert_eq!(keypair.private_key().lambda(), &BigUint::from(192u32));

    let c5 = public.encrypt(&5u32).unwrap();
    let c7 = public.encrypt(&7u32).unwrap();

    let sum = public.combine(&c5, &c7).unwrap();
    assert_eq!(keypair.private_key().decrypt(&sum).unwrap(), BigUint::from(12u32));

    let scaled = public.scale(&c5, &3u32).unwrap();
    assert_eq!(keypair.private_key().decrypt(&scaled).unwrap(), BigUint::from(15u32));

    assert_eq!(public.encrypt(&221u32), Err(Error::PlaintextOutOfRange));
}

#[test]
fn every_plaintext_roundtrips_under_fixed_key() {
    let keypair = fixed_keypair();

    for m in 0u32..221 {
        let c = keypair.encrypt(&m).unwrap();
        assert_eq!(keypair.decrypt(&c).unwrap(), BigUint::from(m), "m = {m}");
        assert_eq!(keypair.private_key().decrypt_crt(&c).unwrap(), BigUint::from(m));
    }
}

#[test]
fn range_rejection() {
    let keypair = fixed_keypair();
    let public = keypair.public_key();

    assert_eq!(public.encrypt(public.n()), Err(Error::PlaintextOutOfRange));
    assert_eq!(public.encrypt(&-1i32), Err(Error::PlaintextOutOfRange));

    let at_bound = paillier::Ciphertext::new(public.n_sq().clone());
    assert_eq!(keypair.decrypt(&at_bound), Err(Error::CiphertextOutOfRange));
    assert_eq!(public.ciphertext(&-1i32), Err(Error::CiphertextOutOfRange));
}

#[test]
fn demonstration_flow() {
    let (secret, public) = generate_keypair(40).unwrap();
    assert_eq!((secret.lambda() * secret.mu()) % public.n(), BigUint::one());

    let m1 = BigUint::from(70790604053396213u64);
    let m2 = BigUint::from(11995564545564541u64);

    let combined = public
        .combine(&public.encrypt(&m1).unwrap(), &public.encrypt(&m2).unwrap())
        .unwrap();

    assert_eq!(secret.decrypt(&combined).unwrap(), add_plaintexts(&m1, &m2));
}
