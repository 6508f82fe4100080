// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! paillier-demo: checks the additive homomorphism end to end.
//!
//! Encrypts two plaintexts, combines the ciphertexts, decrypts the result and
//! compares it with the plain sum.

use anyhow::{bail, Context, Result};
use clap::Parser;
use num_bigint_dig::BigUint;
use tracing::info;
use tracing_subscriber::EnvFilter;

use paillier::oracle::add_plaintexts;
use paillier::{Decrypt, Encrypt, Homomorphic, KeyPair};

#[derive(Parser)]
#[command(name = "paillier-demo")]
#[command(about = "Verify Paillier additive homomorphism on two sample plaintexts")]
#[command(version)]
struct Args {
    /// Bit length of each prime factor (use at least 1024 outside of demos)
    #[arg(long, default_value_t = 40)]
    bits: usize,

    /// First plaintext
    #[arg(long, default_value = "70790604053396213")]
    m1: BigUint,

    /// Second plaintext
    #[arg(long, default_value = "11995564545564541")]
    m2: BigUint,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    info!(bits = args.bits, "generating key pair");
    let keypair = KeyPair::generate_with_size(args.bits).context("key generation failed")?;
    let public = keypair.public_key();
    let secret = keypair.private_key();

    println!("Private key: (lambda = {}, mu = {})", secret.lambda(), secret.mu());
    println!("Public key:  (n = {})", public.n());
    println!();

    let c1 = keypair.encrypt(&args.m1).context("encrypting m1")?;
    let c2 = keypair.encrypt(&args.m2).context("encrypting m2")?;

    let expected = add_plaintexts(&args.m1, &args.m2);
    let combined = keypair.combine(&c1, &c2).context("combining ciphertexts")?;
    let actual = keypair.decrypt(&combined).context("decrypting sum")?;

    println!("a = {expected}");
    println!("b = {actual}");

    if expected != actual {
        println!("Not OK");
        bail!("homomorphic sum does not match plaintext sum");
    }

    println!("OK");
    Ok(())
}
