//! Validator key file generation utility.
//!
//! Generates an Ed25519 keypair and writes it as a validator key file in
//! the shape the consensus engine loads at startup.
//!
//! Usage:
//!   cargo run --bin keygen -- <key-file-path>
//!
//! Prints the derived address and public key; the private key stays in the
//! file.

use std::env;
use std::process;

use uvm_core::crypto::{address_from_public_key, SigningKey};
use uvm_core::keyfile;

fn main() {
    let args: Vec<String> = env::args().collect();
    let path = match args.get(1) {
        Some(path) => path.clone(),
        None => {
            eprintln!("usage: keygen <key-file-path>");
            process::exit(2);
        }
    };

    let signing = SigningKey::generate();
    let public = signing.public_key();
    if let Err(err) = keyfile::save_key_file(&path, &signing) {
        eprintln!("failed to write key file: {err}");
        process::exit(1);
    }

    println!("Key generated: {path}");
    println!("Address: {}", address_from_public_key(&public));
    println!("Public Key: {}", public.to_base64());
}
