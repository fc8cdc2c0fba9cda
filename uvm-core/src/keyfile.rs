//! Validator key file parsing and generation.
//!
//! The on-disk format is the JSON shape emitted by the validator
//! key-generation tooling:
//!
//! ```json
//! {
//!   "address": "0A6B...",
//!   "pub_key": { "type": "tendermint/PubKeyEd25519", "value": "<base64>" },
//!   "priv_key": { "type": "tendermint/PrivKeyEd25519", "value": "<base64>" }
//! }
//! ```
//!
//! Field names are fixed for interoperability with that tooling. Read,
//! parse, and decode failures each surface as distinct errors: a validator
//! must abort startup on any of them instead of running with an empty key.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::crypto::{address_from_public_key, KeyPair, PublicKey, SigningKey};
use crate::error::{Error, Result};

/// Type tag the key tooling writes for Ed25519 public keys.
pub const PUBKEY_TYPE_TAG: &str = "tendermint/PubKeyEd25519";

/// Type tag the key tooling writes for Ed25519 private keys.
pub const PRIVKEY_TYPE_TAG: &str = "tendermint/PrivKeyEd25519";

/// A tagged key value as stored in the key file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyEntry {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub value: String,
}

/// The on-disk validator key record.
///
/// Ephemeral: parsed, decoded into a [`KeyPair`], and discarded. `address`
/// is carried by the format but unused by signing logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorKeyFile {
    pub address: String,
    pub pub_key: KeyEntry,
    pub priv_key: KeyEntry,
}

/// Load a validator key pair from the key file at `path`.
///
/// The declared public key is trusted to pair with the private key; it is
/// not re-derived here (the tooling that wrote the file guarantees the
/// pairing).
pub fn load_key_pair(path: impl AsRef<Path>) -> Result<KeyPair> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|source| Error::KeyFile {
        path: path.to_path_buf(),
        source,
    })?;
    let record: ValidatorKeyFile =
        serde_json::from_slice(&raw).map_err(|err| Error::MalformedKeyFile(err.to_string()))?;
    let key_pair = key_pair_from_record(&record)?;
    debug!(
        path = %path.display(),
        key = %key_pair.public_key().fingerprint(),
        "loaded validator key file"
    );
    Ok(key_pair)
}

fn key_pair_from_record(record: &ValidatorKeyFile) -> Result<KeyPair> {
    let public_bytes = BASE64
        .decode(&record.pub_key.value)
        .map_err(|err| Error::InvalidEncoding(format!("public key is not valid base64: {err}")))?;
    let private_bytes = BASE64
        .decode(&record.priv_key.value)
        .map_err(|err| Error::InvalidEncoding(format!("private key is not valid base64: {err}")))?;

    let public = PublicKey::from_bytes(&public_bytes)?;
    let signing = SigningKey::from_private_key_bytes(&private_bytes)?;
    Ok(KeyPair::new(public, signing))
}

/// Write `signing` to `path` in the key tooling's file format.
pub fn save_key_file(path: impl AsRef<Path>, signing: &SigningKey) -> Result<()> {
    let path = path.as_ref();
    let public = signing.public_key();
    let record = ValidatorKeyFile {
        address: address_from_public_key(&public),
        pub_key: KeyEntry {
            type_tag: PUBKEY_TYPE_TAG.to_string(),
            value: public.to_base64(),
        },
        priv_key: KeyEntry {
            type_tag: PRIVKEY_TYPE_TAG.to_string(),
            value: BASE64.encode(signing.to_private_key_bytes()),
        },
    };
    let encoded = serde_json::to_string_pretty(&record)
        .map_err(|err| Error::Serialization(err.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::KeyFile {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, encoded).map_err(|source| Error::KeyFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
