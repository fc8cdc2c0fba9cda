//! Proposer-nonce record construction.
//!
//! The record a block proposer embeds directly in its proposed block's
//! transaction list, bypassing the mempool admission path. Validators use
//! it to agree, out-of-band from normal transactions, on the nonce of the
//! previous block's proposer.
//!
//! `sig_msg` and `nonce` are independently drawn random values: the
//! signature attests to possession of the validator's private key at
//! record-creation time and does not bind the nonce value itself.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::crypto::KeyPair;
use crate::error::{Error, Result};
use crate::wire;

/// Length in bytes of the random challenge that gets signed.
pub const SIG_MSG_LEN: usize = 8;

/// Length in bytes of the proposer nonce.
pub const NONCE_LEN: usize = 8;

/// Discriminator for the transaction kinds a proposed block carries outside
/// the mempool path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    ProposerNonce,
}

/// The detached signature block of a proposer-nonce record.
///
/// All fields are standard-base64 strings: the signer's public key, the
/// Ed25519 signature, and the exact message the signature covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSignature {
    pub pubkey: String,
    pub sig: String,
    pub sig_msg: String,
}

/// A signed proposer-nonce record, built fresh for each block proposal and
/// handed off to block assembly immediately after serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposerNonceRecord {
    pub signature: RecordSignature,
    pub nonce: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
}

impl ProposerNonceRecord {
    /// Build a record for `key_pair` using the system random source.
    pub fn build(key_pair: &KeyPair) -> Result<Self> {
        Self::build_with_rng(key_pair, &mut OsRng)
    }

    /// Build a record drawing `sig_msg` and `nonce` from `rng`.
    ///
    /// `sig_msg` is drawn and signed before `nonce` is drawn.
    pub fn build_with_rng<R>(key_pair: &KeyPair, rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        let mut sig_msg = [0u8; SIG_MSG_LEN];
        rng.try_fill_bytes(&mut sig_msg)
            .map_err(|err| Error::Entropy(err.to_string()))?;
        let sig = key_pair.sign(&sig_msg);

        let mut nonce = [0u8; NONCE_LEN];
        rng.try_fill_bytes(&mut nonce)
            .map_err(|err| Error::Entropy(err.to_string()))?;

        Ok(Self {
            signature: RecordSignature {
                pubkey: key_pair.public_key().to_base64(),
                sig: sig.to_base64(),
                sig_msg: BASE64.encode(sig_msg),
            },
            nonce: BASE64.encode(nonce),
            kind: RecordKind::ProposerNonce,
        })
    }
}

/// Build and serialize a proposer-nonce record for one block proposal.
///
/// Returns the wire bytes and their length. The block-assembly caller places
/// the bytes directly into the proposed block's transaction list, annotated
/// with the returned size, and excludes them from mempool-derived reaping.
pub fn proposer_nonce_tx(key_pair: &KeyPair) -> Result<(Vec<u8>, i64)> {
    let record = ProposerNonceRecord::build(key_pair)?;
    let bytes = wire::encode(&record)?;
    let size = bytes.len() as i64;
    Ok((bytes, size))
}
