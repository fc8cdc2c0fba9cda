//! # UVM Core
//!
//! Uncoordinated Validator Management - proposer-nonce records for block
//! proposals.
//!
//! Validators agree on the nonce of the previous block's proposer
//! out-of-band from normal transactions: each proposer embeds a signed
//! proposer-nonce record directly into its proposed block's transaction
//! list, bypassing the mempool admission path. This crate loads the
//! validator's identity from its key file and constructs those records.
//!
//! ## Key Concepts
//!
//! - **Key file**: the JSON identity file written by the validator key
//!   tooling; loaded once at startup into a [`KeyPair`].
//! - **Proposer-nonce record**: a CBOR-encoded record carrying a random
//!   nonce and a detached Ed25519 signature over an independent random
//!   challenge. The signature proves key possession at record-creation
//!   time; it does not bind the nonce value.
//!
//! ## Example
//!
//! ```rust,ignore
//! use uvm_core::{keyfile, record};
//!
//! // Once, at validator startup.
//! let key_pair = keyfile::load_key_pair("config/priv_validator_key.json")?;
//!
//! // Once per proposed block.
//! let (tx_bytes, tx_size) = record::proposer_nonce_tx(&key_pair)?;
//! block_txs.push(tx_bytes); // annotated with tx_size by block assembly
//! ```

pub mod crypto;
pub mod error;
pub mod keyfile;
pub mod record;
pub mod wire;

// Re-exports for convenience
pub use crypto::{
    KeyPair, PublicKey, Signature, SigningKey, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SEED_LEN,
    SIGNATURE_LEN,
};
pub use error::{Error, Result};
pub use keyfile::{load_key_pair, save_key_file, ValidatorKeyFile};
pub use record::{
    proposer_nonce_tx, ProposerNonceRecord, RecordKind, RecordSignature, NONCE_LEN, SIG_MSG_LEN,
};
pub use wire::MAX_RECORD_SIZE;
