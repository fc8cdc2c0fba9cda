//! Error types for the UVM proposer-nonce component.
//!
//! Every fallible step reports a distinct, inspectable error. Key loading
//! failures are fatal to validator startup: a validator must abort rather
//! than proceed with an empty or partial key, so nothing here synthesizes a
//! fallback value. None of these conditions is transient, and there is no
//! retry policy.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for UVM operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Key file missing, unreadable, or permission-denied.
    #[error("failed to access key file {path}: {source}")]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key file contents did not parse into the expected structure.
    #[error("malformed key file: {0}")]
    MalformedKeyFile(String),

    /// A key value field is not valid base64.
    #[error("invalid key encoding: {0}")]
    InvalidEncoding(String),

    /// Key material has the wrong length for the signing scheme.
    #[error("invalid {role} key length: {actual} bytes")]
    InvalidKeyLength { role: &'static str, actual: usize },

    /// Cryptographic material could not be interpreted.
    #[error("cryptographic error: {0}")]
    Crypto(String),

    /// Signature verification failed.
    #[error("signature verification failed: {0}")]
    SignatureInvalid(String),

    /// The random source failed to produce bytes.
    #[error("entropy source failure: {0}")]
    Entropy(String),

    /// Record could not be serialized to the wire format.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Wire bytes could not be deserialized into a record.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Encoded record exceeds the wire size cap.
    #[error("record size {size} bytes exceeds maximum {max} bytes")]
    RecordTooLarge { size: usize, max: usize },
}

impl From<ciborium::ser::Error<std::io::Error>> for Error {
    fn from(e: ciborium::ser::Error<std::io::Error>) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<ciborium::de::Error<std::io::Error>> for Error {
    fn from(e: ciborium::de::Error<std::io::Error>) -> Self {
        Error::Deserialization(e.to_string())
    }
}
