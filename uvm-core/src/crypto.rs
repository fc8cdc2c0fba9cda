//! Ed25519 primitives for validator identity and record signing.
//!
//! Signatures are computed over the raw message bytes with no context
//! prefix: a proposer-nonce record embeds the exact message that was signed,
//! and the consensus engine verifies plain Ed25519 over those bytes. The
//! signing scheme here must stay byte-compatible with that verifier.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ed25519_dalek::{
    Signature as DalekSignature, Signer, SigningKey as Ed25519SigningKey, Verifier, VerifyingKey,
};
use rand::rngs::OsRng;
use secrecy::{CloneableSecret, ExposeSecret, Secret, Zeroize};
use sha2::{Digest, Sha256};

/// Length of an Ed25519 public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of an Ed25519 seed in bytes.
pub const SEED_LEN: usize = 32;

/// Length of a private key as stored by the key tooling (seed ‖ public key).
pub const PRIVATE_KEY_LEN: usize = 64;

/// Length of an Ed25519 signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// A validator's signing key.
///
/// The Ed25519 private key is wrapped in `Secret` for:
/// 1. Guaranteed zeroization on drop
/// 2. Prevention of accidental logging (Debug is redacted)
/// 3. Safe cloning (zeroizes the old memory)
#[derive(Clone)]
pub struct SigningKey {
    signing_key: Secret<SigningKeyWrapper>,
}

// Wrapper so Secret's bounds are satisfied. Zeroize is a no-op because
// ed25519-dalek 2.x SigningKey already zeroizes on Drop.
struct SigningKeyWrapper(Ed25519SigningKey);

impl Clone for SigningKeyWrapper {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl Zeroize for SigningKeyWrapper {
    fn zeroize(&mut self) {}
}

impl CloneableSecret for SigningKeyWrapper {}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("signing_key", &"***SECRET***")
            .finish()
    }
}

impl SigningKey {
    /// Generate a new random signing key.
    pub fn generate() -> Self {
        let signing_key = Ed25519SigningKey::generate(&mut OsRng);
        Self {
            signing_key: Secret::new(SigningKeyWrapper(signing_key)),
        }
    }

    /// Create a signing key from a 32-byte seed.
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let signing_key = Ed25519SigningKey::from_bytes(seed);
        Self {
            signing_key: Secret::new(SigningKeyWrapper(signing_key)),
        }
    }

    /// Create a signing key from decoded key file material.
    ///
    /// The key tooling stores private keys as 64 bytes (seed ‖ public key);
    /// a bare 32-byte seed is also accepted. Any other length is an error.
    pub fn from_private_key_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            SEED_LEN => {
                let mut seed = [0u8; SEED_LEN];
                seed.copy_from_slice(bytes);
                Ok(Self::from_seed(&seed))
            }
            PRIVATE_KEY_LEN => {
                let mut seed = [0u8; SEED_LEN];
                seed.copy_from_slice(&bytes[..SEED_LEN]);
                Ok(Self::from_seed(&seed))
            }
            actual => Err(Error::InvalidKeyLength {
                role: "private",
                actual,
            }),
        }
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Signature {
        let sig = self.signing_key.expose_secret().0.sign(message);
        Signature { inner: sig }
    }

    /// Get the public key derived from this signing key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            verifying_key: self.signing_key.expose_secret().0.verifying_key(),
        }
    }

    /// Get the private key in the key tooling's layout (seed ‖ public key).
    pub fn to_private_key_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        self.signing_key.expose_secret().0.to_keypair_bytes()
    }
}

/// A public key for verifying record signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    verifying_key: VerifyingKey,
}

impl PublicKey {
    /// Create a public key from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|_| Error::InvalidKeyLength {
            role: "public",
            actual: bytes.len(),
        })?;
        let verifying_key =
            VerifyingKey::from_bytes(&arr).map_err(|e| Error::Crypto(e.to_string()))?;
        Ok(Self { verifying_key })
    }

    /// Create a public key from a standard-base64 string.
    pub fn from_base64(s: &str) -> Result<Self> {
        let bytes = BASE64
            .decode(s)
            .map_err(|e| Error::InvalidEncoding(format!("public key is not valid base64: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Get the public key as bytes.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.verifying_key.to_bytes()
    }

    /// Get the public key as a standard-base64 string.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.to_bytes())
    }

    /// Get a short fingerprint of the public key (first 16 hex chars).
    ///
    /// Useful for diagnostics where the full key isn't needed.
    pub fn fingerprint(&self) -> String {
        let bytes = self.to_bytes();
        hex::encode(&bytes[..8])
    }

    /// Verify a detached signature against a message.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<()> {
        self.verifying_key
            .verify(message, &signature.inner)
            .map_err(|e| Error::SignatureInvalid(e.to_string()))
    }
}

/// An Ed25519 detached signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    inner: DalekSignature,
}

impl Signature {
    /// Create a signature from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; SIGNATURE_LEN] = bytes
            .try_into()
            .map_err(|_| Error::Crypto(format!("invalid signature length: {} bytes", bytes.len())))?;
        Ok(Self {
            inner: DalekSignature::from_bytes(&arr),
        })
    }

    /// Create a signature from a standard-base64 string.
    pub fn from_base64(s: &str) -> Result<Self> {
        let bytes = BASE64
            .decode(s)
            .map_err(|e| Error::InvalidEncoding(format!("signature is not valid base64: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Get the signature as bytes.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        self.inner.to_bytes()
    }

    /// Get the signature as a standard-base64 string.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.to_bytes())
    }
}

/// A validator's key pair, loaded once at startup and immutable thereafter.
///
/// The public key is the one DECLARED by the key file, not re-derived from
/// the private key: the pairing is trusted to the key tooling that wrote the
/// file.
#[derive(Debug, Clone)]
pub struct KeyPair {
    public: PublicKey,
    signing: SigningKey,
}

impl KeyPair {
    pub fn new(public: PublicKey, signing: SigningKey) -> Self {
        Self { public, signing }
    }

    /// The validator's public key as declared by its key file.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Sign a message with the validator's private key.
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing.sign(message)
    }
}

/// Derive the validator address the key tooling writes alongside the keys:
/// uppercase hex of the first 20 bytes of SHA-256 of the public key.
pub fn address_from_public_key(public_key: &PublicKey) -> String {
    let digest = Sha256::digest(public_key.to_bytes());
    hex::encode_upper(&digest[..20])
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032 §7.1 TEST 1: empty message.
    const RFC8032_T1_SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const RFC8032_T1_PUBLIC: &str =
        "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const RFC8032_T1_SIG: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
                                  5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

    // RFC 8032 §7.1 TEST 3: two-byte message af82.
    const RFC8032_T3_SEED: &str = "c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7";
    const RFC8032_T3_PUBLIC: &str =
        "fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025";
    const RFC8032_T3_SIG: &str = "6291d657deec24024827e69c3abe01a30ce548a284743a445e3680d7db5ac3ac\
                                  18ff9b538d16f290ae67f760984dc6594a7c15e9716ed28dc027beceea1ec40a";

    fn seed_from_hex(s: &str) -> [u8; SEED_LEN] {
        hex::decode(s).unwrap().try_into().unwrap()
    }

    #[test]
    fn signing_matches_rfc8032_test_1() {
        let key = SigningKey::from_seed(&seed_from_hex(RFC8032_T1_SEED));
        assert_eq!(hex::encode(key.public_key().to_bytes()), RFC8032_T1_PUBLIC);

        let sig = key.sign(b"");
        assert_eq!(hex::encode(sig.to_bytes()), RFC8032_T1_SIG);
        assert!(key.public_key().verify(b"", &sig).is_ok());
    }

    #[test]
    fn signing_matches_rfc8032_test_3() {
        let key = SigningKey::from_seed(&seed_from_hex(RFC8032_T3_SEED));
        assert_eq!(hex::encode(key.public_key().to_bytes()), RFC8032_T3_PUBLIC);

        let message = hex::decode("af82").unwrap();
        let sig = key.sign(&message);
        assert_eq!(hex::encode(sig.to_bytes()), RFC8032_T3_SIG);
        assert!(key.public_key().verify(&message, &sig).is_ok());
    }

    #[test]
    fn signing_is_deterministic() {
        let key = SigningKey::generate();
        let message = b"proposer challenge";
        assert_eq!(key.sign(message).to_bytes(), key.sign(message).to_bytes());
    }

    #[test]
    fn verify_wrong_message_fails() {
        let key = SigningKey::generate();
        let sig = key.sign(b"one message");
        assert!(key.public_key().verify(b"another message", &sig).is_err());
    }

    #[test]
    fn verify_wrong_key_fails() {
        let key1 = SigningKey::generate();
        let key2 = SigningKey::generate();
        let sig = key1.sign(b"message");
        assert!(key2.public_key().verify(b"message", &sig).is_err());
    }

    #[test]
    fn private_key_bytes_accepts_seed_and_tooling_layouts() {
        let key = SigningKey::generate();
        let full = key.to_private_key_bytes();

        let from_full = SigningKey::from_private_key_bytes(&full).unwrap();
        let from_seed = SigningKey::from_private_key_bytes(&full[..SEED_LEN]).unwrap();

        assert_eq!(
            from_full.public_key().to_bytes(),
            key.public_key().to_bytes()
        );
        assert_eq!(
            from_seed.public_key().to_bytes(),
            key.public_key().to_bytes()
        );
    }

    #[test]
    fn private_key_bytes_rejects_other_lengths() {
        let err = SigningKey::from_private_key_bytes(&[0u8; 33]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidKeyLength {
                role: "private",
                actual: 33
            }
        ));
    }

    #[test]
    fn public_key_rejects_wrong_length() {
        let err = PublicKey::from_bytes(&[0u8; 31]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidKeyLength {
                role: "public",
                actual: 31
            }
        ));
    }

    #[test]
    fn public_key_base64_roundtrip() {
        let key = SigningKey::generate().public_key();
        let restored = PublicKey::from_base64(&key.to_base64()).unwrap();
        assert_eq!(restored, key);
    }

    #[test]
    fn debug_output_redacts_private_key() {
        let key = SigningKey::generate();
        let rendered = format!("{key:?}");
        assert!(rendered.contains("***SECRET***"));
        assert!(!rendered.contains(&hex::encode(key.to_private_key_bytes())));
    }

    #[test]
    fn address_is_twenty_bytes_of_hex() {
        let key = SigningKey::generate();
        let address = address_from_public_key(&key.public_key());
        assert_eq!(address.len(), 40);
        assert!(address.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(address, address.to_uppercase());
    }
}
