//! Wire format for proposer-nonce records.
//!
//! Uses CBOR (RFC 8949): a fixed, self-describing binary encoding whose map
//! keys match the record's field names, so the consensus logic that walks a
//! proposed block's transaction list can decode the record without
//! out-of-band schema knowledge.

use crate::error::{Error, Result};
use crate::record::ProposerNonceRecord;

/// Maximum allowed size of an encoded record in bytes.
///
/// A well-formed record is ~250 bytes; the cap rejects oversized input
/// before deserialization runs.
pub const MAX_RECORD_SIZE: usize = 1024;

/// Encode a record to its wire bytes.
pub fn encode(record: &ProposerNonceRecord) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    ciborium::ser::into_writer(record, &mut buf)?;
    Ok(buf)
}

/// Decode a record from wire bytes.
///
/// Returns `RecordTooLarge` if `data` exceeds [`MAX_RECORD_SIZE`]. Decoding
/// checks structure only; verifying the embedded signature is the consumer's
/// concern.
pub fn decode(data: &[u8]) -> Result<ProposerNonceRecord> {
    // Check size BEFORE attempting deserialization
    if data.len() > MAX_RECORD_SIZE {
        return Err(Error::RecordTooLarge {
            size: data.len(),
            max: MAX_RECORD_SIZE,
        });
    }

    let record: ProposerNonceRecord = ciborium::de::from_reader(data)?;
    Ok(record)
}
