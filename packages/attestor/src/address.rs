//! Bech32 account addresses
//!
//! The bridge message carries the 20-byte payload of a bech32 address. Both
//! instances are assumed to share the address scheme, so the payload decodes
//! the same way on either side regardless of prefix.

use bech32::{self, FromBase32, ToBase32, Variant};

use crate::error::AttestorError;

/// Decode a bech32 address to raw 20 bytes
///
/// Returns (raw_bytes, hrp) where hrp is the human-readable prefix
pub fn decode(addr: &str) -> Result<([u8; 20], String), AttestorError> {
    let (hrp, data, _variant) = bech32::decode(addr)
        .map_err(|e| AttestorError::InvalidAddress(format!("{}: {}", addr, e)))?;

    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| AttestorError::InvalidAddress(format!("{}: {}", addr, e)))?;

    let bytes: [u8; 20] = bytes.as_slice().try_into().map_err(|_| {
        AttestorError::InvalidAddress(format!(
            "{}: expected 20 bytes, got {}",
            addr,
            bytes.len()
        ))
    })?;

    Ok((bytes, hrp))
}

/// Encode raw 20 bytes to a bech32 address with given prefix
pub fn encode(bytes: &[u8; 20], hrp: &str) -> Result<String, AttestorError> {
    bech32::encode(hrp, bytes.to_base32(), Variant::Bech32)
        .map_err(|e| AttestorError::InvalidAddress(format!("failed to encode: {}", e)))
}
