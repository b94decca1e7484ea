//! Canonical redemption message and signing digest
//!
//! The validator signs the same bytes an EVM bridge would build with
//! `keccak256(abi.encodePacked(uint256 chainId, address recipient, uint256 amount, uint256 nonce))`
//! and then wraps with the `personal_sign` prefix. Both stages must match byte
//! for byte or signatures produced by standard wallets never recover.
//!
//! # Byte Layout (116 bytes total)
//! - Bytes 0-31:   chainId (uint256, big-endian, left-padded)
//! - Bytes 32-51:  recipient (20-byte canonical address, packed)
//! - Bytes 52-83:  amount (uint256, big-endian, left-padded)
//! - Bytes 84-115: nonce (uint256, big-endian, left-padded)

use tiny_keccak::{Hasher, Keccak};

/// Packed message length
pub const MESSAGE_LEN: usize = 32 + ADDRESS_LEN + 32 + 32;

/// Canonical address length carried in the message
pub const ADDRESS_LEN: usize = 20;

/// Prefix applied by `personal_sign` to a 32-byte payload
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Pack the redemption tuple into its canonical 116-byte form.
pub fn encode_message(
    chain_id: u64,
    recipient: &[u8; ADDRESS_LEN],
    amount: u128,
    nonce: u64,
) -> [u8; MESSAGE_LEN] {
    let mut data = [0u8; MESSAGE_LEN];

    // u64 chain id occupies the last 8 bytes of its 32-byte word
    data[24..32].copy_from_slice(&chain_id.to_be_bytes());

    // address is packed, no padding
    data[32..52].copy_from_slice(recipient);

    // u128 amount occupies the last 16 bytes of its word
    data[52 + 16..84].copy_from_slice(&amount.to_be_bytes());

    data[84 + 24..MESSAGE_LEN].copy_from_slice(&nonce.to_be_bytes());

    data
}

/// keccak256 of the canonical message.
pub fn compute_message_hash(
    chain_id: u64,
    recipient: &[u8; ADDRESS_LEN],
    amount: u128,
    nonce: u64,
) -> [u8; 32] {
    keccak256(&encode_message(chain_id, recipient, amount, nonce))
}

/// Digest that is actually signed: `keccak256(prefix || message_hash)`.
pub fn signing_digest(message_hash: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 28 + 32];
    data[..28].copy_from_slice(ETH_SIGNED_MESSAGE_PREFIX);
    data[28..].copy_from_slice(message_hash);
    keccak256(&data)
}

/// Derive an Ethereum-style address from a 65-byte uncompressed public key.
///
/// Returns `None` when the key is not in uncompressed SEC1 form.
pub fn address_from_pubkey(pubkey: &[u8]) -> Option<[u8; ADDRESS_LEN]> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return None;
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; ADDRESS_LEN];
    address.copy_from_slice(&hash[12..]);
    Some(address)
}

/// Format bytes as a 0x-prefixed lowercase hex string (for attributes/logging)
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a hex address (with or without 0x prefix) into 20 bytes
pub fn parse_address(value: &str) -> Result<[u8; ADDRESS_LEN], &'static str> {
    let value = value.strip_prefix("0x").unwrap_or(value);
    if value.len() != ADDRESS_LEN * 2 {
        return Err("Invalid address length: expected 40 hex characters");
    }

    let mut address = [0u8; ADDRESS_LEN];
    hex::decode_to_slice(value, &mut address).map_err(|_| "Invalid hex character")?;
    Ok(address)
}
