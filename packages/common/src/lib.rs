//! Common - Message Encoding and Signature Types for the Swap Bridge
//!
//! This package is shared by the on-chain bridge contract and the off-chain
//! attestor so that both sides build the signed message from the same code.

pub mod message;
pub mod signature;

pub use message::{
    address_from_pubkey, bytes_to_hex, compute_message_hash, encode_message, keccak256,
    parse_address, signing_digest, ADDRESS_LEN,
};
pub use signature::SignatureComponents;
