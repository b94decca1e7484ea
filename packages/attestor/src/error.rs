//! Error types for the attestor and co-validator

use thiserror::Error;

/// Failures while loading keys or producing attestations
#[derive(Error, Debug, PartialEq)]
pub enum AttestorError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

/// Redemption rejections, one kind per failed check
#[derive(Error, Debug, PartialEq)]
pub enum VerifyError {
    #[error("InvalidChain({chain_id})")]
    InvalidChain { chain_id: u64 },

    #[error("InvalidMessage()")]
    InvalidMessage,

    #[error("InvalidCaller({caller}, {recipient})")]
    InvalidCaller { caller: String, recipient: String },

    #[error("AlreadyRedeemed()")]
    AlreadyRedeemed,

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Mint failed: {0}")]
    Mint(#[from] LedgerError),
}

/// Token ledger failures
#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("mint of {amount} to {recipient} exceeds cap {cap}")]
    CapExceeded {
        recipient: String,
        amount: u128,
        cap: u128,
    },

    #[error("balance overflow for {0}")]
    Overflow(String),
}
