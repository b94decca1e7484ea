//! Error types for the swap bridge contract
//!
//! Every variant aborts the whole call. The four redemption kinds are kept
//! apart so off-chain tooling can tell a wrong target instance from a bad
//! signature.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("InvalidCaller({caller}, {recipient})")]
    InvalidCaller { caller: String, recipient: String },

    // ========================================================================
    // Chain Errors
    // ========================================================================

    #[error("InvalidChain({chain_id})")]
    InvalidChain { chain_id: u64 },

    // ========================================================================
    // Redemption Errors
    // ========================================================================

    #[error("InvalidMessage()")]
    InvalidMessage,

    #[error("AlreadyRedeemed()")]
    AlreadyRedeemed,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Unsupported token: {token}")]
    UnsupportedToken { token: String },
}
