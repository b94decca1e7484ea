//! Message types for the swap bridge contract

use common::SignatureComponents;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for chain management
    pub admin: String,
    /// Validator address (0x-prefixed, 20-byte hex) whose signatures authorize redeems
    pub validator: String,
    /// cw20 token contract; the bridge must be granted its minter role separately
    pub token: String,
    /// This instance's chain id (non-zero)
    pub chain_id: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Add a destination chain to the allow-list
    ///
    /// Authorization: Admin only
    AddChain { chain_id: u64 },

    /// Burn tokens here so `recipient` can redeem them on `chain_id`
    ///
    /// Authorization: Anyone holding tokens who granted the bridge an allowance
    /// of at least `amount` on the token contract
    Swap {
        /// Destination chain id
        chain_id: u64,
        /// Recipient address on the destination chain
        recipient: String,
        /// Amount to burn
        amount: Uint128,
    },

    /// Swap via cw20 `Send` (implements the CW20 Receiver interface)
    Receive(cw20::Cw20ReceiveMsg),

    /// Mint tokens attested by the validator
    ///
    /// Authorization: the recipient named in the message
    Redeem {
        /// Chain id the validator signed for (must be this instance's chain id)
        chain_id: u64,
        /// Recipient address (must be the caller)
        recipient: String,
        /// Amount to mint
        amount: Uint128,
        /// Nonce of the originating swap
        nonce: u64,
        /// Validator signature over the message
        signature: SignatureComponents,
    },
}

/// Message embedded in a cw20 `Send`
#[cw_serde]
pub enum ReceiveMsg {
    /// Burn the sent tokens and initiate a swap
    Swap {
        /// Destination chain id
        chain_id: u64,
        /// Recipient address on the destination chain
        recipient: String,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Instance configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Whether swaps towards `chain_id` are accepted
    #[returns(IsSupportedChainResponse)]
    IsSupportedChain { chain_id: u64 },

    /// Paginated allow-list
    #[returns(SupportedChainsResponse)]
    SupportedChains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Nonce the next swap will receive
    #[returns(NonceResponse)]
    CurrentNonce {},

    /// Stored swap record by nonce
    #[returns(Option<SwapResponse>)]
    Swap { nonce: u64 },

    /// Whether `(chain_id, nonce)` was already redeemed
    #[returns(IsRedeemedResponse)]
    IsRedeemed { chain_id: u64, nonce: u64 },

    /// Message hash and signing digest the contract reconstructs for a redeem
    #[returns(MessageHashResponse)]
    MessageHash {
        chain_id: u64,
        recipient: String,
        amount: Uint128,
        nonce: u64,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    /// 0x-prefixed validator address
    pub validator: String,
    pub token: Addr,
    pub chain_id: u64,
}

#[cw_serde]
pub struct IsSupportedChainResponse {
    pub chain_id: u64,
    pub supported: bool,
}

#[cw_serde]
pub struct SupportedChainsResponse {
    pub chains: Vec<u64>,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct SwapResponse {
    pub nonce: u64,
    pub chain_id: u64,
    pub sender: Addr,
    pub recipient: String,
    pub amount: Uint128,
    pub timestamp: Timestamp,
}

#[cw_serde]
pub struct IsRedeemedResponse {
    pub chain_id: u64,
    pub nonce: u64,
    pub redeemed: bool,
}

#[cw_serde]
pub struct MessageHashResponse {
    /// keccak256 of the packed message
    pub message_hash: Binary,
    /// personal_sign digest the validator signs
    pub signing_digest: Binary,
}
