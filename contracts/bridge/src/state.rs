//! State definitions for the swap bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Instance configuration, fixed at instantiation
#[cw_serde]
pub struct Config {
    /// Admin address for chain management
    pub admin: Addr,
    /// Validator identity (Ethereum-style address of the attesting key)
    pub validator: [u8; 20],
    /// cw20 token the bridge mints and burns
    pub token: Addr,
    /// This instance's own chain id, as embedded in messages addressed to it
    pub chain_id: u64,
}

/// Outgoing swap, stored by nonce
#[cw_serde]
pub struct SwapRecord {
    /// Destination chain id
    pub chain_id: u64,
    /// Account whose tokens were burned
    pub sender: Addr,
    /// Recipient on the destination chain
    pub recipient: String,
    /// Amount burned
    pub amount: Uint128,
    /// Block time of the swap
    pub timestamp: Timestamp,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:swap-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Chains this instance swaps towards
/// Key: chain_id, Value: always true (append-only)
pub const SUPPORTED_CHAINS: Map<u64, bool> = Map::new("supported_chains");

/// Next outgoing nonce
pub const NONCE: Item<u64> = Item::new("nonce");

/// Outgoing swap records
/// Key: nonce, Value: SwapRecord
pub const SWAPS: Map<u64, SwapRecord> = Map::new("swaps");

/// Redeemed nonces
/// Key: (chain_id, nonce), Value: always true
pub const REDEEMED: Map<(u64, u64), bool> = Map::new("redeemed");
