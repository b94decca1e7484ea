//! Query handlers for the swap bridge contract.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use common::{bytes_to_hex, compute_message_hash, signing_digest};

use crate::hash::encode_recipient;
use crate::msg::{
    ConfigResponse, IsRedeemedResponse, IsSupportedChainResponse, MessageHashResponse,
    NonceResponse, SupportedChainsResponse, SwapResponse,
};
use crate::replay;
use crate::state::{CONFIG, NONCE, SUPPORTED_CHAINS, SWAPS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

// ============================================================================
// Configuration
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        validator: bytes_to_hex(&config.validator),
        token: config.token,
        chain_id: config.chain_id,
    })
}

// ============================================================================
// Chain Registry
// ============================================================================

pub fn query_is_supported_chain(deps: Deps, chain_id: u64) -> StdResult<IsSupportedChainResponse> {
    Ok(IsSupportedChainResponse {
        chain_id,
        supported: SUPPORTED_CHAINS.has(deps.storage, chain_id),
    })
}

/// Query paginated list of supported chain ids, ascending.
pub fn query_supported_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<SupportedChainsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let chains = SUPPORTED_CHAINS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;

    Ok(SupportedChainsResponse { chains })
}

// ============================================================================
// Swaps & Redemptions
// ============================================================================

pub fn query_current_nonce(deps: Deps) -> StdResult<NonceResponse> {
    let nonce = NONCE.load(deps.storage)?;
    Ok(NonceResponse { nonce })
}

/// Query an outgoing swap by its nonce.
pub fn query_swap(deps: Deps, nonce: u64) -> StdResult<Option<SwapResponse>> {
    let record = SWAPS.may_load(deps.storage, nonce)?;
    Ok(record.map(|r| SwapResponse {
        nonce,
        chain_id: r.chain_id,
        sender: r.sender,
        recipient: r.recipient,
        amount: r.amount,
        timestamp: r.timestamp,
    }))
}

pub fn query_is_redeemed(deps: Deps, chain_id: u64, nonce: u64) -> StdResult<IsRedeemedResponse> {
    Ok(IsRedeemedResponse {
        chain_id,
        nonce,
        redeemed: replay::contains(deps.storage, chain_id, nonce),
    })
}

/// Compute the hash and digest a redeem with these fields must be signed over.
///
/// Lets operators check their signer against the contract's own encoding.
pub fn query_message_hash(
    deps: Deps,
    chain_id: u64,
    recipient: String,
    amount: Uint128,
    nonce: u64,
) -> StdResult<MessageHashResponse> {
    let (_, recipient_bytes) = encode_recipient(deps.api, &recipient)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let message_hash = compute_message_hash(chain_id, &recipient_bytes, amount.u128(), nonce);
    let digest = signing_digest(&message_hash);

    Ok(MessageHashResponse {
        message_hash: Binary::from(message_hash.to_vec()),
        signing_digest: Binary::from(digest.to_vec()),
    })
}
