//! Replay ledger: the set of `(chain_id, nonce)` pairs already redeemed.
//!
//! Entries are never removed. The host chain executes one call at a time and
//! discards every write of a failed call, so `insert` followed by the mint
//! message in the same response is atomic.

use cosmwasm_std::Storage;

use crate::error::ContractError;
use crate::state::REDEEMED;

/// Whether `(chain_id, nonce)` was already redeemed.
pub fn contains(storage: &dyn Storage, chain_id: u64, nonce: u64) -> bool {
    REDEEMED.has(storage, (chain_id, nonce))
}

/// Record `(chain_id, nonce)` as redeemed, failing if it already is.
pub fn insert(storage: &mut dyn Storage, chain_id: u64, nonce: u64) -> Result<(), ContractError> {
    if contains(storage, chain_id, nonce) {
        return Err(ContractError::AlreadyRedeemed);
    }
    REDEEMED.save(storage, (chain_id, nonce), &true)?;
    Ok(())
}
