//! Message reconstruction and signer recovery
//!
//! The packed encoding itself lives in `common::message` so the attestor signs
//! exactly what this contract rebuilds. This module adds the host-chain parts:
//! turning a recipient string into its 20-byte canonical form and recovering a
//! signer through the chain's secp256k1 precompile.

use cosmwasm_std::{Addr, Api};

use common::{address_from_pubkey, SignatureComponents, ADDRESS_LEN};

use crate::error::ContractError;

/// Validate `recipient` and return it with its 20-byte canonical encoding.
pub fn encode_recipient(
    api: &dyn Api,
    recipient: &str,
) -> Result<(Addr, [u8; ADDRESS_LEN]), ContractError> {
    let addr = api
        .addr_validate(recipient)
        .map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;
    let canonical = api.addr_canonicalize(addr.as_str())?;
    let bytes: [u8; ADDRESS_LEN] =
        canonical
            .as_slice()
            .try_into()
            .map_err(|_| ContractError::InvalidAddress {
                reason: format!(
                    "expected {}-byte account address, got {} bytes",
                    ADDRESS_LEN,
                    canonical.len()
                ),
            })?;
    Ok((addr, bytes))
}

/// Recover the signer address of `digest`. `None` for any malformed signature.
pub fn recover_signer(
    api: &dyn Api,
    digest: &[u8; 32],
    signature: &SignatureComponents,
) -> Option<[u8; ADDRESS_LEN]> {
    let recovery_param = signature.recovery_param()?;
    let compact = signature.to_compact()?;
    let pubkey = api
        .secp256k1_recover_pubkey(digest, &compact, recovery_param)
        .ok()?;
    address_from_pubkey(&pubkey)
}
