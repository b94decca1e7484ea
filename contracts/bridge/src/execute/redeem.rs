//! Redeem handler.
//!
//! Checks run cheapest first and each failure has its own error kind:
//! 1. chain id must be this instance's own (`InvalidChain`), before any crypto
//! 2. rebuild the message from the submitted fields (`InvalidAddress` when the
//!    recipient is not a canonical 20-byte account of this chain)
//! 3. recover the signer, must equal the validator (`InvalidMessage`)
//! 4. caller must be the recipient (`InvalidCaller`)
//! 5. `(chain_id, nonce)` must not be redeemed yet (`AlreadyRedeemed`)
//! 6. record the nonce and mint in the same response

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use common::{compute_message_hash, signing_digest, SignatureComponents};

use crate::error::ContractError;
use crate::events::BridgeEvent;
use crate::hash::{encode_recipient, recover_signer};
use crate::ledger::TokenLedger;
use crate::replay;
use crate::state::CONFIG;

/// Mint tokens to `recipient` against a validator signature.
pub fn execute_redeem(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    recipient: String,
    amount: Uint128,
    nonce: u64,
    signature: SignatureComponents,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if chain_id != config.chain_id {
        return Err(ContractError::InvalidChain { chain_id });
    }

    let (recipient_addr, recipient_bytes) = encode_recipient(deps.api, &recipient)?;
    let message_hash = compute_message_hash(chain_id, &recipient_bytes, amount.u128(), nonce);
    let digest = signing_digest(&message_hash);

    match recover_signer(deps.api, &digest, &signature) {
        Some(signer) if signer == config.validator => {}
        _ => return Err(ContractError::InvalidMessage),
    }

    if info.sender != recipient_addr {
        return Err(ContractError::InvalidCaller {
            caller: info.sender.to_string(),
            recipient: recipient_addr.to_string(),
        });
    }

    replay::insert(deps.storage, chain_id, nonce)?;

    let mint = TokenLedger::new(config.token).mint(&recipient_addr, amount)?;

    let event = BridgeEvent::Redeemed {
        chain_id,
        recipient: recipient_addr,
        amount,
        nonce,
    };

    Ok(Response::new()
        .add_message(mint)
        .add_attributes(event.into_attributes()))
}
