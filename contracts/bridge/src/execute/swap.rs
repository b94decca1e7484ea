//! Outgoing swap handlers.
//!
//! Two entry points burn the sender's tokens and allocate the next nonce:
//! `Swap` (bridge burns via an allowance the sender granted) and the cw20
//! `Send` hook (tokens already moved to the bridge, which burns its own).

use cosmwasm_std::{
    from_json, Addr, CosmosMsg, DepsMut, Env, MessageInfo, OverflowError, OverflowOperation,
    Response, StdError, Storage, Uint128,
};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::events::BridgeEvent;
use crate::hash::encode_recipient;
use crate::ledger::TokenLedger;
use crate::msg::ReceiveMsg;
use crate::state::{SwapRecord, CONFIG, NONCE, SUPPORTED_CHAINS, SWAPS};

/// Execute handler for swaps funded through a cw20 allowance
pub fn execute_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    chain_id: u64,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let ledger = TokenLedger::load(deps.storage)?;
    let burn = ledger.burn_from(&info.sender, amount)?;
    initiate_swap(deps, env, info.sender, chain_id, recipient, amount, burn)
}

/// Execute handler for cw20 `Send` into the bridge
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let ledger = TokenLedger::load(deps.storage)?;
    if info.sender != *ledger.address() {
        return Err(ContractError::UnsupportedToken {
            token: info.sender.to_string(),
        });
    }

    let sender = deps.api.addr_validate(&cw20_msg.sender)?;
    let amount = cw20_msg.amount;

    match from_json::<ReceiveMsg>(&cw20_msg.msg)? {
        ReceiveMsg::Swap {
            chain_id,
            recipient,
        } => {
            let burn = ledger.burn(amount)?;
            initiate_swap(deps, env, sender, chain_id, recipient, amount, burn)
        }
    }
}

/// Shared swap path: validate, allocate the nonce, store the record, burn.
fn initiate_swap(
    deps: DepsMut,
    env: Env,
    sender: Addr,
    chain_id: u64,
    recipient: String,
    amount: Uint128,
    burn: CosmosMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Self-loop is rejected even if an admin added the own chain id
    if chain_id == config.chain_id || !SUPPORTED_CHAINS.has(deps.storage, chain_id) {
        return Err(ContractError::InvalidChain { chain_id });
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    // Recipient must be encodable into the message the validator will sign
    encode_recipient(deps.api, &recipient)?;

    let nonce = allocate_nonce(deps.storage)?;

    SWAPS.save(
        deps.storage,
        nonce,
        &SwapRecord {
            chain_id,
            sender: sender.clone(),
            recipient: recipient.clone(),
            amount,
            timestamp: env.block.time,
        },
    )?;

    let event = BridgeEvent::SwapInitialized {
        chain_id,
        sender,
        recipient,
        amount,
        nonce,
    };

    Ok(Response::new()
        .add_message(burn)
        .add_attributes(event.into_attributes()))
}

/// Return the next nonce and advance the counter.
fn allocate_nonce(storage: &mut dyn Storage) -> Result<u64, ContractError> {
    let nonce = NONCE.load(storage)?;
    let next = nonce.checked_add(1).ok_or_else(|| {
        StdError::overflow(OverflowError::new(OverflowOperation::Add, nonce, 1))
    })?;
    NONCE.save(storage, &next)?;
    Ok(nonce)
}
