//! Swap Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::{bytes_to_hex, parse_address};

use crate::error::ContractError;
use crate::execute::{execute_add_chain, execute_receive, execute_redeem, execute_swap};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_current_nonce, query_is_redeemed, query_is_supported_chain,
    query_message_hash, query_supported_chains, query_swap,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, NONCE};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let token = deps.api.addr_validate(&msg.token)?;

    let validator = parse_address(&msg.validator).map_err(|e| ContractError::InvalidAddress {
        reason: format!("validator: {}", e),
    })?;
    if validator == [0u8; 20] {
        return Err(ContractError::InvalidAddress {
            reason: "validator must not be the zero address".to_string(),
        });
    }

    if msg.chain_id == 0 {
        return Err(ContractError::InvalidChain { chain_id: 0 });
    }

    let config = Config {
        admin,
        validator,
        token,
        chain_id: msg.chain_id,
    };
    CONFIG.save(deps.storage, &config)?;

    NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("validator", bytes_to_hex(&config.validator))
        .add_attribute("token", config.token)
        .add_attribute("chain_id", config.chain_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Chain registry
        ExecuteMsg::AddChain { chain_id } => execute_add_chain(deps, info, chain_id),

        // Outgoing swaps
        ExecuteMsg::Swap {
            chain_id,
            recipient,
            amount,
        } => execute_swap(deps, env, info, chain_id, recipient, amount),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),

        // Incoming redemptions
        ExecuteMsg::Redeem {
            chain_id,
            recipient,
            amount,
            nonce,
            signature,
        } => execute_redeem(deps, info, chain_id, recipient, amount, nonce, signature),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsSupportedChain { chain_id } => {
            to_json_binary(&query_is_supported_chain(deps, chain_id)?)
        }
        QueryMsg::SupportedChains { start_after, limit } => {
            to_json_binary(&query_supported_chains(deps, start_after, limit)?)
        }
        QueryMsg::CurrentNonce {} => to_json_binary(&query_current_nonce(deps)?),
        QueryMsg::Swap { nonce } => to_json_binary(&query_swap(deps, nonce)?),
        QueryMsg::IsRedeemed { chain_id, nonce } => {
            to_json_binary(&query_is_redeemed(deps, chain_id, nonce)?)
        }
        QueryMsg::MessageHash {
            chain_id,
            recipient,
            amount,
            nonce,
        } => to_json_binary(&query_message_hash(
            deps, chain_id, recipient, amount, nonce,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
