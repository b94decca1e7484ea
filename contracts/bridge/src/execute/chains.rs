//! Chain registry handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::events::BridgeEvent;
use crate::state::{CONFIG, SUPPORTED_CHAINS};

/// Add a chain to the allow-list. Re-adding is a no-op that re-emits the event.
pub fn execute_add_chain(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    SUPPORTED_CHAINS.save(deps.storage, chain_id, &true)?;

    Ok(Response::new().add_attributes(BridgeEvent::ChainAdded { chain_id }.into_attributes()))
}
