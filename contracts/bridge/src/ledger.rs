//! Token ledger capability.
//!
//! The bridge never touches balances itself. It holds a handle to the cw20
//! contract and dispatches mint/burn messages that the ledger executes under
//! its own rules. Mint authority is granted to the bridge by the ledger's
//! admin (`UpdateMinter`) outside this contract.

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, Storage, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::state::CONFIG;

/// Handle to the cw20 ledger this instance mints and burns on
pub struct TokenLedger {
    contract: Addr,
}

impl TokenLedger {
    pub fn new(contract: Addr) -> Self {
        Self { contract }
    }

    /// Ledger configured for this instance.
    pub fn load(storage: &dyn Storage) -> StdResult<Self> {
        Ok(Self::new(CONFIG.load(storage)?.token))
    }

    pub fn address(&self) -> &Addr {
        &self.contract
    }

    /// Mint `amount` to `recipient`.
    pub fn mint(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        self.execute(&Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })
    }

    /// Burn `amount` from `owner` using the allowance `owner` granted the bridge.
    pub fn burn_from(&self, owner: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        self.execute(&Cw20ExecuteMsg::BurnFrom {
            owner: owner.to_string(),
            amount,
        })
    }

    /// Burn `amount` held by the bridge itself (tokens received via `Send`).
    pub fn burn(&self, amount: Uint128) -> StdResult<CosmosMsg> {
        self.execute(&Cw20ExecuteMsg::Burn { amount })
    }

    fn execute(&self, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.contract.to_string(),
            msg: to_json_binary(msg)?,
            funds: vec![],
        }))
    }
}
