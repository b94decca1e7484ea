//! Records published by the bridge on every effectful call.
//!
//! Each record is rendered as attributes of the transaction's `wasm` event,
//! keyed by `action`. The off-chain attestor subscribes to `swap_initialized`.

use cosmwasm_std::{Addr, Attribute, Uint128};

pub const ACTION_NEW_CHAIN: &str = "new_chain";
pub const ACTION_SWAP_INITIALIZED: &str = "swap_initialized";
pub const ACTION_REDEEMED: &str = "redeemed";

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeEvent {
    ChainAdded {
        chain_id: u64,
    },
    SwapInitialized {
        chain_id: u64,
        sender: Addr,
        recipient: String,
        amount: Uint128,
        nonce: u64,
    },
    Redeemed {
        chain_id: u64,
        recipient: Addr,
        amount: Uint128,
        nonce: u64,
    },
}

impl BridgeEvent {
    pub fn action(&self) -> &'static str {
        match self {
            BridgeEvent::ChainAdded { .. } => ACTION_NEW_CHAIN,
            BridgeEvent::SwapInitialized { .. } => ACTION_SWAP_INITIALIZED,
            BridgeEvent::Redeemed { .. } => ACTION_REDEEMED,
        }
    }

    pub fn into_attributes(self) -> Vec<Attribute> {
        let mut attrs = vec![Attribute::new("action", self.action())];
        match self {
            BridgeEvent::ChainAdded { chain_id } => {
                attrs.push(Attribute::new("chain_id", chain_id.to_string()));
            }
            BridgeEvent::SwapInitialized {
                chain_id,
                sender,
                recipient,
                amount,
                nonce,
            } => {
                attrs.push(Attribute::new("chain_id", chain_id.to_string()));
                attrs.push(Attribute::new("sender", sender));
                attrs.push(Attribute::new("recipient", recipient));
                attrs.push(Attribute::new("amount", amount.to_string()));
                attrs.push(Attribute::new("nonce", nonce.to_string()));
            }
            BridgeEvent::Redeemed {
                chain_id,
                recipient,
                amount,
                nonce,
            } => {
                attrs.push(Attribute::new("chain_id", chain_id.to_string()));
                attrs.push(Attribute::new("recipient", recipient));
                attrs.push(Attribute::new("amount", amount.to_string()));
                attrs.push(Attribute::new("nonce", nonce.to_string()));
            }
        }
        attrs
    }
}
