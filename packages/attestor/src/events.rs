//! Bridge Event Parsing
//!
//! Parses CosmWasm transaction events as the node LCD returns them and picks
//! out the records the bridge emits.

use serde::Deserialize;
use std::collections::HashMap;

/// Action attribute of an initiation record
pub const ACTION_SWAP_INITIALIZED: &str = "swap_initialized";

/// One `wasm` event, keyed by the emitting contract
#[derive(Debug, Clone)]
pub struct WasmEvent {
    pub contract_address: String,
    pub action: String,
    /// Remaining attributes
    pub attributes: HashMap<String, String>,
}

impl WasmEvent {
    /// `wasm` events of a transaction. Events without `_contract_address` are dropped.
    pub fn from_tx_events(events: &[TxEvent]) -> Vec<Self> {
        events
            .iter()
            .filter(|event| event.event_type == "wasm")
            .filter_map(|event| {
                let mut contract_address = None;
                let mut action = String::new();
                let mut attributes = HashMap::new();

                for attr in &event.attributes {
                    match attr.key.as_str() {
                        "_contract_address" => contract_address = Some(attr.value.clone()),
                        "action" => action = attr.value.clone(),
                        key => {
                            attributes.insert(key.to_string(), attr.value.clone());
                        }
                    }
                }

                Some(WasmEvent {
                    contract_address: contract_address.filter(|a| !a.is_empty())?,
                    action,
                    attributes,
                })
            })
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    pub fn is_action(&self, action: &str) -> bool {
        self.action == action
    }
}

/// Transaction event in the LCD `tx_response.events` shape
#[derive(Debug, Clone, Deserialize)]
pub struct TxEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub attributes: Vec<TxEventAttribute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TxEventAttribute {
    pub key: String,
    pub value: String,
}

impl From<&cosmwasm_std::Event> for TxEvent {
    fn from(event: &cosmwasm_std::Event) -> Self {
        TxEvent {
            event_type: event.ty.clone(),
            attributes: event
                .attributes
                .iter()
                .map(|a| TxEventAttribute {
                    key: a.key.clone(),
                    value: a.value.clone(),
                })
                .collect(),
        }
    }
}

/// Initiation record emitted by a swap on the source instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapInitialized {
    /// Bridge contract that burned the tokens
    pub contract_address: String,
    /// Destination chain id
    pub chain_id: u64,
    /// Account whose tokens were burned
    pub sender: String,
    /// Recipient on the destination chain
    pub recipient: String,
    /// Amount burned
    pub amount: u128,
    /// Nonce assigned by the source instance
    pub nonce: u64,
}

impl SwapInitialized {
    /// Parse from WasmEvent. `None` for other actions or missing fields.
    pub fn from_wasm_event(event: &WasmEvent) -> Option<Self> {
        if !event.is_action(ACTION_SWAP_INITIALIZED) {
            return None;
        }

        Some(SwapInitialized {
            contract_address: event.contract_address.clone(),
            chain_id: event.get("chain_id")?.parse().ok()?,
            sender: event.get("sender")?.clone(),
            recipient: event.get("recipient")?.clone(),
            amount: event.get("amount")?.parse().ok()?,
            nonce: event.get("nonce")?.parse().ok()?,
        })
    }

    /// Initiation records emitted by `bridge` in a transaction.
    ///
    /// Any contract can emit a `swap_initialized` action, so records from
    /// other addresses are dropped.
    pub fn from_tx_events(events: &[TxEvent], bridge: &str) -> Vec<Self> {
        WasmEvent::from_tx_events(events)
            .iter()
            .filter(|event| event.contract_address == bridge)
            .filter_map(Self::from_wasm_event)
            .collect()
    }
}
