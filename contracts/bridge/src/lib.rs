//! Swap Bridge Contract - Validator-Attested Cross-Chain Token Swaps
//!
//! One instance runs per chain, each bound to a local cw20 token it may mint
//! and burn. Instances never talk to each other; an off-chain validator links
//! them by signing the swaps it observes.
//!
//! # Outgoing Flow (Swap)
//! 1. User burns tokens here, naming a destination chain and recipient
//! 2. The instance assigns the next nonce and emits `swap_initialized`
//! 3. The validator signs `(chain_id, recipient, amount, nonce)` for the user
//!
//! # Incoming Flow (Redeem)
//! 1. Recipient submits the signed fields to the destination instance
//! 2. The instance rebuilds the message and recovers the signer
//! 3. On a validator match the nonce is recorded and tokens are minted
//!
//! # Security
//! - Messages are scoped to one destination chain id
//! - `(chain_id, nonce)` can be redeemed at most once
//! - Only the named recipient may redeem
//! - A single validator key is trusted per instance; its compromise lets an
//!   attacker mint arbitrary amounts on every instance that trusts it

pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod hash;
pub mod ledger;
pub mod msg;
mod query;
pub mod replay;
pub mod state;

pub use crate::error::ContractError;
pub use crate::events::BridgeEvent;
pub use crate::ledger::TokenLedger;
pub use common::{compute_message_hash, signing_digest, SignatureComponents};
