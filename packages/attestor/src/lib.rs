//! Swap Bridge Attestor
//!
//! Off-chain side of the bridge:
//! - `signer` - validator key, message signing and signer recovery
//! - `events` - parsing of `swap_initialized` records from transaction events
//! - `attestation` - signed redemption tickets in the contract's wire format
//! - `verifier` - co-validator that replays the destination checks off-chain

pub mod address;
pub mod attestation;
pub mod config;
pub mod error;
pub mod events;
pub mod ledger;
pub mod signer;
pub mod verifier;

pub use attestation::Attestation;
pub use error::{AttestorError, LedgerError, VerifyError};
pub use events::{SwapInitialized, TxEvent, WasmEvent};
pub use ledger::{InMemoryLedger, ReplayLedger, TokenLedger};
pub use signer::{recover_signer, Attestor};
pub use verifier::{Redemption, RedemptionVerifier};
