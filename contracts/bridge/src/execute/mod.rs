//! Execute handlers for the swap bridge contract.
//!
//! - `chains` - allow-list management
//! - `swap` - outgoing swaps (allowance path and cw20 `Send` hook)
//! - `redeem` - validator-attested redemptions

mod chains;
mod redeem;
mod swap;

pub use chains::*;
pub use redeem::*;
pub use swap::*;
