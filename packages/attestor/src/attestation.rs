//! Signed redemption tickets handed to recipients

use cosmwasm_std::Uint128;
use serde::{Deserialize, Serialize};

use common::SignatureComponents;

use crate::address;
use crate::error::AttestorError;
use crate::events::{SwapInitialized, TxEvent};
use crate::signer::Attestor;

/// Everything a recipient needs to call `Redeem` on the destination instance.
///
/// Field names and encodings match the contract's `Redeem` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attestation {
    pub chain_id: u64,
    pub recipient: String,
    pub amount: Uint128,
    pub nonce: u64,
    pub signature: SignatureComponents,
}

impl Attestor {
    /// Sign the redemption of an observed swap.
    pub fn attest_swap(&self, swap: &SwapInitialized) -> Result<Attestation, AttestorError> {
        let (recipient, _hrp) = address::decode(&swap.recipient)?;
        let signature = self.attest(swap.chain_id, &recipient, swap.amount, swap.nonce)?;

        Ok(Attestation {
            chain_id: swap.chain_id,
            recipient: swap.recipient.clone(),
            amount: Uint128::new(swap.amount),
            nonce: swap.nonce,
            signature,
        })
    }

    /// Attest every swap `bridge` emitted in one transaction.
    ///
    /// Recipients must carry `prefix`.
    pub fn attest_tx(
        &self,
        events: &[TxEvent],
        prefix: &str,
        bridge: &str,
    ) -> Vec<(SwapInitialized, Result<Attestation, AttestorError>)> {
        SwapInitialized::from_tx_events(events, bridge)
            .into_iter()
            .map(|swap| {
                let result = match address::decode(&swap.recipient) {
                    Ok((_, hrp)) if hrp != prefix => Err(AttestorError::InvalidAddress(format!(
                        "{}: expected prefix {}, got {}",
                        swap.recipient, prefix, hrp
                    ))),
                    _ => self.attest_swap(&swap),
                };
                (swap, result)
            })
            .collect()
    }

    /// Attest one stdin line: a JSON array of transaction events.
    pub fn attest_line(
        &self,
        line: &str,
        prefix: &str,
        bridge: &str,
    ) -> Result<Vec<(SwapInitialized, Result<Attestation, AttestorError>)>, serde_json::Error>
    {
        let events: Vec<TxEvent> = serde_json::from_str(line)?;
        Ok(self.attest_tx(&events, prefix, bridge))
    }
}
