//! Off-chain co-validator
//!
//! Mirrors the destination instance's redeem checks so an operator can
//! pre-validate attestations, or run the bridge logic without a chain in tests.
//! The host chain gets atomicity from serial execution. Here a single mutex
//! covers the replay check, the insert and the mint, so two concurrent redeems
//! of the same nonce cannot both pass.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use common::{bytes_to_hex, compute_message_hash, signing_digest, ADDRESS_LEN};

use crate::address;
use crate::attestation::Attestation;
use crate::error::VerifyError;
use crate::ledger::{ReplayLedger, TokenLedger};
use crate::signer::recover_signer;

/// Outcome of an accepted redemption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redemption {
    pub chain_id: u64,
    pub recipient: String,
    pub amount: u128,
    pub nonce: u64,
}

/// Redemption verifier for one destination instance
pub struct RedemptionVerifier<L: TokenLedger> {
    chain_id: u64,
    validator: [u8; ADDRESS_LEN],
    address_prefix: String,
    replay: Mutex<ReplayLedger>,
    ledger: L,
}

impl<L: TokenLedger> RedemptionVerifier<L> {
    /// `address_prefix` is the destination chain's bech32 prefix, as in
    /// `Config::address_prefix`.
    pub fn new(
        chain_id: u64,
        validator: [u8; ADDRESS_LEN],
        address_prefix: impl Into<String>,
        ledger: L,
    ) -> Self {
        Self {
            chain_id,
            validator,
            address_prefix: address_prefix.into(),
            replay: Mutex::new(ReplayLedger::new()),
            ledger,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn is_redeemed(&self, chain_id: u64, nonce: u64) -> bool {
        self.replay().contains(chain_id, nonce)
    }

    /// Verify `attestation` submitted by `caller` and mint on success.
    ///
    /// Check order: chain, recipient encoding, signature, caller, replay. The first failure wins
    /// and leaves no state behind.
    pub fn redeem(&self, caller: &str, attestation: &Attestation) -> Result<Redemption, VerifyError> {
        let Attestation {
            chain_id,
            recipient,
            amount,
            nonce,
            signature,
        } = attestation;
        let (chain_id, nonce, amount) = (*chain_id, *nonce, amount.u128());

        if chain_id != self.chain_id {
            debug!(chain_id, expected = self.chain_id, "Rejecting redeem for other chain");
            return Err(VerifyError::InvalidChain { chain_id });
        }

        let recipient_bytes = self.canonical_recipient(recipient)?;
        let digest = signing_digest(&compute_message_hash(
            chain_id,
            &recipient_bytes,
            amount,
            nonce,
        ));

        match recover_signer(&digest, signature) {
            Some(signer) if signer == self.validator => {}
            recovered => {
                warn!(
                    chain_id,
                    nonce,
                    recovered = ?recovered.map(|a| bytes_to_hex(&a)),
                    "Signature does not recover to validator"
                );
                return Err(VerifyError::InvalidMessage);
            }
        }

        // recipient is canonical here
        if caller != recipient.as_str() {
            return Err(VerifyError::InvalidCaller {
                caller: caller.to_string(),
                recipient: recipient.clone(),
            });
        }

        let mut replay = self.replay();
        if !replay.insert(chain_id, nonce) {
            return Err(VerifyError::AlreadyRedeemed);
        }

        if let Err(e) = self.ledger.mint(recipient, amount) {
            replay.rollback(chain_id, nonce);
            warn!(chain_id, nonce, error = %e, "Mint failed, redemption rolled back");
            return Err(e.into());
        }
        drop(replay);

        info!(chain_id, nonce, recipient = %recipient, amount, "Redeemed");

        Ok(Redemption {
            chain_id,
            recipient: recipient.clone(),
            amount,
            nonce,
        })
    }

    /// 20-byte payload of `recipient`, which must be the lowercase bech32
    /// form under this chain's prefix. Anything else would mint to a ledger
    /// key the signed bytes do not name.
    fn canonical_recipient(&self, recipient: &str) -> Result<[u8; ADDRESS_LEN], VerifyError> {
        let (bytes, hrp) =
            address::decode(recipient).map_err(|e| VerifyError::InvalidAddress(e.to_string()))?;
        if hrp != self.address_prefix {
            return Err(VerifyError::InvalidAddress(format!(
                "{}: expected prefix {}, got {}",
                recipient, self.address_prefix, hrp
            )));
        }

        let canonical = address::encode(&bytes, &self.address_prefix)
            .map_err(|e| VerifyError::InvalidAddress(e.to_string()))?;
        if canonical != recipient {
            return Err(VerifyError::InvalidAddress(format!(
                "{}: not in canonical form {}",
                recipient, canonical
            )));
        }
        Ok(bytes)
    }

    fn replay(&self) -> MutexGuard<'_, ReplayLedger> {
        // the set is only mutated by single insert/remove calls, so a poisoned guard is still coherent
        self.replay
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
