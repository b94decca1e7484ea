//! Validator signer
//!
//! Signs the bridge message exactly as a wallet `personal_sign` would: the
//! 32-byte message hash is prefixed, hashed again, and signed as a prehash.
//! Output is `(v, r, s)` with `v = 27 + recovery id` and low `s`.

use cosmwasm_std::Binary;
use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

use common::{
    address_from_pubkey, bytes_to_hex, compute_message_hash, signing_digest, SignatureComponents,
    ADDRESS_LEN,
};

use crate::error::AttestorError;

/// Holds the validator key and its derived address
pub struct Attestor {
    signing_key: SigningKey,
    address: [u8; ADDRESS_LEN],
}

impl Attestor {
    /// Load from a 32-byte hex private key (with or without 0x prefix).
    pub fn from_hex(private_key: &str) -> Result<Self, AttestorError> {
        let trimmed = private_key.trim();
        let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes =
            hex::decode(trimmed).map_err(|e| AttestorError::InvalidPrivateKey(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AttestorError> {
        if bytes.len() != 32 {
            return Err(AttestorError::InvalidPrivateKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|e| AttestorError::InvalidPrivateKey(e.to_string()))?;

        let point = signing_key.verifying_key().to_encoded_point(false);
        let address = address_from_pubkey(point.as_bytes()).ok_or_else(|| {
            AttestorError::InvalidPrivateKey("public key is not uncompressed SEC1".to_string())
        })?;

        Ok(Self {
            signing_key,
            address,
        })
    }

    /// Validator identity the contract is instantiated with
    pub fn address(&self) -> [u8; ADDRESS_LEN] {
        self.address
    }

    pub fn address_hex(&self) -> String {
        bytes_to_hex(&self.address)
    }

    /// Sign the redemption tuple for `recipient` on the instance `chain_id`.
    pub fn attest(
        &self,
        chain_id: u64,
        recipient: &[u8; ADDRESS_LEN],
        amount: u128,
        nonce: u64,
    ) -> Result<SignatureComponents, AttestorError> {
        let message_hash = compute_message_hash(chain_id, recipient, amount, nonce);
        self.sign_digest(&signing_digest(&message_hash))
    }

    /// Sign an already prefixed digest.
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Result<SignatureComponents, AttestorError> {
        let signature: Signature = self
            .signing_key
            .sign_prehash(digest)
            .map_err(|e| AttestorError::Signing(e.to_string()))?;
        let signature = signature.normalize_s().unwrap_or(signature);

        // Pick the recovery id that yields our own key back
        let own = self.signing_key.verifying_key();
        let recovery_id = [RecoveryId::new(false, false), RecoveryId::new(true, false)]
            .into_iter()
            .find(|id| {
                VerifyingKey::recover_from_prehash(digest, &signature, *id)
                    .map(|recovered| &recovered == own)
                    .unwrap_or(false)
            })
            .ok_or_else(|| AttestorError::Signing("no recovery id matches".to_string()))?;

        let (r, s) = signature.split_bytes();
        Ok(SignatureComponents {
            v: 27 + recovery_id.to_byte(),
            r: Binary::from(r.to_vec()),
            s: Binary::from(s.to_vec()),
        })
    }
}

/// Recover the signer address of `digest`.
///
/// Applies the same acceptance rules as the contract: `v` in {27, 28}, 32-byte
/// `r` and `s`, low `s`. Anything else yields `None`.
pub fn recover_signer(
    digest: &[u8; 32],
    signature: &SignatureComponents,
) -> Option<[u8; ADDRESS_LEN]> {
    let recovery_id = RecoveryId::from_byte(signature.recovery_param()?)?;
    let compact = signature.to_compact()?;
    let signature = Signature::from_slice(&compact).ok()?;
    let key = VerifyingKey::recover_from_prehash(digest, &signature, recovery_id).ok()?;
    address_from_pubkey(key.to_encoded_point(false).as_bytes())
}
