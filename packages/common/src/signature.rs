//! Recoverable ECDSA signature components (secp256k1)
//!
//! Wallets hand out signatures as `r || s || v` with `v` in {27, 28}. The
//! contract takes the three parts separately, the same way an EVM `redeem`
//! takes `(uint8 v, bytes32 r, bytes32 s)`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

/// secp256k1 group order divided by two. Signatures with a larger `s` are the
/// malleable twin of a valid signature and are refused.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

/// Signature as submitted with a redeem call
#[cw_serde]
pub struct SignatureComponents {
    /// Recovery byte (27 or 28)
    pub v: u8,
    /// 32-byte r value
    pub r: Binary,
    /// 32-byte s value
    pub s: Binary,
}

impl SignatureComponents {
    /// Build from a 65-byte `r || s || v` signature.
    pub fn from_rsv(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != 65 {
            return None;
        }
        Some(Self {
            v: bytes[64],
            r: Binary::from(&bytes[..32]),
            s: Binary::from(&bytes[32..64]),
        })
    }

    /// Recovery id (0 or 1) encoded by `v`.
    pub fn recovery_param(&self) -> Option<u8> {
        match self.v {
            27 | 28 => Some(self.v - 27),
            _ => None,
        }
    }

    /// Compact `r || s` form accepted by secp256k1 public key recovery.
    ///
    /// Returns `None` unless both halves are 32 bytes and `s` is in the lower
    /// half of the curve order.
    pub fn to_compact(&self) -> Option<[u8; 64]> {
        if self.r.len() != 32 || self.s.len() != 32 {
            return None;
        }
        if self.s.as_slice() > SECP256K1_HALF_ORDER.as_slice() {
            return None;
        }

        let mut compact = [0u8; 64];
        compact[..32].copy_from_slice(&self.r);
        compact[32..].copy_from_slice(&self.s);
        Some(compact)
    }

    /// Wallet `r || s || v` form.
    pub fn to_rsv(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(65);
        bytes.extend_from_slice(&self.r);
        bytes.extend_from_slice(&self.s);
        bytes.push(self.v);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(v: u8) -> SignatureComponents {
        SignatureComponents {
            v,
            r: Binary::from(vec![0x11; 32]),
            s: Binary::from(vec![0x22; 32]),
        }
    }

    #[test]
    fn test_recovery_param() {
        assert_eq!(sample(27).recovery_param(), Some(0));
        assert_eq!(sample(28).recovery_param(), Some(1));
        assert_eq!(sample(0).recovery_param(), None);
        assert_eq!(sample(1).recovery_param(), None);
        assert_eq!(sample(29).recovery_param(), None);
    }

    #[test]
    fn test_compact_layout() {
        let compact = sample(27).to_compact().unwrap();
        assert_eq!(&compact[..32], &[0x11; 32]);
        assert_eq!(&compact[32..], &[0x22; 32]);
    }

    #[test]
    fn test_compact_rejects_wrong_lengths() {
        let mut sig = sample(27);
        sig.r = Binary::from(vec![0x11; 31]);
        assert!(sig.to_compact().is_none());

        let mut sig = sample(27);
        sig.s = Binary::from(vec![0x22; 33]);
        assert!(sig.to_compact().is_none());
    }

    #[test]
    fn test_compact_rejects_high_s() {
        let mut sig = sample(27);
        sig.s = Binary::from(SECP256K1_HALF_ORDER.to_vec());
        assert!(sig.to_compact().is_some());

        let mut above = SECP256K1_HALF_ORDER;
        above[31] += 1;
        sig.s = Binary::from(above.to_vec());
        assert!(sig.to_compact().is_none());

        sig.s = Binary::from(vec![0xff; 32]);
        assert!(sig.to_compact().is_none());
    }

    #[test]
    fn test_rsv_conversion() {
        let mut raw = vec![0x11; 32];
        raw.extend_from_slice(&[0x22; 32]);
        raw.push(28);

        let sig = SignatureComponents::from_rsv(&raw).unwrap();
        assert_eq!(sig, sample(28));
        assert_eq!(sig.to_rsv(), raw);
        assert!(SignatureComponents::from_rsv(&raw[..64]).is_none());
    }
}
