//! Off-chain replay ledger and token ledger capability

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::error::LedgerError;

/// Set of redeemed `(chain_id, nonce)` pairs. Monotonic apart from rollback.
#[derive(Debug, Default)]
pub struct ReplayLedger {
    redeemed: HashSet<(u64, u64)>,
}

impl ReplayLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, chain_id: u64, nonce: u64) -> bool {
        self.redeemed.contains(&(chain_id, nonce))
    }

    /// Record a redemption. Returns false if it was already recorded.
    pub fn insert(&mut self, chain_id: u64, nonce: u64) -> bool {
        self.redeemed.insert((chain_id, nonce))
    }

    /// Undo an insert whose mint failed.
    pub(crate) fn rollback(&mut self, chain_id: u64, nonce: u64) {
        self.redeemed.remove(&(chain_id, nonce));
    }

    pub fn len(&self) -> usize {
        self.redeemed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.redeemed.is_empty()
    }
}

/// Ledger the verifier mints on. Implementations enforce their own balances.
pub trait TokenLedger: Send + Sync {
    fn mint(&self, recipient: &str, amount: u128) -> Result<(), LedgerError>;
}

/// In-process ledger with an optional cumulative mint cap
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    balances: Mutex<HashMap<String, u128>>,
    cap: Option<u128>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mint_cap(cap: u128) -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            cap: Some(cap),
        }
    }

    pub fn balance_of(&self, account: &str) -> u128 {
        self.lock().get(account).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> u128 {
        self.lock().values().sum()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, u128>> {
        // a poisoned map still holds consistent balances; every write is a single insert
        self.balances
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenLedger for InMemoryLedger {
    fn mint(&self, recipient: &str, amount: u128) -> Result<(), LedgerError> {
        let mut balances = self.lock();

        if let Some(cap) = self.cap {
            let minted: u128 = balances.values().sum();
            if minted.checked_add(amount).map_or(true, |total| total > cap) {
                return Err(LedgerError::CapExceeded {
                    recipient: recipient.to_string(),
                    amount,
                    cap,
                });
            }
        }

        let balance = balances.get(recipient).copied().unwrap_or(0);
        let updated = balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow(recipient.to_string()))?;
        balances.insert(recipient.to_string(), updated);
        Ok(())
    }
}
