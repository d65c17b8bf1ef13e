use crate::domain::account::{Account, AccountId, Amount, Balance};
use crate::domain::ports::AccountLedger;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

/// A thread-safe in-memory ledger.
///
/// Balances live in a sharded `DashMap`. Each debit or credit runs as one
/// read-modify-write while holding the write guard of the account's slot, so
/// operations on the same account are linearizable and operations on other
/// accounts only contend when they share a shard.
#[derive(Default, Clone)]
pub struct InMemoryLedger {
    balances: Arc<DashMap<AccountId, Balance>>,
}

impl InMemoryLedger {
    /// Creates a new, empty in-memory ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountLedger for InMemoryLedger {
    async fn create(&self, account: Account) -> Result<()> {
        match self.balances.entry(account.id) {
            Entry::Occupied(slot) => Err(LedgerError::DuplicateAccount(slot.key().clone())),
            Entry::Vacant(slot) => {
                slot.insert(account.balance);
                Ok(())
            }
        }
    }

    async fn get(&self, id: &AccountId) -> Result<Option<Account>> {
        Ok(self.balances.get(id).map(|slot| Account {
            id: slot.key().clone(),
            balance: *slot.value(),
        }))
    }

    async fn debit(&self, id: &AccountId, amount: Amount) -> Result<Balance> {
        let mut slot = self
            .balances
            .get_mut(id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.clone()))?;
        slot.value_mut().debit(amount)?;
        let balance = *slot.value();
        tracing::debug!(account = %id, %amount, %balance, "debited");
        Ok(balance)
    }

    async fn credit(&self, id: &AccountId, amount: Amount) -> Result<Balance> {
        let mut slot = self
            .balances
            .get_mut(id)
            .ok_or_else(|| LedgerError::AccountNotFound(id.clone()))?;
        slot.value_mut().credit(amount)?;
        let balance = *slot.value();
        tracing::debug!(account = %id, %amount, %balance, "credited");
        Ok(balance)
    }

    async fn accounts(&self) -> Result<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .balances
            .iter()
            .map(|slot| Account {
                id: slot.key().clone(),
                balance: *slot.value(),
            })
            .collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(accounts)
    }

    async fn clear(&self) -> Result<()> {
        self.balances.clear();
        Ok(())
    }
}
