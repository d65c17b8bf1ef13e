use super::account::{Account, AccountId, Amount, Balance};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Owner of all account balances.
///
/// Every mutation of a single account is atomic with respect to every other
/// mutation of that account. Operations on different accounts do not block
/// each other.
#[async_trait]
pub trait AccountLedger: Send + Sync {
    /// Inserts the account, failing with `DuplicateAccount` if the id is taken.
    async fn create(&self, account: Account) -> Result<()>;
    async fn get(&self, id: &AccountId) -> Result<Option<Account>>;
    /// Subtracts `amount` if the balance covers it and returns the new balance.
    async fn debit(&self, id: &AccountId, amount: Amount) -> Result<Balance>;
    /// Adds `amount` and returns the new balance.
    async fn credit(&self, id: &AccountId, amount: Amount) -> Result<Balance>;
    /// All accounts, sorted by id.
    async fn accounts(&self) -> Result<Vec<Account>>;
    async fn clear(&self) -> Result<()>;
}

/// Delivers transfer notifications to account holders. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn notify_about_transfer(&self, account: &Account, message: &str);
}

pub type LedgerRef = Arc<dyn AccountLedger>;
pub type NotifierRef = Arc<dyn Notifier>;
