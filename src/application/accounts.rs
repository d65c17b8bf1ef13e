use crate::domain::account::{Account, AccountId, Amount, Balance};
use crate::domain::ports::LedgerRef;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;

/// Account management path: opening, querying and single-account mutations.
pub struct AccountService {
    ledger: LedgerRef,
}

impl AccountService {
    pub fn new(ledger: LedgerRef) -> Self {
        Self { ledger }
    }

    /// Opens an account with a non-negative opening balance.
    pub async fn open_account(&self, id: AccountId, balance: Decimal) -> Result<Account> {
        let account = Account::new(id, balance)?;
        self.create_account(account.clone()).await?;
        Ok(account)
    }

    pub async fn create_account(&self, account: Account) -> Result<()> {
        let id = account.id.clone();
        match self.ledger.create(account).await {
            Ok(()) => {
                tracing::info!(account = %id, "account created");
                Ok(())
            }
            Err(err) => {
                tracing::info!(account = %id, error = %err, "account creation failed");
                Err(err)
            }
        }
    }

    pub async fn account(&self, id: &AccountId) -> Result<Account> {
        self.ledger
            .get(id)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(id.clone()))
    }

    pub async fn credit(&self, id: &AccountId, amount: Amount) -> Result<Balance> {
        self.ledger.credit(id, amount).await
    }

    pub async fn debit(&self, id: &AccountId, amount: Amount) -> Result<Balance> {
        self.ledger.debit(id, amount).await
    }

    pub async fn accounts(&self) -> Result<Vec<Account>> {
        self.ledger.accounts().await
    }

    /// Removes every account. Test and reset facility only.
    pub async fn reset(&self) -> Result<()> {
        tracing::warn!("clearing all accounts");
        self.ledger.clear().await
    }
}
