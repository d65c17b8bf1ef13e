use super::locks::AccountLocks;
use crate::domain::account::{Account, AccountId, Amount};
use crate::domain::ports::{LedgerRef, NotifierRef};
use crate::domain::transfer::{TransferReceipt, TransferRequest};
use crate::error::{LedgerError, Result};
use std::sync::Arc;

/// Validates transfer requests and moves funds between two accounts.
///
/// The locks of both accounts are held for the whole validate-debit-credit
/// sequence, so no other transfer touching either account can observe the
/// debited-but-not-credited state. Transfers over disjoint pairs run
/// concurrently.
#[derive(Clone)]
pub struct TransferService {
    ledger: LedgerRef,
    notifier: NotifierRef,
    locks: Arc<AccountLocks>,
}

impl TransferService {
    pub fn new(ledger: LedgerRef, notifier: NotifierRef) -> Self {
        Self {
            ledger,
            notifier,
            locks: Arc::new(AccountLocks::new()),
        }
    }

    /// Executes a transfer.
    ///
    /// Checks run in a fixed order and stop at the first failure: source
    /// exists, destination exists, accounts differ, amount is positive, source
    /// covers the amount. A rejected transfer leaves every balance untouched.
    ///
    /// The transfer runs on its own task. Dropping the returned future, as an
    /// HTTP server does when the client disconnects, never stops it between
    /// the debit and the credit.
    pub async fn transfer(&self, request: TransferRequest) -> Result<TransferReceipt> {
        let service = self.clone();
        tokio::spawn(async move { service.run(request).await }).await?
    }

    async fn run(&self, request: TransferRequest) -> Result<TransferReceipt> {
        let guard = self
            .locks
            .lock_pair(&request.account_from, &request.account_to)
            .await;
        let outcome = self.execute(&request).await;
        drop(guard);
        self.locks.release(&request.account_from);
        self.locks.release(&request.account_to);

        match &outcome {
            Ok(receipt) => {
                tracing::info!(?request, "Transfer complete");
                self.notify(receipt);
            }
            Err(err) => {
                tracing::info!(?request, error = %err, "Transfer failed");
            }
        }

        outcome
    }

    async fn execute(&self, request: &TransferRequest) -> Result<TransferReceipt> {
        let from = self
            .ledger
            .get(&request.account_from)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(request.account_from.clone()))?;
        let to = self
            .ledger
            .get(&request.account_to)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(request.account_to.clone()))?;

        if from.id == to.id {
            return Err(LedgerError::SameAccountTransfer(to.id));
        }

        let amount = Amount::new(request.amount)?;

        let from_balance = self.ledger.debit(&from.id, amount).await?;
        let to_balance = match self.ledger.credit(&to.id, amount).await {
            Ok(balance) => balance,
            Err(err) => {
                self.revert_debit(&from.id, amount, &err).await;
                return Err(err);
            }
        };

        Ok(TransferReceipt {
            from: Account {
                id: from.id,
                balance: from_balance,
            },
            to: Account {
                id: to.id,
                balance: to_balance,
            },
            amount,
        })
    }

    async fn revert_debit(&self, account: &AccountId, amount: Amount, cause: &LedgerError) {
        match self.ledger.credit(account, amount).await {
            Ok(balance) => {
                tracing::warn!(%account, %amount, %balance, error = %cause, "credit failed, debit reverted");
            }
            Err(err) => {
                tracing::error!(
                    %account,
                    %amount,
                    error = %cause,
                    revert_error = %err,
                    "credit failed and debit could not be reverted"
                );
            }
        }
    }

    fn notify(&self, receipt: &TransferReceipt) {
        self.notifier.notify_about_transfer(
            &receipt.to,
            &format!(
                "You have received {} from Account: {}",
                receipt.amount, receipt.from.id
            ),
        );
        self.notifier.notify_about_transfer(
            &receipt.from,
            &format!(
                "You have transferred {} to Account: {}",
                receipt.amount, receipt.to.id
            ),
        );
    }
}
