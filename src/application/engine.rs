use super::accounts::AccountService;
use super::transfer::TransferService;
use crate::domain::account::Account;
use crate::domain::command::LedgerCommand;
use crate::domain::ports::{LedgerRef, NotifierRef};
use crate::error::Result;

/// The main entry point for ledger processing.
///
/// `LedgerEngine` wires the account management path and the transfer path to
/// the same ledger handle, so both observe one source of truth for balances.
/// It is `Sync` and meant to be shared behind an `Arc` by concurrent callers.
pub struct LedgerEngine {
    accounts: AccountService,
    transfers: TransferService,
}

impl LedgerEngine {
    /// Creates a new `LedgerEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `ledger` - The ledger owning every account balance.
    /// * `notifier` - Receives the notifications of completed transfers.
    pub fn new(ledger: LedgerRef, notifier: NotifierRef) -> Self {
        Self {
            accounts: AccountService::new(ledger.clone()),
            transfers: TransferService::new(ledger, notifier),
        }
    }

    pub fn accounts(&self) -> &AccountService {
        &self.accounts
    }

    pub fn transfers(&self) -> &TransferService {
        &self.transfers
    }

    /// Applies a single command.
    ///
    /// A rejected command leaves the ledger unchanged and reports why.
    pub async fn process_command(&self, command: LedgerCommand) -> Result<()> {
        match command {
            LedgerCommand::Open(account) => self.accounts.create_account(account).await,
            LedgerCommand::Credit { account, amount } => {
                self.accounts.credit(&account, amount).await.map(|_| ())
            }
            LedgerCommand::Debit { account, amount } => {
                self.accounts.debit(&account, amount).await.map(|_| ())
            }
            LedgerCommand::Transfer(request) => self.transfers.transfer(request).await.map(|_| ()),
        }
    }

    /// Consumes the engine and returns the final state of all accounts.
    pub async fn into_results(self) -> Result<Vec<Account>> {
        self.accounts.accounts().await
    }
}
