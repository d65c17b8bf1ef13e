use super::account::{Account, AccountId, Amount};
use super::transfer::TransferRequest;

/// A single operation submitted to the ledger engine.
#[derive(Debug, PartialEq, Clone)]
pub enum LedgerCommand {
    Open(Account),
    Credit { account: AccountId, amount: Amount },
    Debit { account: AccountId, amount: Amount },
    Transfer(TransferRequest),
}
