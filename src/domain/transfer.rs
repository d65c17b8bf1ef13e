use super::account::{Account, AccountId, Amount};
use rust_decimal::Decimal;
use serde::Deserialize;

/// A request to move `amount` from one account to another.
///
/// The identifiers are guaranteed non-empty by construction. The amount is kept
/// as supplied; positivity is a business rule checked by the transfer service.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub account_from: AccountId,
    pub account_to: AccountId,
    pub amount: Decimal,
}

impl TransferRequest {
    pub fn new(account_from: AccountId, account_to: AccountId, amount: Decimal) -> Self {
        Self {
            account_from,
            account_to,
            amount,
        }
    }
}

/// Outcome of a completed transfer, carrying both balances after the move.
#[derive(Debug, PartialEq, Clone)]
pub struct TransferReceipt {
    pub from: Account,
    pub to: Account,
    pub amount: Amount,
}
