use crate::domain::account::{AccountId, Balance};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Account id {0} already exists!")]
    DuplicateAccount(AccountId),
    #[error("Account not found, id : {0}")]
    AccountNotFound(AccountId),
    #[error("Transfer initiated to same account as sender: {0}")]
    SameAccountTransfer(AccountId),
    #[error("Transfer amount {0} must be greater than zero!")]
    NonPositiveAmount(Decimal),
    #[error("Transfer amount greater than available balance: {0}")]
    InsufficientBalance(Balance),
    #[error("Balance overflow")]
    BalanceOverflow,
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Transfer task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl LedgerError {
    /// True for failures caused by the request itself rather than the environment.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            LedgerError::DuplicateAccount(_)
                | LedgerError::AccountNotFound(_)
                | LedgerError::SameAccountTransfer(_)
                | LedgerError::NonPositiveAmount(_)
                | LedgerError::InsufficientBalance(_)
                | LedgerError::ValidationError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_messages() {
        let id = AccountId::new("Id-123").unwrap();
        assert_eq!(
            LedgerError::DuplicateAccount(id.clone()).to_string(),
            "Account id Id-123 already exists!"
        );
        assert_eq!(
            LedgerError::AccountNotFound(id.clone()).to_string(),
            "Account not found, id : Id-123"
        );
        assert_eq!(
            LedgerError::SameAccountTransfer(id).to_string(),
            "Transfer initiated to same account as sender: Id-123"
        );
        assert_eq!(
            LedgerError::NonPositiveAmount(dec!(-1000)).to_string(),
            "Transfer amount -1000 must be greater than zero!"
        );
        assert_eq!(
            LedgerError::InsufficientBalance(Balance::ZERO).to_string(),
            "Transfer amount greater than available balance: 0"
        );
    }

    #[test]
    fn test_rejection_classification() {
        assert!(LedgerError::InsufficientBalance(Balance::ZERO).is_rejection());
        assert!(LedgerError::ValidationError("bad".to_string()).is_rejection());
        assert!(!LedgerError::BalanceOverflow.is_rejection());
        assert!(!LedgerError::IoError(std::io::Error::other("disk")).is_rejection());
    }
}
