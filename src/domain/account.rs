use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Identifier of an account within the ledger.
///
/// Always non-empty. Ordering is lexicographic and is used to acquire account
/// locks in a fixed global order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            Err(LedgerError::ValidationError(
                "Account id must not be empty".to_string(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountId {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a monetary balance held by an account.
///
/// This is a wrapper around `rust_decimal::Decimal`. Mutation goes through
/// [`Balance::debit`] and [`Balance::credit`], which never commit a negative value.
/// In JSON it travels as a plain number carrying every digit of the decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Balance(#[serde(with = "rust_decimal::serde::arbitrary_precision")] pub Decimal);

/// Represents a strictly positive monetary amount moved by a single operation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LedgerError::NonPositiveAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Subtracts `amount` if the balance covers it.
    ///
    /// On failure the balance is left untouched and reported in the error.
    pub fn debit(&mut self, amount: Amount) -> Result<()> {
        if self.0 >= amount.value() {
            self.0 -= amount.value();
            Ok(())
        } else {
            Err(LedgerError::InsufficientBalance(*self))
        }
    }

    pub fn credit(&mut self, amount: Amount) -> Result<()> {
        self.0 = self
            .0
            .checked_add(amount.value())
            .ok_or(LedgerError::BalanceOverflow)?;
        Ok(())
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Snapshot of an account as held by the ledger.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Account {
    #[serde(rename = "accountId")]
    pub id: AccountId,
    pub balance: Balance,
}

impl Account {
    /// Builds an account with an opening balance, which must not be negative.
    pub fn new(id: AccountId, balance: Decimal) -> Result<Self> {
        if balance < Decimal::ZERO {
            return Err(LedgerError::ValidationError(format!(
                "Opening balance {} must not be negative",
                balance
            )));
        }
        Ok(Self {
            id,
            balance: Balance::new(balance),
        })
    }
}
