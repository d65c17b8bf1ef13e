use crate::domain::account::Account;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct AccountRow<'a> {
    account: &'a str,
    balance: Decimal,
}

/// Writes account balances as CSV with the header `account,balance`.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes every account and flushes the sink. Balances are normalized, so
    /// `1000.00` is written as `1000`.
    pub fn write_accounts(&mut self, accounts: Vec<Account>) -> Result<()> {
        for account in &accounts {
            self.writer.serialize(AccountRow {
                account: account.id.as_str(),
                balance: account.balance.value().normalize(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
