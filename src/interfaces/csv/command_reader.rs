use crate::domain::account::{Account, AccountId, Amount};
use crate::domain::command::LedgerCommand;
use crate::domain::transfer::TransferRequest;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum CommandType {
    Open,
    Credit,
    Debit,
    Transfer,
}

/// One CSV row: `type, account, counterparty, amount`.
#[derive(Debug, Deserialize)]
struct CommandRecord {
    r#type: CommandType,
    account: String,
    counterparty: Option<String>,
    amount: Option<Decimal>,
}

impl CommandRecord {
    fn required_amount(&self) -> Result<Decimal> {
        self.amount.ok_or_else(|| {
            LedgerError::ValidationError(format!("{:?} command missing amount", self.r#type))
        })
    }
}

impl TryFrom<CommandRecord> for LedgerCommand {
    type Error = LedgerError;

    fn try_from(record: CommandRecord) -> Result<Self> {
        let amount = record.required_amount()?;
        let account = AccountId::new(record.account)?;
        match record.r#type {
            CommandType::Open => Ok(LedgerCommand::Open(Account::new(account, amount)?)),
            CommandType::Credit => Ok(LedgerCommand::Credit {
                account,
                amount: Amount::new(amount)?,
            }),
            CommandType::Debit => Ok(LedgerCommand::Debit {
                account,
                amount: Amount::new(amount)?,
            }),
            CommandType::Transfer => {
                let counterparty = record.counterparty.ok_or_else(|| {
                    LedgerError::ValidationError("Transfer command missing counterparty".to_string())
                })?;
                Ok(LedgerCommand::Transfer(TransferRequest::new(
                    account,
                    AccountId::new(counterparty)?,
                    amount,
                )))
            }
        }
    }
}

/// Reads ledger commands from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<LedgerCommand>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and parses commands.
    ///
    /// Rows are streamed, so large files are never loaded into memory at once.
    pub fn commands(self) -> impl Iterator<Item = Result<LedgerCommand>> {
        self.reader.into_deserialize::<CommandRecord>().map(|result| {
            result
                .map_err(LedgerError::from)
                .and_then(LedgerCommand::try_from)
        })
    }
}
