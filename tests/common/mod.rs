#![allow(dead_code)]

use account_ledger::application::engine::LedgerEngine;
use account_ledger::domain::account::{Account, AccountId, Balance};
use account_ledger::domain::ports::Notifier;
use account_ledger::infrastructure::in_memory::InMemoryLedger;
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl Notifier for RecordingNotifier {
    fn notify_about_transfer(&self, account: &Account, message: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((account.id.to_string(), message.to_string()));
    }
}

pub fn id(value: &str) -> AccountId {
    AccountId::new(value).unwrap()
}

/// Builds an engine over a fresh in-memory ledger holding `accounts`.
pub async fn engine_with(
    accounts: &[(&str, Decimal)],
) -> (Arc<LedgerEngine>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let engine = LedgerEngine::new(Arc::new(InMemoryLedger::new()), notifier.clone());
    for (account_id, balance) in accounts {
        engine
            .accounts()
            .open_account(id(account_id), *balance)
            .await
            .unwrap();
    }
    (Arc::new(engine), notifier)
}

pub async fn balance(engine: &LedgerEngine, account_id: &str) -> Balance {
    engine.accounts().account(&id(account_id)).await.unwrap().balance
}

/// Writes a command CSV with the standard header followed by `rows`.
pub fn command_file(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type, account, counterparty, amount").unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}
