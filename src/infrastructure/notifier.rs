use crate::domain::account::Account;
use crate::domain::ports::Notifier;

/// Delivers transfer notifications as structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_about_transfer(&self, account: &Account, message: &str) {
        tracing::info!(
            target: "account_ledger::notification",
            account = %account.id,
            balance = %account.balance,
            text = message,
            "notification sent"
        );
    }
}
