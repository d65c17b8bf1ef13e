use account_ledger::application::engine::LedgerEngine;
use account_ledger::config::{Cli, Command};
use account_ledger::domain::ports::{LedgerRef, NotifierRef};
use account_ledger::infrastructure::in_memory::InMemoryLedger;
use account_ledger::infrastructure::notifier::LogNotifier;
use account_ledger::interfaces::csv::account_writer::AccountWriter;
use account_ledger::interfaces::csv::command_reader::CommandReader;
use account_ledger::{interfaces, telemetry};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_format);

    let ledger: LedgerRef = Arc::new(InMemoryLedger::new());
    let notifier: NotifierRef = Arc::new(LogNotifier);
    let engine = LedgerEngine::new(ledger, notifier);

    match cli.command {
        Command::Replay { input } => replay(engine, &input).await,
        Command::Serve { bind } => interfaces::http::serve(bind, Arc::new(engine))
            .await
            .into_diagnostic(),
    }
}

async fn replay(engine: LedgerEngine, input: &Path) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command in reader.commands() {
        match command {
            Ok(command) => {
                if let Err(e) = engine.process_command(command).await {
                    tracing::warn!(error = %e, "Error processing command");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error reading command");
            }
        }
    }

    let accounts = engine.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(accounts).into_diagnostic()?;

    Ok(())
}
