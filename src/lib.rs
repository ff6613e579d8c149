pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::{
    KeyValueStore, Ledger, SystemClock, TransactionDraft, TransactionRepository, TypeFilter,
    UuidGenerator,
};
use crate::store::DiskStore;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Subdirectory of the data path holding the ledger keyspace.
const LEDGER_DIR: &str = "ledger";

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Summary,
    Recent { count: Option<usize> },
    List { type_filter: TypeFilter, query: String },
    Add(TransactionDraft),
    Delete { id: String },
    Clear { assume_yes: bool },
}

/// Opens the on-disk ledger described by `config`.
pub fn open_ledger(config: &AppConfig) -> Result<Ledger<DiskStore>> {
    let path = config.default_data_path()?.join(LEDGER_DIR);
    debug!("Opening ledger at {}", path.display());
    let store = DiskStore::open(&path)
        .with_context(|| format!("Failed to open ledger at {}", path.display()))?;
    let ledger = Ledger::open(
        TransactionRepository::new(store),
        Box::new(UuidGenerator),
        Box::new(SystemClock),
    )?;
    Ok(ledger)
}

/// Runs `command` against `ledger` and returns what should be shown to the user.
pub fn execute<S: KeyValueStore>(
    command: AppCommand,
    ledger: &mut Ledger<S>,
    config: &AppConfig,
) -> Result<String> {
    let currency = &config.currency;
    match command {
        AppCommand::Summary => Ok(cli::summary::render(ledger, currency, config.recent_count)),
        AppCommand::Recent { count } => Ok(cli::transactions::recent(
            ledger,
            count.unwrap_or(config.recent_count),
            currency,
        )),
        AppCommand::List { type_filter, query } => Ok(cli::transactions::list(
            ledger,
            type_filter,
            &query,
            currency,
        )),
        AppCommand::Add(draft) => cli::transactions::add(ledger, draft, currency),
        AppCommand::Delete { id } => cli::transactions::delete(ledger, &id),
        AppCommand::Clear { assume_yes } => {
            let outcome = cli::transactions::clear(ledger, || {
                if assume_yes {
                    Ok(true)
                } else {
                    cli::transactions::confirm_on_terminal("Delete ALL transactions?")
                }
            })?;
            Ok(outcome.unwrap_or_else(|| "Nothing deleted".to_string()))
        }
    }
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Coinguard starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let mut ledger = open_ledger(&config)?;
    let output = execute(command, &mut ledger, &config)?;
    println!("{output}");
    Ok(())
}
