use chrono::NaiveDate;
use coinguard::core::config::AppConfig;
use coinguard::core::storage::STORAGE_KEY;
use coinguard::core::{
    FixedClock, KeyValueStore, Ledger, SequentialIds, TransactionDraft, TransactionRepository,
    TransactionType, TypeFilter,
};
use coinguard::store::MemoryStore;
use coinguard::{AppCommand, execute, open_ledger, run_command};
use std::fs;
use tracing::info;

mod test_utils {
    use std::fs;
    use std::path::Path;

    /// Writes a config pointing the data directory into `dir` and returns its path.
    pub fn write_config(dir: &Path) -> String {
        let data_path = dir.join("data");
        let config_path = dir.join("config.yaml");
        let config_content = format!(
            r#"
currency: "USD"
recent_count: 3
data_path: "{}"
"#,
            data_path.display()
        );
        fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path.to_str().unwrap().to_string()
    }
}

fn memory_ledger(today: NaiveDate) -> Ledger<MemoryStore> {
    let store = MemoryStore::new();
    store.put(STORAGE_KEY, b"[]").unwrap();
    Ledger::open(
        TransactionRepository::new(store),
        Box::new(SequentialIds::new("tx")),
        Box::new(FixedClock(today)),
    )
    .unwrap()
}

#[test_log::test]
fn test_full_app_flow_on_disk() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(dir.path());

    let add = AppCommand::Add(TransactionDraft::new(
        TransactionType::Expense,
        "Rent payment",
        "Housing",
        800.0,
        "2025-02-01",
    ));
    let result = run_command(add, Some(&config_path));
    assert!(result.is_ok(), "Add failed with: {:?}", result.err());

    let result = run_command(AppCommand::Summary, Some(&config_path));
    assert!(result.is_ok(), "Summary failed with: {:?}", result.err());

    // The first mutation persisted the example seed together with the new entry.
    let config = AppConfig::load_from_path(&config_path).unwrap();
    let ledger = open_ledger(&config).unwrap();
    info!(count = ledger.len(), "Reopened ledger");
    assert_eq!(ledger.len(), 5);
    let rent = ledger.filtered(TypeFilter::All, "RENT");
    assert_eq!(rent.len(), 1);
    assert_eq!(rent[0].amount(), 800.0);
}

#[test_log::test]
fn test_clear_then_reload_is_empty() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(dir.path());

    let result = run_command(AppCommand::Clear { assume_yes: true }, Some(&config_path));
    assert!(result.is_ok(), "Clear failed with: {:?}", result.err());

    let config = AppConfig::load_from_path(&config_path).unwrap();
    let ledger = open_ledger(&config).unwrap();
    assert!(ledger.is_empty());
    assert_eq!(ledger.repository().load().unwrap(), Some(vec![]));
}

#[test_log::test]
fn test_delete_unknown_id_leaves_ledger_alone() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(dir.path());
    let config = AppConfig::load_from_path(&config_path).unwrap();

    let mut ledger = open_ledger(&config).unwrap();
    let before = ledger.transactions().to_vec();
    let out = execute(
        AppCommand::Delete {
            id: "nonexistent".to_string(),
        },
        &mut ledger,
        &config,
    )
    .unwrap();

    assert!(out.contains("No transaction with id nonexistent"));
    assert_eq!(ledger.transactions(), before.as_slice());
}

#[test_log::test]
fn test_invalid_config_path_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.yaml");
    let result = run_command(AppCommand::Summary, missing.to_str());
    assert!(result.is_err());
}

#[test_log::test]
fn test_dashboard_scenario() {
    let mut ledger = memory_ledger(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
    let config = AppConfig::default();

    let empty = execute(AppCommand::Summary, &mut ledger, &config).unwrap();
    assert!(empty.contains("No transactions yet. Add income or expense."));

    for draft in [
        TransactionDraft::new(TransactionType::Income, "Salary", "Salary", 1200.0, "2025-01-11"),
        TransactionDraft::new(TransactionType::Expense, "Food", "Food", 45.0, "2025-01-10"),
    ] {
        execute(AppCommand::Add(draft), &mut ledger, &config).unwrap();
    }

    let summary = ledger.summary();
    assert_eq!(summary.balance, 1155.0);
    assert_eq!(summary.total_income, 1200.0);
    assert_eq!(summary.total_expense, 45.0);

    let recent: Vec<_> = ledger.recent(5).iter().map(|t| t.title()).collect();
    assert_eq!(recent, ["Salary", "Food"]);

    let dashboard = execute(AppCommand::Summary, &mut ledger, &config).unwrap();
    assert!(dashboard.contains("USD 1155.00"));
    assert!(dashboard.contains("Salary"));
}

#[test_log::test]
fn test_rejected_add_does_not_write() {
    let mut ledger = memory_ledger(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
    let config = AppConfig::default();
    let writes_before = ledger.repository().store().writes();

    let result = execute(
        AppCommand::Add(TransactionDraft::new(
            TransactionType::Expense,
            "",
            "Food",
            10.0,
            "2025-02-01",
        )),
        &mut ledger,
        &config,
    );

    assert!(result.is_err());
    assert!(ledger.is_empty());
    assert_eq!(ledger.repository().store().writes(), writes_before);
}

#[test_log::test]
fn test_list_filters_by_type() {
    let mut ledger = memory_ledger(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
    let config = AppConfig::default();
    for draft in [
        TransactionDraft::new(TransactionType::Income, "Salary", "Salary", 1200.0, "2025-01-11"),
        TransactionDraft::new(TransactionType::Expense, "Groceries", "Food", 45.0, "2025-01-10"),
        TransactionDraft::new(TransactionType::Income, "Refund", "Misc", 5.0, "2025-01-15"),
    ] {
        ledger.create(draft).unwrap();
    }

    let incomes: Vec<_> = ledger
        .filtered(TypeFilter::Income, "")
        .iter()
        .map(|t| t.title())
        .collect();
    assert_eq!(incomes, ["Refund", "Salary"]);

    let out = execute(
        AppCommand::List {
            type_filter: TypeFilter::Expense,
            query: "yacht".to_string(),
        },
        &mut ledger,
        &config,
    )
    .unwrap();
    assert!(out.contains("No matching transactions."));
}

#[test]
fn test_example_config_file_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    coinguard::cli::setup::setup_at_path(&path).unwrap();
    let config = AppConfig::load_from_path(&path).unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(fs::read_to_string(&path).unwrap().contains("recent_count"));
}
