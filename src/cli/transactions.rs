use super::ui;
use crate::core::ledger::Ledger;
use crate::core::storage::KeyValueStore;
use crate::core::transaction::{TransactionDraft, TransactionId};
use crate::core::view::TypeFilter;
use anyhow::{Context, Result};
use tracing::info;

pub const NO_MATCHES: &str = "No matching transactions.";

pub fn recent<S: KeyValueStore>(ledger: &Ledger<S>, count: usize, currency: &str) -> String {
    ui::transactions_table(
        &ledger.recent(count),
        currency,
        super::summary::NO_TRANSACTIONS,
    )
}

pub fn list<S: KeyValueStore>(
    ledger: &Ledger<S>,
    type_filter: TypeFilter,
    query: &str,
    currency: &str,
) -> String {
    ui::transactions_table(&ledger.filtered(type_filter, query), currency, NO_MATCHES)
}

/// Records a new transaction. A draft without a date is dated today.
pub fn add<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    mut draft: TransactionDraft,
    currency: &str,
) -> Result<String> {
    if draft.date.trim().is_empty() {
        draft.date = ledger.today().format("%Y-%m-%d").to_string();
    }
    let created = ledger
        .create(draft)
        .context("Failed to add transaction")?;
    Ok(format!(
        "Added {} {} ({}) on {} [{}]",
        created.kind(),
        ui::style_text(created.title(), ui::StyleType::TotalLabel),
        ui::format_money(created.amount(), currency),
        created.date().format("%Y-%m-%d"),
        created.id()
    ))
}

pub fn delete<S: KeyValueStore>(ledger: &mut Ledger<S>, id: &str) -> Result<String> {
    let id = TransactionId::from(id);
    let removed = ledger
        .delete_by_id(&id)
        .context("Failed to delete transaction")?;
    Ok(if removed {
        format!("Deleted transaction {id}")
    } else {
        ui::style_text(
            &format!("No transaction with id {id}"),
            ui::StyleType::Subtle,
        )
    })
}

/// Deletes everything once `confirm` agrees. Returns `None` when the user declined.
pub fn clear<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    confirm: impl FnOnce() -> Result<bool>,
) -> Result<Option<String>> {
    if !confirm()? {
        info!("Clear cancelled by user");
        return Ok(None);
    }
    let count = ledger.len();
    ledger
        .clear_all()
        .context("Failed to clear transactions")?;
    Ok(Some(format!("Deleted {count} transactions")))
}

/// Asks on the terminal before a destructive operation.
pub fn confirm_on_terminal(prompt: &str) -> Result<bool> {
    let term = console::Term::stdout();
    term.write_str(&format!("{prompt} [y/N] "))?;
    let answer = term.read_line()?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::id::SequentialIds;
    use crate::core::storage::{STORAGE_KEY, TransactionRepository};
    use crate::core::transaction::TransactionType;
    use crate::store::memory::MemoryStore;
    use chrono::NaiveDate;

    fn ledger() -> Ledger<MemoryStore> {
        let store = MemoryStore::new();
        store.put(STORAGE_KEY, b"[]").unwrap();
        Ledger::open(
            TransactionRepository::new(store),
            Box::new(SequentialIds::new("tx")),
            Box::new(FixedClock(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap())),
        )
        .unwrap()
    }

    #[test]
    fn test_add_defaults_date_to_today() {
        let mut ledger = ledger();
        let draft = TransactionDraft::new(TransactionType::Expense, "Coffee", "Food", 3.5, "");

        let out = add(&mut ledger, draft, "USD").unwrap();

        assert!(out.contains("2025-03-04"));
        assert!(out.contains("tx-1"));
        assert_eq!(
            ledger.transactions()[0].date(),
            NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
        );
    }

    #[test]
    fn test_add_reports_validation_error() {
        let mut ledger = ledger();
        let draft = TransactionDraft::new(TransactionType::Expense, "Coffee", "", 3.5, "");

        let err = add(&mut ledger, draft, "USD").unwrap_err();
        assert!(format!("{err:#}").contains("category must not be empty"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_delete_reports_outcome() {
        let mut ledger = ledger();
        let draft =
            TransactionDraft::new(TransactionType::Income, "Gift", "Misc", 20.0, "2025-03-01");
        add(&mut ledger, draft, "USD").unwrap();

        assert!(delete(&mut ledger, "missing").unwrap().contains("No transaction"));
        assert!(delete(&mut ledger, "tx-1").unwrap().contains("Deleted"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_clear_respects_confirmation() {
        let mut ledger = ledger();
        let draft =
            TransactionDraft::new(TransactionType::Income, "Gift", "Misc", 20.0, "2025-03-01");
        add(&mut ledger, draft, "USD").unwrap();

        assert!(clear(&mut ledger, || Ok(false)).unwrap().is_none());
        assert_eq!(ledger.len(), 1);

        let out = clear(&mut ledger, || Ok(true)).unwrap();
        assert_eq!(out.as_deref(), Some("Deleted 1 transactions"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_list_empty_state() {
        let ledger = ledger();
        assert!(list(&ledger, TypeFilter::All, "x", "USD").contains(NO_MATCHES));
    }
}
