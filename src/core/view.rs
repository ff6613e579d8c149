//! Read-only listings over the ledger, newest first.

use crate::core::transaction::{Transaction, TransactionType};
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Which transaction types a listing keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionType::Income,
            TypeFilter::Expense => kind == TransactionType::Expense,
        }
    }
}

impl Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TypeFilter::All => "all",
                TypeFilter::Income => "income",
                TypeFilter::Expense => "expense",
            }
        )
    }
}

impl FromStr for TypeFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            _ => Err(anyhow::anyhow!("Invalid type filter: {}", s)),
        }
    }
}

/// All transactions ordered by date, most recent first.
///
/// The sort is stable, so transactions sharing a date keep their ledger order.
pub fn sorted_by_date_desc(all: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = all.iter().collect();
    sorted.sort_by(|a, b| b.date().cmp(&a.date()));
    sorted
}

/// The `n` most recent transactions.
pub fn recent(all: &[Transaction], n: usize) -> Vec<&Transaction> {
    let mut sorted = sorted_by_date_desc(all);
    sorted.truncate(n);
    sorted
}

/// Transactions of the selected type whose title or category contains `query`,
/// ignoring case. A blank query keeps everything.
pub fn filtered<'a>(
    all: &'a [Transaction],
    type_filter: TypeFilter,
    query: &str,
) -> Vec<&'a Transaction> {
    let needle = query.trim().to_lowercase();

    let result: Vec<&Transaction> = sorted_by_date_desc(all)
        .into_iter()
        .filter(|t| type_filter.matches(t.kind()))
        .filter(|t| {
            needle.is_empty()
                || t.title().to_lowercase().contains(&needle)
                || t.category().to_lowercase().contains(&needle)
        })
        .collect();

    debug!(
        %type_filter,
        query = %needle,
        matched = result.len(),
        total = all.len(),
        "Filtered transactions"
    );
    result
}
