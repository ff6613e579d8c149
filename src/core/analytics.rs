//! Provides functions for computing balance and monthly totals over a ledger.
use crate::core::transaction::{Transaction, TransactionType};
use chrono::{Datelike, NaiveDate};
use std::fmt::Display;
use tracing::debug;

/// A calendar year and month, used to bucket transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Aggregate totals derived from the full ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// `total_income - total_expense`; negative when spending exceeds income.
    pub balance: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub month_income: f64,
    pub month_expense: f64,
    /// The month the `month_*` totals refer to.
    pub month: MonthKey,
}

/// Sums the ledger by type, overall and for the month containing `today`.
pub fn summarize(transactions: &[Transaction], today: NaiveDate) -> Summary {
    let month = MonthKey::of(today);

    let total_income = sum_where(transactions, |t| t.kind() == TransactionType::Income);
    let total_expense = sum_where(transactions, |t| t.kind() == TransactionType::Expense);
    let month_income = sum_where(transactions, |t| {
        t.kind() == TransactionType::Income && MonthKey::of(t.date()) == month
    });
    let month_expense = sum_where(transactions, |t| {
        t.kind() == TransactionType::Expense && MonthKey::of(t.date()) == month
    });

    let summary = Summary {
        balance: total_income - total_expense,
        total_income,
        total_expense,
        month_income,
        month_expense,
        month,
    };
    debug!(?summary, "Computed ledger summary");
    summary
}

fn sum_where(transactions: &[Transaction], pred: impl Fn(&Transaction) -> bool) -> f64 {
    transactions
        .iter()
        .filter(|t| pred(t))
        .map(Transaction::amount)
        .sum()
}
