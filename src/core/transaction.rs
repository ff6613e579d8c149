//! The transaction record and the rules for building one from user input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Opaque identifier of a transaction, unique within a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransactionType::Income => "income",
                TransactionType::Expense => "expense",
            }
        )
    }
}

impl FromStr for TransactionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(anyhow::anyhow!("Invalid transaction type: {}", s)),
        }
    }
}

/// Reasons a draft is rejected by [`TransactionDraft::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("category must not be empty")]
    EmptyCategory,

    #[error("date is required")]
    MissingDate,

    /// The date was not a `YYYY-MM-DD` calendar date.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Amounts must be finite and strictly positive; the sign is carried by the type.
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),
}

/// An income or expense event.
///
/// Fields are private: a transaction is only ever produced by the ledger (or decoded
/// from storage) and is never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    #[serde(rename = "type")]
    kind: TransactionType,
    title: String,
    category: String,
    amount: f64,
    date: NaiveDate,
}

impl Transaction {
    pub(crate) fn from_valid(id: TransactionId, valid: ValidDraft) -> Self {
        Self {
            id,
            kind: valid.kind,
            title: valid.title,
            category: valid.category,
            amount: valid.amount,
            date: valid.date,
        }
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Re-checks the field constraints on a record that did not come through
    /// [`TransactionDraft::validate`], e.g. one decoded from storage.
    pub(crate) fn check(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        check_amount(self.amount)
    }
}

/// User supplied input for a new transaction, as received from a form or the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub title: String,
    pub category: String,
    pub amount: f64,
    /// Raw date text, expected as `YYYY-MM-DD`.
    pub date: String,
}

/// A draft that passed validation, with the date parsed and the title trimmed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidDraft {
    kind: TransactionType,
    title: String,
    category: String,
    amount: f64,
    date: NaiveDate,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionType,
        title: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            category: category.into(),
            amount,
            date: date.into(),
        }
    }

    pub(crate) fn validate(&self) -> Result<ValidDraft, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }
        let date_text = self.date.trim();
        if date_text.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date_text.to_string()))?;
        check_amount(self.amount)?;

        Ok(ValidDraft {
            kind: self.kind,
            title: title.to_string(),
            category: self.category.clone(),
            amount: self.amount,
            date,
        })
    }
}

fn check_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidAmount(amount))
    }
}
