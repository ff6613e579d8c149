//! The ledger: sole owner of the transaction collection.
//!
//! Every mutation goes through [`Ledger`], which writes the complete collection back to
//! storage before the in-memory state changes. Reads hand out shared borrows only.

use crate::core::analytics::{self, Summary};
use crate::core::clock::Clock;
use crate::core::id::IdGenerator;
use crate::core::storage::{KeyValueStore, StorageError, TransactionRepository};
use crate::core::transaction::{
    Transaction, TransactionDraft, TransactionId, TransactionType, ValidationError,
};
use crate::core::view::{self, TypeFilter};
use thiserror::Error;
use tracing::{debug, info};

/// How many fresh ids to try before giving up on a colliding generator.
const MAX_ID_ATTEMPTS: usize = 16;

/// Default size of the recent view.
pub const DEFAULT_RECENT: usize = 5;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid transaction: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("could not generate a unique transaction id after {0} attempts")]
    IdExhausted(usize),
}

/// Example data installed when nothing usable is persisted.
const SEED: [(TransactionType, &str, &str, f64, &str); 4] = [
    (
        TransactionType::Income,
        "Freelance",
        "Freelance",
        310.0,
        "2025-01-08",
    ),
    (
        TransactionType::Expense,
        "Transport",
        "Transport",
        6.0,
        "2025-01-09",
    ),
    (
        TransactionType::Expense,
        "Groceries",
        "Food",
        45.0,
        "2025-01-10",
    ),
    (
        TransactionType::Income,
        "Salary",
        "Salary",
        1200.0,
        "2025-01-11",
    ),
];

pub struct Ledger<S: KeyValueStore> {
    transactions: Vec<Transaction>,
    repository: TransactionRepository<S>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Loads the persisted collection, or installs the example seed if there is none.
    ///
    /// The seed is kept in memory only; it is written on the first mutation.
    pub fn open(
        repository: TransactionRepository<S>,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, LedgerError> {
        let mut ledger = Self {
            transactions: Vec::new(),
            repository,
            ids,
            clock,
        };

        match ledger.repository.load()? {
            Some(transactions) => ledger.transactions = transactions,
            None => {
                info!("No saved transactions found, using example data");
                for (kind, title, category, amount, date) in SEED {
                    let valid =
                        TransactionDraft::new(kind, title, category, amount, date).validate()?;
                    let id = ledger.fresh_id()?;
                    ledger.transactions.push(Transaction::from_valid(id, valid));
                }
            }
        }
        Ok(ledger)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn repository(&self) -> &TransactionRepository<S> {
        &self.repository
    }

    /// Validates `draft`, assigns it a fresh id and persists the grown collection.
    ///
    /// A rejected draft leaves both memory and storage untouched.
    pub fn create(&mut self, draft: TransactionDraft) -> Result<Transaction, LedgerError> {
        let valid = draft.validate()?;
        let id = self.fresh_id()?;
        let transaction = Transaction::from_valid(id, valid);

        let mut next = self.transactions.clone();
        next.push(transaction.clone());
        self.commit(next)?;

        info!(
            id = %transaction.id(),
            kind = %transaction.kind(),
            amount = transaction.amount(),
            "Created transaction"
        );
        Ok(transaction)
    }

    /// Removes the transaction with `id`. Returns `false` if there was none.
    pub fn delete_by_id(&mut self, id: &TransactionId) -> Result<bool, StorageError> {
        let Some(index) = self.transactions.iter().position(|t| t.id() == id) else {
            debug!("No transaction with id {} to delete", id);
            return Ok(false);
        };

        let mut next = self.transactions.clone();
        next.remove(index);
        self.commit(next)?;

        info!(%id, "Deleted transaction");
        Ok(true)
    }

    /// Removes every transaction. Callers are expected to confirm with the user first.
    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        let removed = self.transactions.len();
        self.commit(Vec::new())?;
        info!(removed, "Cleared all transactions");
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        analytics::summarize(&self.transactions, self.clock.today())
    }

    pub fn recent(&self, n: usize) -> Vec<&Transaction> {
        view::recent(&self.transactions, n)
    }

    pub fn filtered(&self, type_filter: TypeFilter, query: &str) -> Vec<&Transaction> {
        view::filtered(&self.transactions, type_filter, query)
    }

    /// Today's date according to the ledger's clock.
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    fn fresh_id(&self) -> Result<TransactionId, LedgerError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.new_id();
            if self.get(&id).is_none() {
                return Ok(id);
            }
            debug!("Generated id {} already in use, retrying", id);
        }
        Err(LedgerError::IdExhausted(MAX_ID_ATTEMPTS))
    }

    fn commit(&mut self, next: Vec<Transaction>) -> Result<(), StorageError> {
        self.repository.save(&next)?;
        self.transactions = next;
        Ok(())
    }
}
