//! Persistence contract for the ledger: a raw key-value seam plus the adapter that
//! reads and writes the transaction collection through it.

use crate::core::transaction::Transaction;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Name of the record holding the serialized ledger.
pub const STORAGE_KEY: &str = "coin_guard_transactions_v1";

#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying store could not be opened, read or written.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A durable map from string keys to opaque byte values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Overwrites any previous value under `key`.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        (**self).put(key, value)
    }
}

/// Serializes the whole transaction collection to a single JSON record.
pub struct TransactionRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TransactionRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the persisted collection.
    ///
    /// Returns `Ok(None)` when nothing is stored or the stored value is not a valid
    /// transaction list; callers fall back to default data. Only an unreachable store
    /// is reported as an error.
    pub fn load(&self) -> Result<Option<Vec<Transaction>>, StorageError> {
        let Some(raw) = self.store.get(&self.key)? else {
            debug!("No persisted ledger under {}", self.key);
            return Ok(None);
        };

        match decode(&raw) {
            Ok(transactions) => {
                debug!(
                    "Loaded {} transactions from {}",
                    transactions.len(),
                    self.key
                );
                Ok(Some(transactions))
            }
            Err(reason) => {
                warn!(key = %self.key, %reason, "Ignoring corrupt persisted ledger");
                Ok(None)
            }
        }
    }

    /// Replaces the persisted collection with `transactions`.
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(transactions)
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        self.store.put(&self.key, &bytes)?;
        debug!("Saved {} transactions to {}", transactions.len(), self.key);
        Ok(())
    }
}

fn decode(raw: &[u8]) -> Result<Vec<Transaction>, String> {
    let value: serde_json::Value = serde_json::from_slice(raw).map_err(|e| e.to_string())?;
    if !value.is_array() {
        return Err("persisted value is not a list".to_string());
    }
    let transactions: Vec<Transaction> =
        serde_json::from_value(value).map_err(|e| e.to_string())?;

    let mut seen = HashSet::new();
    for tx in &transactions {
        tx.check()
            .map_err(|e| format!("transaction {}: {e}", tx.id()))?;
        if !seen.insert(tx.id()) {
            return Err(format!("duplicate transaction id {}", tx.id()));
        }
    }
    Ok(transactions)
}
