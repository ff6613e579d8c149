//! Core ledger engine: data model, persistence contract, aggregation and views

pub mod analytics;
pub mod clock;
pub mod config;
pub mod id;
pub mod ledger;
pub mod log;
pub mod storage;
pub mod transaction;
pub mod view;

// Re-export main types for cleaner imports
pub use analytics::{MonthKey, Summary};
pub use clock::{Clock, FixedClock, SystemClock};
pub use id::{IdGenerator, SequentialIds, UuidGenerator};
pub use ledger::{Ledger, LedgerError};
pub use storage::{KeyValueStore, StorageError, TransactionRepository};
pub use transaction::{
    Transaction, TransactionDraft, TransactionId, TransactionType, ValidationError,
};
pub use view::TypeFilter;
