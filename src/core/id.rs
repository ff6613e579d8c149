use crate::core::transaction::TransactionId;
use std::cell::Cell;

/// Produces identifiers for new transactions.
pub trait IdGenerator {
    fn new_id(&self) -> TransactionId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> TransactionId {
        TransactionId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic ids of the form `<prefix>-<n>`, starting at 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn new_id(&self) -> TransactionId {
        let n = self.next.get();
        self.next.set(n + 1);
        TransactionId::new(format!("{}-{}", self.prefix, n))
    }
}
