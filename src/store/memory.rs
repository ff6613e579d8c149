use crate::core::storage::{KeyValueStore, StorageError};
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// In-process store. Nothing survives the process; used by tests and dry runs.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, Vec<u8>>>,
    writes: AtomicUsize,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, standing in for an inaccessible backend.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of successful `put` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable(
                "memory store is offline".to_string(),
            ));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        self.check_available()?;
        let map = self
            .inner
            .read()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        let value = map.get(key).cloned();
        if value.is_some() {
            debug!("Store HIT for key: {}", key);
        } else {
            debug!("Store MISS for key: {}", key);
        }
        Ok(value)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.check_available()?;
        let mut map = self
            .inner
            .write()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        map.insert(key.to_string(), value.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        debug!("Store PUT for key: {}", key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_put() {
        let store = MemoryStore::new();

        assert!(store.get("key1").unwrap().is_none());

        store.put("key1", b"123").unwrap();
        assert_eq!(store.get("key1").unwrap(), Some(b"123".to_vec()));
        assert!(store.get("key2").unwrap().is_none());
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_unavailable_store_fails() {
        let store = MemoryStore::unavailable();
        assert!(matches!(
            store.get("key1"),
            Err(StorageError::Unavailable(_))
        ));
        assert!(store.put("key1", b"x").is_err());
        assert_eq!(store.writes(), 0);
    }
}
