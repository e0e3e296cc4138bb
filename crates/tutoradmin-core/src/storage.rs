//! Durable key-value storage used for client-side state.
//!
//! Defines the interface the session store persists through, plus an
//! in-memory implementation for tests and ephemeral sessions.

use crate::error::Result;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// String entries keyed by fixed names, in the manner of browser local storage.
///
/// # Implementation Notes
///
/// Each call must be durable on return; callers never flush explicitly.
pub trait KeyValueStore: Send + Sync {
    /// Reads an entry.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: Entry present
    /// - `Ok(None)`: Entry absent
    /// - `Err(_)`: Storage could not be read
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes an entry, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes several entries in one write. Absent keys are ignored.
    fn remove(&self, keys: &[&str]) -> Result<()>;

    /// Writes several entries in one write.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Process-local store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, keys: &[&str]) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_remove() {
        let store = MemoryKeyValueStore::new();
        assert!(store.get("auth_token").unwrap().is_none());

        store.set("auth_token", "tok").unwrap();
        store.set("admin_user", "{}").unwrap();
        assert_eq!(store.get("auth_token").unwrap().as_deref(), Some("tok"));
        assert_eq!(store.len(), 2);

        store.remove(&["auth_token", "missing"]).unwrap();
        assert!(store.get("auth_token").unwrap().is_none());
        assert_eq!(store.len(), 1);
    }
}
