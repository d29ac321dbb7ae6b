//! Process-local draft store

use super::traits::DraftStore;
use crate::error::StoreError;
use std::collections::HashMap;

/// Draft store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
    entries: HashMap<String, String>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing entries
    #[cfg(test)]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DraftStore for MemoryDraftStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryDraftStore::new();
        assert!(store.is_empty());
        assert!(store.get("contact_name").is_none());
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryDraftStore::new();
        assert_ok!(store.set("contact_name", "Ada"));
        assert_eq!(store.get("contact_name"), Some("Ada".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryDraftStore::with_entries([("contact_name", "Ada")]);
        assert_ok!(store.set("contact_name", "Grace"));
        assert_eq!(store.get("contact_name"), Some("Grace".to_string()));
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let mut store = MemoryDraftStore::with_entries([("contact_name", "Ada")]);
        assert_ok!(store.remove("contact_name"));
        assert_ok!(store.remove("contact_name"));
        assert!(store.is_empty());
    }
}
