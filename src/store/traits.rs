//! Trait abstraction for the persisted draft store to enable mocking in tests

use crate::error::StoreError;

/// Key-value string store holding the in-progress draft
#[cfg_attr(test, mockall::automock)]
pub trait DraftStore: Send {
    /// Read a persisted value
    fn get(&self, key: &str) -> Option<String>;

    /// Persist a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Drop a persisted value; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
