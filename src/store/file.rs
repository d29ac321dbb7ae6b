//! Draft store persisted as a JSON document on disk

use super::traits::DraftStore;
use crate::error::StoreError;
use directories::ProjectDirs;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Draft store backed by a JSON object of key/value strings
#[derive(Debug)]
pub struct FileDraftStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileDraftStore {
    /// Default location under the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "folio", "folio-contact")
            .map(|dirs| dirs.data_dir().join("draft.json"))
    }

    /// Open the store at `path`, starting empty when the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "opened draft store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file a new document is written to before replacing the draft
    fn staging_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Write the whole document to a sibling file, then rename it over the draft
    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        let staging = self.staging_path();
        fs::write(&staging, content)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl DraftStore for FileDraftStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
