// src/persistence.rs
//! Local key/value persistence for client state
//!
//! Stores opaque JSON blobs under namespaced string keys. No transactional
//! semantics; concurrent writers are last-writer-wins, and the CLI is the
//! only writer in this repo.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Synchronous blob storage keyed by namespaced strings.
pub trait StorageAdapter: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// One JSON file per key under a storage directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create storage directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl StorageAdapter for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read storage entry: {}", path.display()))?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write storage entry: {}", path.display()))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove storage entry: {}", path.display()))?;
        }
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral shells.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Normalize a storage key for file system usage.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("notifications"), "notifications");
        assert_eq!(sanitize_key("interactions:company-1"), "interactions_company-1");
        assert_eq!(sanitize_key("a/b c"), "a_b_c");
    }

    #[test]
    fn test_memory_storage_get_set_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get("k").unwrap().is_none());

        storage.set("k", "v1").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v1"));

        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));

        storage.remove("k").unwrap();
        assert!(storage.get("k").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.set("interactions:company-1", r#"[{"x":1}]"#).unwrap();
        assert_eq!(
            storage.get("interactions:company-1").unwrap().as_deref(),
            Some(r#"[{"x":1}]"#)
        );

        // A second adapter over the same directory sees the entry.
        let reopened = FileStorage::new(dir.path().to_path_buf()).unwrap();
        assert!(reopened.get("interactions:company-1").unwrap().is_some());

        storage.remove("interactions:company-1").unwrap();
        assert!(storage.get("interactions:company-1").unwrap().is_none());
        // Removing an absent key is a no-op.
        storage.remove("interactions:company-1").unwrap();
    }
}
