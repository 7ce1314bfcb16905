//! File-Backed Store
//!
//! [`KeyValueStore`] persisting every entry in a single JSON object file.
//! The map is loaded lazily on first use and kept in memory; every mutation
//! is written back through a temporary file and an atomic rename so a crash
//! mid-write never leaves a truncated store behind. The cached map only
//! commits once the write lands, so a failed write leaves cache and disk
//! in agreement.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::StorageResult;
use crate::store::KeyValueStore;

/// JSON-file-backed key-value store
#[derive(Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: Arc<Mutex<Option<HashMap<String, String>>>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Arc::new(Mutex::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the map from disk if this is the first access
    async fn loaded<'a>(
        &self,
        guard: &'a mut MutexGuard<'_, Option<HashMap<String, String>>>,
    ) -> StorageResult<&'a mut HashMap<String, String>> {
        if guard.is_none() {
            let entries = match fs::read(&self.path).await {
                Ok(bytes) => match serde_json::from_slice(&bytes) {
                    Ok(entries) => entries,
                    Err(err) => {
                        tracing::warn!(
                            path = %self.path.display(),
                            error = %err,
                            "Store file is corrupt"
                        );
                        return Err(err.into());
                    }
                },
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
                Err(e) => return Err(e.into()),
            };
            **guard = Some(entries);
        }
        Ok(guard.as_mut().expect("entries loaded above"))
    }

    /// Write the full map back to disk atomically
    async fn persist(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        let json = serde_json::to_vec_pretty(entries)?;

        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, &json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut guard = self.entries.lock().await;
        let entries = self.loaded(&mut guard).await?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut guard = self.entries.lock().await;
        let entries = self.loaded(&mut guard).await?;
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.persist(&updated).await?;
        *entries = updated;
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let mut guard = self.entries.lock().await;
        let entries = self.loaded(&mut guard).await?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut updated = entries.clone();
        updated.remove(key);
        self.persist(&updated).await?;
        *entries = updated;
        Ok(())
    }

    async fn clear(&self, keys: &[&str]) -> StorageResult<()> {
        let mut guard = self.entries.lock().await;
        let entries = self.loaded(&mut guard).await?;
        let mut updated = entries.clone();
        let mut changed = false;
        for key in keys {
            changed |= updated.remove(*key).is_some();
        }
        if !changed {
            return Ok(());
        }
        self.persist(&updated).await?;
        *entries = updated;
        Ok(())
    }
}
