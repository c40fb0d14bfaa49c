use std::collections::HashMap;
use std::path::PathBuf;

use alpha_core::AlphaError;

/// Opaque key-value storage capability.
///
/// Mirrors the get/set/remove surface of the mobile client's async storage.
/// Implementations decide where values live; callers only see strings.
pub trait KeyValue {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, AlphaError>;

    /// Store `value` under `key`, replacing any existing value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), AlphaError>;

    /// Delete the value stored under `key`. Deleting a missing key is not
    /// an error.
    fn remove(&mut self, key: &str) -> Result<(), AlphaError>;
}

/// File-backed store: one file per key under a data directory.
///
/// The directory is created lazily on first write.
///
/// # Examples
///
/// ```no_run
/// use alpha_store::{FileStore, KeyValue};
///
/// let mut store = FileStore::new(".alpha".into());
/// store.set("settings", "{}").unwrap();
/// assert!(store.get("settings").unwrap().is_some());
/// ```
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValue for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AlphaError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path).map_err(|e| {
            AlphaError::Storage(format!("failed to read {}: {e}", path.display()))
        })?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AlphaError> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| {
                AlphaError::Storage(format!(
                    "failed to create data directory {}: {e}",
                    self.dir.display()
                ))
            })?;
        }
        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|e| {
            AlphaError::Storage(format!("failed to write {}: {e}", path.display()))
        })?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AlphaError> {
        let path = self.path_for(key);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                AlphaError::Storage(format!("failed to remove {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AlphaError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AlphaError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AlphaError> {
        self.values.remove(key);
        Ok(())
    }
}
