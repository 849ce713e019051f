//! Key-value storage capability backing the weather cache.
//!
//! The widget keeps a single named slot; last write wins. The production
//! implementation persists each slot as a file under the platform cache
//! directory, the in-memory one exists for tests and embedding.

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};

/// A store of named string slots.
///
/// Reads never fail: a missing or unreadable slot is simply absent.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed store: one `<key>.json` file per slot under `dir`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store at the platform cache directory.
    pub fn open() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "breeze", "breeze")
            .ok_or_else(|| anyhow!("Could not determine platform cache directory"))?;

        Ok(Self { dir: dirs.cache_dir().to_path_buf() })
    }

    /// Open the store at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create cache directory: {}", self.dir.display()))?;

        let path = self.slot_path(key);
        fs::write(&path, value)
            .with_context(|| format!("Failed to write cache slot: {}", path.display()))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        if !path.exists() {
            // Clearing an empty slot is not an error.
            return Ok(());
        }

        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove cache slot: {}", path.display()))
    }
}

/// In-memory store. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .lock()
            .map_err(|_| anyhow!("store mutex poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots.lock().map_err(|_| anyhow!("store mutex poisoned"))?.remove(key);
        Ok(())
    }
}
