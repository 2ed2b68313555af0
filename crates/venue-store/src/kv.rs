use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::{Error, Result};

/// Injected key-value storage used for the small pieces of user state
/// (favorites, access flag).
///
/// Callers own a store instance and pass it in; nothing in this workspace
/// keeps ambient mutable state. Values are JSON documents so the persisted
/// form stays inspectable.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-backed store: one JSON document per key under `<root>/state/`.
///
/// Single-writer discipline only; the surrounding app has one logical
/// owner for this state and no concurrent writers.
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let root = data_dir.into().join("state");
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Keys are fixed identifiers, never user input; anything
        // path-shaped is a programming error upstream.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(Error::Config(format!("invalid state key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let path = self.path_for(key)?;
        fs::write(&path, serde_json::to_string_pretty(&value)?)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and ephemeral use.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: HashMap<String, Value>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
