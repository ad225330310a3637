//! In-memory configuration source

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::ConfigSource;

/// In-memory configuration source, primarily for testing
#[derive(Debug, Default)]
pub struct MemoryConfigSource {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryConfigSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Builder-style insert
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a value
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut guard = self.values.write().unwrap();
        guard.insert(key.into(), value.into());
    }

    /// Remove a value
    pub fn remove(&self, key: &str) {
        let mut guard = self.values.write().unwrap();
        guard.remove(key);
    }
}

impl ConfigSource for MemoryConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        let guard = self.values.read().unwrap();
        guard.get(key).cloned()
    }
}
