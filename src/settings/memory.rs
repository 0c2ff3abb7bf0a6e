//! In-memory settings, for tests and embedding

use serde_json::Value;
use std::collections::BTreeMap;

use super::{Result, Settings};

#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: BTreeMap<String, Value>,
    writes: usize,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without counting it as a write
    pub fn with_value(mut self, key: &str, value: Value) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Settings for MemorySettings {
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.values.remove(key).is_some())
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}
