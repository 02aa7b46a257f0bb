use super::*;
use std::collections::HashMap;

/// Key-value store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemStorage {
    pub data: HashMap<String, String>,
    writes: usize,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_item` calls seen so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.data.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
