use super::*;

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Read;

/// Key-value store kept as one JSON object on disk.
pub struct FileStorage {
    pub medium: String,
    pub path: String,
}

impl FileStorage {
    pub fn new(path: &str) -> Self {
        Self {
            medium: "file".to_string(),
            path: path.to_string(),
        }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            return Ok(BTreeMap::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&data).map_err(|e| {
            AppError::CorruptData(format!("{} is not a JSON object of strings: {}", self.path, e))
        })
    }

    fn tmp_path(&self) -> String {
        format!("{}.tmp", self.path)
    }

    /// Writes to a sibling temp file and renames it over the store, so a
    /// failed write never leaves a truncated store behind.
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let data = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
