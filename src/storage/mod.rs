pub mod contacts;
pub mod file;
pub mod memory;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use contacts::ContactStorage;
pub use file::FileStorage;
pub use memory::MemStorage;

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/local_storage.json";
pub const DEFAULT_STORAGE_KEY: &str = "contactsList";

/// A string-keyed store of string values, the same shape as browser local
/// storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    File,
    Mem,
}

impl StorageMediums {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "file" | "json" => Ok(StorageMediums::File),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::ParseCommand(str.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub medium: StorageMediums,
    pub path: String,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            medium: StorageMediums::File,
            path: DEFAULT_STORAGE_PATH.to_string(),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl StorageConfig {
    pub fn open(&self) -> ContactStorage {
        ContactStorage::new(parse_storage_type(self.medium, &self.path), &self.key)
    }
}

pub fn parse_storage_type(medium: StorageMediums, path: &str) -> Box<dyn KeyValueStore> {
    match medium {
        StorageMediums::File => Box::new(FileStorage::new(path)),
        StorageMediums::Mem => Box::new(MemStorage::new()),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
