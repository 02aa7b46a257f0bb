use super::*;
use std::collections::HashSet;

/// Reads and writes the whole contact collection under one key.
pub struct ContactStorage {
    backend: Box<dyn KeyValueStore>,
    key: String,
}

impl ContactStorage {
    pub fn new(backend: Box<dyn KeyValueStore>, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get_medium(&self) -> &str {
        self.backend.get_medium()
    }

    /// A missing key is an empty collection. Malformed data is an error,
    /// never an empty collection.
    pub fn load(&self) -> Result<Vec<Contact>, AppError> {
        let Some(data) = self.backend.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        let contacts: Vec<Contact> = serde_json::from_str(&data).map_err(|e| {
            AppError::CorruptData(format!("value of '{}' is not a contact list: {}", self.key, e))
        })?;

        let mut seen: HashSet<&str> = HashSet::with_capacity(contacts.len());
        for contact in &contacts {
            if !seen.insert(contact.id.as_str()) {
                return Err(AppError::CorruptData(format!(
                    "duplicate contact id '{}'",
                    contact.id
                )));
            }
        }

        Ok(contacts)
    }

    pub fn save(&mut self, contacts: &[Contact]) -> Result<(), AppError> {
        let data = serde_json::to_string(contacts)?;
        self.backend.set_item(&self.key, &data)
    }
}
