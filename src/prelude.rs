pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactDraft, Requirement},
    index::{ALPHABET, LetterGroup, LetterSelection},
    manager::ContactManager,
    search::SearchOutcome,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, ContactStorage, FileStorage, KeyValueStore, MemStorage, StorageConfig, StorageMediums,
};
