pub mod contact;
pub mod index;
pub mod manager;
pub mod search;

use crate::errors::AppError;
use contact::{Contact, ContactDraft};
