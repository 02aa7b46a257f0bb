use super::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Capital letter followed by at least one lowercase letter. Only the
// beginning is anchored, so "Иван Петров" or "Инженер-программист" pass.
const WORD_PATTERN: &str = r"^[А-ЯЁA-Z][а-яёa-z]+";
const PHONE_PATTERN: &str = r"^\+[0-9] [0-9]{3} [0-9]{3} [0-9]{2} [0-9]{2}$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub vacancy: String,
    pub phone: String,
}

/// The three user-entered fields of a contact, before an id exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub vacancy: String,
    pub phone: String,
}

/// Validation rules in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    AllFields,
    Name,
    Vacancy,
    Phone,
}

impl Requirement {
    pub fn message(&self) -> String {
        match self {
            Requirement::AllFields => "All fields are required".to_string(),
            Requirement::Name => {
                "Name must start with a capital letter and be at least 2 characters".to_string()
            }
            Requirement::Vacancy => {
                "Role/title must start with a capital letter and be at least 2 characters"
                    .to_string()
            }
            Requirement::Phone => "Phone must be in the format +X XXX XXX XX XX".to_string(),
        }
    }
}

impl Contact {
    /// Mints a fresh id for an already validated draft.
    pub fn new(draft: ContactDraft) -> Self {
        Contact {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            vacancy: draft.vacancy,
            phone: draft.phone,
        }
    }

    /// First character of the name, upper-cased.
    pub fn leading_letter(&self) -> Option<char> {
        leading_letter(&self.name)
    }

    pub fn draft(&self) -> ContactDraft {
        ContactDraft::new(&self.name, &self.vacancy, &self.phone)
    }

    pub(crate) fn replace_fields(&mut self, draft: ContactDraft) {
        self.name = draft.name;
        self.vacancy = draft.vacancy;
        self.phone = draft.phone;
    }
}

impl ContactDraft {
    pub fn new(name: &str, vacancy: &str, phone: &str) -> Self {
        ContactDraft {
            name: name.to_string(),
            vacancy: vacancy.to_string(),
            phone: phone.to_string(),
        }
    }

    pub fn trimmed(&self) -> Self {
        ContactDraft::new(self.name.trim(), self.vacancy.trim(), self.phone.trim())
    }

    /// Returns the first rule the draft breaks, if any. Later rules are not
    /// evaluated once one fails.
    pub fn first_failed_rule(&self) -> Result<Option<Requirement>, AppError> {
        let name = self.name.trim();
        let vacancy = self.vacancy.trim();
        let phone = self.phone.trim();

        if name.is_empty() || vacancy.is_empty() || phone.is_empty() {
            return Ok(Some(Requirement::AllFields));
        }

        let word = Regex::new(WORD_PATTERN)?;
        if !word.is_match(name) {
            return Ok(Some(Requirement::Name));
        }
        if !word.is_match(vacancy) {
            return Ok(Some(Requirement::Vacancy));
        }

        let phone_re = Regex::new(PHONE_PATTERN)?;
        if !phone_re.is_match(phone) {
            return Ok(Some(Requirement::Phone));
        }

        Ok(None)
    }

    /// Empty string when the draft is valid.
    pub fn validation_message(&self) -> Result<String, AppError> {
        Ok(self
            .first_failed_rule()?
            .map(|req| req.message())
            .unwrap_or_default())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        match self.first_failed_rule()? {
            Some(req) => Err(AppError::Validation(req.message())),
            None => Ok(()),
        }
    }
}

pub fn leading_letter(name: &str) -> Option<char> {
    name.chars().next().and_then(|c| c.to_uppercase().next())
}
