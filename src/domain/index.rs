use super::*;
use std::collections::HashMap;

/// Russian alphabet followed by Latin capitals, in display order.
pub const ALPHABET: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterGroup {
    pub letter: char,
    pub count: usize,
}

impl LetterGroup {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// "И (2)" for populated letters, the bare letter otherwise.
    pub fn label(&self) -> String {
        if self.is_empty() {
            self.letter.to_string()
        } else {
            format!("{} ({})", self.letter, self.count)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum LetterSelection<'a> {
    Contacts(Vec<&'a Contact>),
    Empty,
}

pub fn alphabet() -> impl Iterator<Item = char> {
    ALPHABET.chars()
}

pub fn create_letter_index(contact_list: &[Contact]) -> HashMap<char, usize> {
    let mut index: HashMap<char, usize> = HashMap::new();

    for contact in contact_list {
        if let Some(key) = contact.leading_letter() {
            *index.entry(key).or_default() += 1;
        }
    }

    index
}

pub fn group_counts(contact_list: &[Contact]) -> Vec<LetterGroup> {
    let index = create_letter_index(contact_list);

    alphabet()
        .map(|letter| LetterGroup {
            letter,
            count: index.get(&letter).copied().unwrap_or_default(),
        })
        .collect()
}

pub fn contacts_by_letter(letter: char, contact_list: &[Contact]) -> LetterSelection<'_> {
    let key = letter.to_uppercase().next().unwrap_or(letter);

    let matched: Vec<&Contact> = contact_list
        .iter()
        .filter(|c| c.leading_letter() == Some(key))
        .collect();

    if matched.is_empty() {
        LetterSelection::Empty
    } else {
        LetterSelection::Contacts(matched)
    }
}
