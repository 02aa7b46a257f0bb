use crate::prelude::{Contact, LetterGroup, LetterSelection, SearchOutcome};

pub const NO_CONTACTS_FOR_LETTER: &str = "No contacts for this letter";
pub const NOTHING_FOUND: &str = "Nothing found";

/// What a contact card shows. The id is kept for the edit/delete actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub vacancy: &'a str,
    pub phone: &'a str,
}

impl<'a> From<&'a Contact> for ContactCard<'a> {
    fn from(contact: &'a Contact) -> Self {
        ContactCard {
            id: &contact.id,
            name: &contact.name,
            vacancy: &contact.vacancy,
            phone: &contact.phone,
        }
    }
}

impl ContactCard<'_> {
    pub fn render(&self) -> String {
        format!(
            "{}  {:<20} {:<20} {}",
            self.id, self.name, self.vacancy, self.phone
        )
    }
}

fn render_cards(contacts: &[&Contact]) -> Vec<String> {
    contacts
        .iter()
        .map(|&c| ContactCard::from(c).render())
        .collect()
}

pub fn render_groups(groups: &[LetterGroup]) -> Vec<String> {
    groups.iter().map(|g| g.label()).collect()
}

pub fn render_selection(selection: &LetterSelection) -> Vec<String> {
    match selection {
        LetterSelection::Contacts(found) => render_cards(found),
        LetterSelection::Empty => vec![NO_CONTACTS_FOR_LETTER.to_string()],
    }
}

/// A blank query renders nothing.
pub fn render_search(outcome: &SearchOutcome) -> Vec<String> {
    match outcome {
        SearchOutcome::NoQuery => Vec::new(),
        SearchOutcome::NoMatches => vec![NOTHING_FOUND.to_string()],
        SearchOutcome::Found(found) => render_cards(found),
    }
}
