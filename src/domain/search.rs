use super::*;

#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Blank query; the previous results should be cleared.
    NoQuery,
    NoMatches,
    Found(Vec<&'a Contact>),
}

impl SearchOutcome<'_> {
    pub fn contacts(&self) -> &[&Contact] {
        match self {
            SearchOutcome::Found(found) => found,
            _ => &[],
        }
    }
}

fn contact_matches(contact: &Contact, query: &str) -> bool {
    contact.name.to_lowercase().contains(query)
        || contact.vacancy.to_lowercase().contains(query)
        || contact.phone.to_lowercase().contains(query)
}

pub fn search_contacts<'a>(query: &str, contact_list: &'a [Contact]) -> SearchOutcome<'a> {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return SearchOutcome::NoQuery;
    }

    let found: Vec<&Contact> = contact_list
        .iter()
        .filter(|c| contact_matches(c, &query))
        .collect();

    if found.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Found(found)
    }
}
