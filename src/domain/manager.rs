use super::*;

use crate::storage::ContactStorage;
use super::index::{self, LetterGroup, LetterSelection};
use super::search::{self, SearchOutcome};
use tracing::{debug, info, warn};

/// Owns the contact collection and writes it through to storage after
/// every mutation.
pub struct ContactManager {
    mem: Vec<Contact>,
    storage: ContactStorage,
}

impl ContactManager {
    pub fn new(storage: ContactStorage) -> Result<Self, AppError> {
        let mem = storage.load()?;
        info!(
            medium = storage.get_medium(),
            key = storage.key(),
            total = mem.len(),
            "loaded contacts"
        );

        Ok(Self { mem, storage })
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.mem.iter().find(|c| c.id == id)
    }

    pub fn storage(&self) -> &ContactStorage {
        &self.storage
    }

    pub fn add_contact(&mut self, draft: ContactDraft) -> Result<Contact, AppError> {
        draft.validate()?;

        let contact = Contact::new(draft.trimmed());
        self.mem.push(contact.clone());
        debug!(id = %contact.id, "added contact");

        self.save()?;
        Ok(contact)
    }

    pub fn update_contact(&mut self, id: &str, draft: ContactDraft) -> Result<Contact, AppError> {
        draft.validate()?;

        let Some(contact) = self.mem.iter_mut().find(|c| c.id == id) else {
            warn!(id, "update of unknown contact");
            return Err(AppError::NotFound("Contact".to_string()));
        };

        contact.replace_fields(draft.trimmed());
        let updated = contact.clone();
        debug!(id, "updated contact");

        self.save()?;
        Ok(updated)
    }

    /// Removes the contact if present. The collection is written either way.
    pub fn delete_contact(&mut self, id: &str) -> Result<Option<Contact>, AppError> {
        let removed = self
            .mem
            .iter()
            .position(|c| c.id == id)
            .map(|index| self.mem.remove(index));

        match &removed {
            Some(_) => debug!(id, "deleted contact"),
            None => debug!(id, "delete of unknown contact"),
        }

        self.save()?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), AppError> {
        let total = self.mem.len();
        self.mem.clear();
        debug!(total, "cleared contacts");

        self.save()
    }

    pub fn group_counts(&self) -> Vec<LetterGroup> {
        index::group_counts(&self.mem)
    }

    pub fn contacts_by_letter(&self, letter: char) -> LetterSelection<'_> {
        index::contacts_by_letter(letter, &self.mem)
    }

    pub fn search(&self, query: &str) -> SearchOutcome<'_> {
        search::search_contacts(query, &self.mem)
    }

    fn save(&mut self) -> Result<(), AppError> {
        self.storage.save(&self.mem)?;
        debug!(total = self.mem.len(), "persisted contacts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DEFAULT_STORAGE_KEY, MemStorage};

    fn manager() -> ContactManager {
        let storage = ContactStorage::new(Box::new(MemStorage::new()), DEFAULT_STORAGE_KEY);
        ContactManager::new(storage).unwrap()
    }

    fn ivan() -> ContactDraft {
        ContactDraft::new("Иван", "Инженер", "+7 916 123 45 67")
    }

    #[test]
    fn added_contact_is_indexed_under_its_letter() -> Result<(), AppError> {
        let mut manager = manager();

        let contact = manager.add_contact(ivan())?;

        let groups = manager.group_counts();
        let i = groups.iter().find(|g| g.letter == 'И').unwrap();
        assert_eq!(i.count, 1);
        assert_eq!(
            manager.contacts_by_letter('И'),
            LetterSelection::Contacts(vec![&contact])
        );
        Ok(())
    }

    #[test]
    fn add_stores_trimmed_values() -> Result<(), AppError> {
        let mut manager = manager();

        let contact =
            manager.add_contact(ContactDraft::new("  Иван ", "Инженер  ", " +7 916 123 45 67"))?;

        assert_eq!(contact.name, "Иван");
        assert_eq!(contact.vacancy, "Инженер");
        assert_eq!(contact.phone, "+7 916 123 45 67");
        Ok(())
    }

    #[test]
    fn invalid_add_leaves_collection_untouched() -> Result<(), AppError> {
        let mut manager = manager();
        manager.add_contact(ivan())?;

        let result = manager.add_contact(ContactDraft::new("Иван", "Инженер", "89161234567"));

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(manager.contact_list().len(), 1);
        assert_eq!(manager.storage().load()?.len(), 1);
        Ok(())
    }

    #[test]
    fn update_keeps_id_and_position() -> Result<(), AppError> {
        let mut manager = manager();
        let first = manager.add_contact(ivan())?;
        let second =
            manager.add_contact(ContactDraft::new("Мария", "Бухгалтер", "+7 903 555 00 11"))?;
        let third = manager.add_contact(ContactDraft::new("Bob", "Driver", "+1 202 555 01 23"))?;

        let updated = manager.update_contact(
            &second.id,
            ContactDraft::new("Пётр", "Директор", "+7 000 000 00 00"),
        )?;

        assert_eq!(updated.id, second.id);
        let list = manager.contact_list();
        assert_eq!(list[0], first);
        assert_eq!(list[1].id, second.id);
        assert_eq!(list[1].name, "Пётр");
        assert_eq!(list[1].vacancy, "Директор");
        assert_eq!(list[1].phone, "+7 000 000 00 00");
        assert_eq!(list[2], third);
        Ok(())
    }

    #[test]
    fn update_of_missing_id_is_reported() -> Result<(), AppError> {
        let mut manager = manager();
        manager.add_contact(ivan())?;

        let result = manager.update_contact("missing", ivan());

        assert!(matches!(result, Err(AppError::NotFound(_))));
        Ok(())
    }

    #[test]
    fn deleted_contact_disappears_from_every_letter() -> Result<(), AppError> {
        let mut manager = manager();
        let contact = manager.add_contact(ivan())?;
        manager.add_contact(ContactDraft::new("Ирина", "Юрист", "+7 916 000 11 22"))?;

        let removed = manager.delete_contact(&contact.id)?;

        assert_eq!(removed, Some(contact.clone()));
        for letter in index::alphabet() {
            if let LetterSelection::Contacts(found) = manager.contacts_by_letter(letter) {
                assert!(found.iter().all(|c| c.id != contact.id));
            }
        }
        assert_eq!(manager.delete_contact(&contact.id)?, None);
        Ok(())
    }

    #[test]
    fn clear_persists_an_empty_array() -> Result<(), AppError> {
        let mut manager = manager();
        manager.add_contact(ivan())?;

        manager.clear()?;

        assert!(manager.contact_list().is_empty());
        assert!(manager.storage().load()?.is_empty());
        Ok(())
    }

    #[test]
    fn search_uses_current_collection() -> Result<(), AppError> {
        let mut manager = manager();
        manager.add_contact(ivan())?;

        assert_eq!(manager.search("иван").contacts().len(), 1);
        assert_eq!(manager.search(" "), SearchOutcome::NoQuery);
        assert_eq!(manager.search("петр"), SearchOutcome::NoMatches);
        Ok(())
    }
}
