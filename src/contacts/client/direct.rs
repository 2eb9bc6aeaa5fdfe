use super::ContactsClient;
use crate::error::Result;
use crate::model::Contact;
use crate::store::ContactDatabase;
use std::sync::{Mutex, MutexGuard};

/// In-process binding over a store, for tests and embedded wiring.
///
/// Applies the same validation the API layer applies on create/update, so
/// both bindings behave alike from a front end's point of view.
pub struct DirectClient<S: ContactDatabase> {
    db: Mutex<S>,
}

impl<S: ContactDatabase> DirectClient<S> {
    pub fn new(db: S) -> Self {
        Self { db: Mutex::new(db) }
    }

    fn db(&self) -> MutexGuard<'_, S> {
        match self.db.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<S: ContactDatabase> ContactsClient for DirectClient<S> {
    fn insert_with_new_id(&self, contact: &Contact) -> Result<Contact> {
        contact.validate()?;
        Ok(self.db().insert_with_new_id(contact.clone()))
    }

    fn update(&self, contact: &Contact) -> Result<bool> {
        contact.validate()?;
        Ok(self.db().update(contact.clone()))
    }

    fn delete(&self, contact: &Contact) -> Result<bool> {
        Ok(self.db().delete(contact))
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Contact>> {
        Ok(self.db().find_by_id(id))
    }

    fn find_by_last_name_contains(&self, part: &str) -> Result<Vec<Contact>> {
        Ok(self.db().find_by_last_name_contains(part))
    }

    fn find_by_email(&self, email: &str) -> Result<Vec<Contact>> {
        Ok(self.db().find_by_email(email))
    }

    fn find_all(&self) -> Result<Vec<Contact>> {
        Ok(self.db().find_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactsError;
    use crate::store::memory::MemoryDatabase;

    #[test]
    fn create_then_read_round_trip() {
        let client = DirectClient::new(MemoryDatabase::new());
        let created = client
            .insert_with_new_id(&Contact::new("A", "B", "c@d.com"))
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(client.find_by_id(1).unwrap(), Some(created));
    }

    #[test]
    fn validation_runs_before_the_store() {
        let client = DirectClient::new(MemoryDatabase::new());

        let err = client
            .insert_with_new_id(&Contact::new("", "B", "c@d.com"))
            .unwrap_err();
        assert!(matches!(err, ContactsError::Validation(_)));
        assert!(client.find_all().unwrap().is_empty());
    }

    #[test]
    fn update_and_delete_misses_are_false_not_errors() {
        let client = DirectClient::new(MemoryDatabase::new());
        let mut absent = Contact::new("A", "B", "c@d.com");
        absent.id = 42;

        assert!(!client.update(&absent).unwrap());
        assert!(!client.delete(&absent).unwrap());
    }
}
