use super::ContactDatabase;
use crate::model::Contact;
use std::collections::HashMap;

/// In-memory contact storage. Does NOT persist data.
#[derive(Default)]
pub struct MemoryDatabase {
    data: HashMap<i64, Contact>,
    highest_id: i64,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a starting data set through plain inserts, so the highest-id
    /// counter ends up on the largest seeded id.
    pub fn seed(&mut self, contacts: impl IntoIterator<Item = Contact>) {
        for contact in contacts {
            self.insert(contact);
        }
    }

    fn has_contact(&self, id: i64) -> bool {
        self.data.contains_key(&id)
    }
}

impl ContactDatabase for MemoryDatabase {
    fn insert(&mut self, contact: Contact) -> bool {
        if self.has_contact(contact.id) {
            return false;
        }
        if contact.id > self.highest_id {
            self.highest_id = contact.id;
        }

        self.data.insert(contact.id, contact);
        true
    }

    fn insert_with_new_id(&mut self, mut contact: Contact) -> Contact {
        contact.id = self.highest_id + 1;
        self.insert(contact.clone());
        contact
    }

    fn update(&mut self, contact: Contact) -> bool {
        if !self.has_contact(contact.id) {
            return false;
        }

        self.data.insert(contact.id, contact);
        true
    }

    fn delete(&mut self, contact: &Contact) -> bool {
        self.data.remove(&contact.id).is_some()
    }

    fn find_by_id(&self, id: i64) -> Option<Contact> {
        self.data.get(&id).cloned()
    }

    fn find_by_last_name_contains(&self, part: &str) -> Vec<Contact> {
        self.data
            .values()
            .filter(|contact| contact.last_name.contains(part))
            .cloned()
            .collect()
    }

    fn find_by_email(&self, email: &str) -> Vec<Contact> {
        self.data
            .values()
            .filter(|contact| contact.email == email)
            .cloned()
            .collect()
    }

    fn find_all(&self) -> Vec<Contact> {
        self.data.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: i64, name: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            last_name: "test".to_string(),
            email: format!("{}@test.com", name.to_lowercase()),
        }
    }

    fn sort_by_id(mut contacts: Vec<Contact>) -> Vec<Contact> {
        contacts.sort_by_key(|c| c.id);
        contacts
    }

    #[test]
    fn insert_normal_and_conflict() {
        let mut db = MemoryDatabase::new();
        let first = contact(1, "Test");

        assert!(db.insert(first.clone()), "wrong return value without conflict");
        let mut second = first.clone();
        second.name = "Other".to_string();
        assert!(!db.insert(second), "wrong return value with conflict");

        // The conflicting insert is rejected, not applied
        assert_eq!(db.find_by_id(1), Some(first));
    }

    #[test]
    fn insert_with_zero_id_occupies_key_zero() {
        let mut db = MemoryDatabase::new();
        assert!(db.insert(contact(0, "Zero")));
        assert!(db.find_by_id(0).is_some());

        // Key 0 never advanced the counter, so assignment still starts at 1
        let assigned = db.insert_with_new_id(contact(0, "Next"));
        assert_eq!(assigned.id, 1);
    }

    #[test]
    fn insert_with_new_id_is_strictly_increasing() {
        let mut db = MemoryDatabase::new();

        let first = db.insert_with_new_id(contact(99, "Test"));
        assert_eq!(first.id, 1);
        let second = db.insert_with_new_id(contact(99, "Test"));
        assert_eq!(second.id, 2);
    }

    #[test]
    fn manual_insert_advances_the_counter() {
        let mut db = MemoryDatabase::new();
        db.insert(contact(10, "Test"));

        let assigned = db.insert_with_new_id(contact(0, "Test"));
        assert_eq!(assigned.id, 11);
    }

    #[test]
    fn update_normal() {
        let mut db = MemoryDatabase::new();
        let mut stored = contact(1, "Test");
        assert!(db.insert(stored.clone()));

        stored.name = "Test2".to_string();
        assert!(db.update(stored.clone()));
        assert_eq!(db.find_by_id(1), Some(stored));
    }

    #[test]
    fn update_miss_creates_nothing() {
        let mut db = MemoryDatabase::new();
        assert!(!db.update(contact(1, "Test")));
        assert!(db.find_by_id(1).is_none());
    }

    #[test]
    fn delete_normal_and_miss() {
        let mut db = MemoryDatabase::new();
        let stored = contact(1, "Test");
        assert!(db.insert(stored.clone()));

        assert!(db.delete(&stored), "wrong return value with match");
        assert!(!db.delete(&stored), "wrong return value without match");
    }

    #[test]
    fn returned_contacts_are_copies() {
        let mut db = MemoryDatabase::new();
        let mut original = contact(1, "Test");
        db.insert(original.clone());

        original.name = "Changed".to_string();
        let mut fetched = db.find_by_id(1).unwrap();
        fetched.name = "Changed".to_string();

        assert_eq!(db.find_by_id(1).unwrap().name, "Test");
    }

    #[test]
    fn find_all_returns_everything() {
        let mut db = MemoryDatabase::new();
        let a = contact(1, "Test");
        let b = contact(2, "Test2");
        db.insert(a.clone());
        db.insert(b.clone());

        assert_eq!(sort_by_id(db.find_all()), vec![a, b]);
    }

    #[test]
    fn find_by_email_match_and_miss() {
        let mut db = MemoryDatabase::new();
        let stored = contact(1, "Test");
        db.insert(stored.clone());

        assert!(db.find_by_email("no_match").is_empty());
        assert_eq!(db.find_by_email(&stored.email), vec![stored]);
    }

    #[test]
    fn find_by_last_name_contains_substring() {
        let mut db = MemoryDatabase::new();
        let mut a = contact(1, "Test");
        a.last_name = "test_SUBSTR_test".to_string();
        let mut b = contact(2, "Test2");
        b.last_name = "test_SUBSTR_test".to_string();
        let c = contact(3, "Test3");

        db.insert(a.clone());
        db.insert(b.clone());
        db.insert(c);

        assert_eq!(sort_by_id(db.find_by_last_name_contains("SUBSTR")), vec![a, b]);
    }

    #[test]
    fn empty_part_matches_every_contact() {
        let mut db = MemoryDatabase::new();
        db.insert(contact(1, "Test"));
        db.insert(contact(2, "Test2"));

        assert_eq!(db.find_by_last_name_contains("").len(), 2);
    }
}
