//! # Storage Layer
//!
//! The [`ContactDatabase`] trait is the capability the API layer is written
//! against. Abstracting it behind a trait keeps the HTTP handlers testable
//! with a substitute store and keeps id-assignment and search semantics in
//! one place.
//!
//! The only shipped implementation is [`memory::MemoryDatabase`]: a plain
//! `HashMap` keyed by id plus a highest-assigned-id counter. There is no
//! interior locking; writers take `&mut self` and the server serializes all
//! access behind a single mutex, because check-then-insert and
//! read-counter-then-increment must not interleave.
//!
//! Contacts cross the store boundary by value. Callers get owned clones,
//! and mutating a returned contact never changes stored state.

use crate::model::Contact;

pub mod memory;

/// Abstract interface for contact storage.
pub trait ContactDatabase {
    /// Insert a contact under its own id. Returns false without mutating
    /// anything when the id is already taken.
    fn insert(&mut self, contact: Contact) -> bool;

    /// Insert a contact under a freshly assigned id (one past the highest
    /// id ever stored), ignoring any id on the input. Returns the stored
    /// contact with its new id.
    fn insert_with_new_id(&mut self, contact: Contact) -> Contact;

    /// Replace the contact with the same id. Returns false when no such
    /// contact exists; nothing is created in that case.
    fn update(&mut self, contact: Contact) -> bool;

    /// Remove the contact with the same id. Returns false on a miss.
    fn delete(&mut self, contact: &Contact) -> bool;

    /// Look up a single contact by id.
    fn find_by_id(&self, id: i64) -> Option<Contact>;

    /// All contacts whose last name contains `part` (case-sensitive).
    /// Order is unspecified. An empty `part` matches every contact.
    fn find_by_last_name_contains(&self, part: &str) -> Vec<Contact>;

    /// All contacts with exactly this email. Order is unspecified.
    fn find_by_email(&self, email: &str) -> Vec<Contact>;

    /// Every stored contact. Order is unspecified.
    fn find_all(&self) -> Vec<Contact>;
}
