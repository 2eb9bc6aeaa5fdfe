//! # Client facade
//!
//! [`ContactsClient`] mirrors the store's read/write operations for
//! front ends. Two bindings implement it:
//!
//! - [`http::HttpClient`]: serializes calls as HTTP requests against a
//!   running server. 404 comes back as a structured miss (`false`/`None`),
//!   5xx as a propagated failure.
//! - [`direct::DirectClient`]: in-process binding over a store, for tests
//!   and embedded wiring. No server required.

use crate::error::Result;
use crate::model::Contact;

pub mod direct;
pub mod http;

pub trait ContactsClient {
    /// Create a contact; the server assigns the id. Returns the stored
    /// contact.
    fn insert_with_new_id(&self, contact: &Contact) -> Result<Contact>;

    /// Replace the contact with the same id. `Ok(false)` when no such
    /// contact exists.
    fn update(&self, contact: &Contact) -> Result<bool>;

    /// Remove the contact with the same id. `Ok(false)` on a miss.
    fn delete(&self, contact: &Contact) -> Result<bool>;

    fn find_by_id(&self, id: i64) -> Result<Option<Contact>>;

    fn find_by_last_name_contains(&self, part: &str) -> Result<Vec<Contact>>;

    fn find_by_email(&self, email: &str) -> Result<Vec<Contact>>;

    fn find_all(&self) -> Result<Vec<Contact>>;
}
