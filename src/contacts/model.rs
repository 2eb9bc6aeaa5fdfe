use crate::error::{ContactsError, Result};
use serde::{Deserialize, Serialize};

/// Replacement text for personal fields in audit output.
pub const ANONYMIZED: &str = "*** ANONYMIZED ***";

/// A single contact entry. `id` is the unique key in the store; automatic
/// assignment starts at 1, so a persisted contact never carries id 0
/// unless it was inserted manually with that key.
///
/// Missing JSON fields decode to their defaults, so a create payload may
/// omit `id` entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub email: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// All three text fields are required; an empty value rejects the
    /// contact before it reaches the store.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ContactsError::Validation("empty contact name".to_string()));
        }
        if self.last_name.is_empty() {
            return Err(ContactsError::Validation(
                "empty contact last name".to_string(),
            ));
        }
        if self.email.is_empty() {
            return Err(ContactsError::Validation("empty contact email".to_string()));
        }
        Ok(())
    }

    /// Projection for audit output: keeps the id, redacts everything else.
    /// Never used for API responses.
    pub fn anonymized(&self) -> Contact {
        Contact {
            id: self.id,
            name: ANONYMIZED.to_string(),
            last_name: ANONYMIZED.to_string(),
            email: ANONYMIZED.to_string(),
        }
    }
}
