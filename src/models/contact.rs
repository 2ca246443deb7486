//! Contact model representing one entry in the contact list.

use crate::domain::{ContactId, ContactName, EmailAddress};
use serde::{Deserialize, Serialize};

/// A validated contact.
///
/// Contacts are only built by [`ContactStore::add`](crate::store::ContactStore::add)
/// (or deserialized, which re-runs validation) and are never mutated
/// afterwards, so the fields are read through accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    name: ContactName,
    email: EmailAddress,
}

impl Contact {
    pub(crate) fn new(id: ContactId, name: ContactName, email: EmailAddress) -> Self {
        Self { id, name, email }
    }

    /// Unique identifier assigned by the store.
    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Whether the name contains `query` (case-sensitive).
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query)
    }
}
