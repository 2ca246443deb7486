//! In-memory contact collection.

use super::matches::Matches;
use crate::domain::{ContactId, ContactName, EmailAddress};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;

/// Owns the contact list and enforces its invariants.
///
/// - every stored contact passed validation when it was added
/// - IDs are unique and never reused, even after deletions
/// - emails are unique (exact, case-sensitive comparison)
///
/// Insertion order is preserved and is the display order.
#[derive(Debug, Clone)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    next_id: ContactId,
}

impl ContactStore {
    /// Create an empty store. The first contact added gets ID 1.
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
            next_id: ContactId::FIRST,
        }
    }

    /// Validate and append a new contact.
    ///
    /// `name` and `email` are trimmed first. Uniqueness is only checked once
    /// both fields are valid.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidInput` if the name is blank or the email is blank
    ///   or malformed
    /// - `StoreError::DuplicateEmail` if a stored contact has the same email
    pub fn add(&mut self, name: &str, email: &str) -> StoreResult<Contact> {
        let (name, email) = match Self::validate(name, email) {
            Ok(fields) => fields,
            Err(reason) => {
                tracing::debug!(%reason, "Rejected contact with invalid input");
                return Err(StoreError::InvalidInput(reason));
            }
        };

        if self.contains_email(email.as_str()) {
            tracing::debug!(email = %email, "Rejected contact with duplicate email");
            return Err(StoreError::DuplicateEmail(email.into_inner()));
        }

        let id = self.next_id;
        self.next_id = id.next();

        let contact = Contact::new(id, name, email);
        self.contacts.push(contact.clone());

        tracing::debug!(id = %id, total = self.contacts.len(), "Contact added");
        Ok(contact)
    }

    fn validate(
        name: &str,
        email: &str,
    ) -> Result<(ContactName, EmailAddress), crate::domain::ValidationError> {
        let name = ContactName::new(name)?;
        let email = EmailAddress::new(email)?;
        Ok((name, email))
    }

    /// Remove the contact with `id`. Returns `false` if there was none.
    pub fn delete(&mut self, id: ContactId) -> bool {
        match self.contacts.iter().position(|c| c.id() == id) {
            Some(index) => {
                self.contacts.remove(index);
                tracing::debug!(id = %id, total = self.contacts.len(), "Contact deleted");
                true
            }
            None => {
                tracing::debug!(id = %id, "Delete ignored, no such contact");
                false
            }
        }
    }

    /// Contacts whose name contains `query`, in store order.
    ///
    /// The returned iterator is lazy and can be cloned to restart it. An empty
    /// query matches every contact.
    pub fn filter<'a>(&'a self, query: &'a str) -> Matches<'a> {
        Matches::new(&self.contacts, query)
    }

    /// Look up a contact by ID.
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    /// Whether some stored contact has exactly this email.
    pub fn contains_email(&self, email: &str) -> bool {
        self.contacts.iter().any(|c| c.email() == email)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl Default for ContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
