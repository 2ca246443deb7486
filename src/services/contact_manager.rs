//! Contact manager service.
//!
//! Holds the session state behind the UI (store, search query, view mode)
//! and exposes one handler per user event.

use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::Contact;
use crate::store::{ContactStore, Matches};
use crate::view::{self, ViewMode};

/// Session state for one contact list.
///
/// Every handler runs to completion and leaves the manager in a consistent
/// state. The visible contacts are derived from the store and the current
/// query on demand, never cached.
#[derive(Debug, Clone, Default)]
pub struct ContactManager {
    store: ContactStore,
    query: String,
    view: ViewMode,
}

impl ContactManager {
    /// Create a manager with an empty store and the given initial view.
    pub fn new(view: ViewMode) -> Self {
        Self {
            store: ContactStore::new(),
            query: String::new(),
            view,
        }
    }

    /// Create a manager around an existing store.
    pub fn with_store(store: ContactStore, view: ViewMode) -> Self {
        Self {
            store,
            query: String::new(),
            view,
        }
    }

    /// Handle an add event.
    ///
    /// The search query is cleared afterwards whether or not the add
    /// succeeded, the same as the input fields being reset.
    pub fn add_contact(&mut self, name: &str, email: &str) -> StoreResult<Contact> {
        let result = self.store.add(name, email);
        self.query.clear();

        match &result {
            Ok(contact) => tracing::info!(id = %contact.id(), "Added contact"),
            Err(e) => tracing::info!(error = %e, "Add contact rejected"),
        }
        result
    }

    /// Handle a delete event. Returns whether a contact was removed.
    pub fn delete_contact(&mut self, id: ContactId) -> bool {
        let removed = self.store.delete(id);
        tracing::info!(id = %id, removed, "Delete contact");
        removed
    }

    /// Handle a search event. The query is used verbatim.
    pub fn search(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::debug!(query = %self.query, "Search query updated");
    }

    /// Handle a view change event.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
        tracing::debug!(view = %view, "View mode changed");
    }

    /// Contacts matching the current query, in store order.
    pub fn visible(&self) -> Matches<'_> {
        self.store.filter(&self.query)
    }

    /// Render the visible contacts in the current view mode.
    pub fn render(&self) -> String {
        view::render(self.view, self.visible())
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }
}
