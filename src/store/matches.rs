//! Lazy name filter over a contact slice.

use crate::models::Contact;
use std::iter::FusedIterator;

/// Iterator over the contacts whose name contains a query.
///
/// Nothing is evaluated until the iterator is advanced. Cloning gives an
/// independent iterator starting from the clone's position, so a fresh clone
/// taken before iteration restarts the sequence.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    contacts: std::slice::Iter<'a, Contact>,
    query: &'a str,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(contacts: &'a [Contact], query: &'a str) -> Self {
        Self {
            contacts: contacts.iter(),
            query,
        }
    }

    /// The query this iterator filters by.
    pub fn query(&self) -> &'a str {
        self.query
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        let query = self.query;
        self.contacts.find(|c| c.matches(query))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.contacts.size_hint().1)
    }
}

impl<'a> DoubleEndedIterator for Matches<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let query = self.query;
        self.contacts.rfind(|c| c.matches(query))
    }
}

impl FusedIterator for Matches<'_> {}

#[cfg(test)]
mod tests {
    use crate::store::ContactStore;

    fn store() -> ContactStore {
        let mut store = ContactStore::new();
        store.add("Alice", "al@ex.com").unwrap();
        store.add("Bob", "bo@ex.com").unwrap();
        store.add("Bobby", "bb@ex.com").unwrap();
        store
    }

    #[test]
    fn test_matches_restartable_via_clone() {
        let store = store();
        let matches = store.filter("Bob");

        let first: Vec<_> = matches.clone().map(|c| c.name()).collect();
        let second: Vec<_> = matches.map(|c| c.name()).collect();
        assert_eq!(first, vec!["Bob", "Bobby"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_matches_reverse() {
        let store = store();
        let names: Vec<_> = store.filter("").rev().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Bobby", "Bob", "Alice"]);
    }

    #[test]
    fn test_matches_size_hint_bounded_by_store() {
        let store = store();
        let m = store.filter("zzz");
        assert_eq!(m.size_hint(), (0, Some(3)));
        assert_eq!(m.count(), 0);
    }

    #[test]
    fn test_matches_query_accessor() {
        let store = store();
        assert_eq!(store.filter("li").query(), "li");
    }
}
