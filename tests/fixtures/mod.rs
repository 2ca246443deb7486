//! Shared test fixtures.

#![allow(dead_code)]

use contact_manager::{Contact, ContactStore};

/// Contacts used by most scenarios, in insertion order.
pub const SAMPLE_CONTACTS: &[(&str, &str)] = &[
    ("Alice", "al@ex.com"),
    ("Bob", "bo@ex.com"),
    ("Carol", "carol@mail.org"),
    ("Robert", "rob_99@mail.org"),
    ("alice cooper", "coop.er@rock.net"),
];

/// A store seeded with [`SAMPLE_CONTACTS`].
pub fn seeded_store() -> ContactStore {
    let mut store = ContactStore::new();
    for (name, email) in SAMPLE_CONTACTS {
        store
            .add(name, email)
            .unwrap_or_else(|e| panic!("fixture contact {} rejected: {}", name, e));
    }
    store
}

/// Names of the given contacts, for compact assertions.
pub fn names<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<String> {
    contacts
        .into_iter()
        .map(|c| c.name().to_string())
        .collect()
}

/// Emails that must be accepted.
pub const VALID_EMAILS: &[&str] = &[
    "ab@cd.ef",
    "ab@cd.efg",
    "AB@CD.EFG",
    "first.last@example.com",
    "under_score@abc.io",
    "x1.y2_z3@domain123.org",
    "aaaaaaaaaaaaaaaaaaaaaaaaa@bbbbbbbbbbbbbbb.ccc",
];

/// Emails that must be rejected.
pub const INVALID_EMAILS: &[&str] = &[
    "a@bc.de",
    "ab@cd.efgh",
    "ab@c.de",
    "ab@cd.e",
    "aaaaaaaaaaaaaaaaaaaaaaaaaa@bb.cc",
    "ab@bbbbbbbbbbbbbbbb.cc",
    "plainaddress",
    "ab@cd",
    "ab@cd.co.uk",
    "ab+tag@cd.com",
    "ab-cd@ef.com",
    "ab@c_d.com",
    "ab@cd.c0m",
    "ab cd@ef.com",
    "ab@@cd.com",
    "\u{212A}\u{212A}@ex.com",
    "ab@\u{17F}\u{17F}.com",
    "ab@cd.\u{212A}om",
];
