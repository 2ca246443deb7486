//! Contact storage.
//!
//! [`ContactStore`] is the single owner of contact data. Everything else in
//! the crate reads contacts through it.

mod contact_store;
mod matches;

pub use contact_store::ContactStore;
pub use matches::Matches;
