//! Domain value objects and types.
//!
//! Type-safe wrappers for contact IDs, names and email addresses. Each one
//! validates at construction time so an invalid value cannot be represented
//! in the store.

pub mod contact_id;
pub mod contact_name;
pub mod email;
pub mod errors;

pub use contact_id::ContactId;
pub use contact_name::ContactName;
pub use email::EmailAddress;
pub use errors::ValidationError;
