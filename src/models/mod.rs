//! Data models.

pub mod contact;

pub use contact::Contact;
