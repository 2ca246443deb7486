//! Application service layer.
//!
//! Services sit between the user-facing front end and the store. They own
//! session state and turn UI events into store operations.

mod contact_manager;

pub use contact_manager::ContactManager;
