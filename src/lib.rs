//! Contact Manager - an in-memory contact list with validation, name search
//! and grid/list views.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (contact ID, name, email)
//! - **models**: The `Contact` record
//! - **store**: `ContactStore`, the owner of contact data and its invariants
//! - **services**: `ContactManager`, session state and one handler per UI event
//! - **view**: View mode and plain-text renderers
//! - **server**: Line-oriented console front end
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use contact_manager::{ContactStore, StoreError};
//!
//! let mut store = ContactStore::new();
//! let alice = store.add("Alice", "al@ex.com").unwrap();
//! assert_eq!(alice.id().get(), 1);
//!
//! let dup = store.add("Bob", "al@ex.com");
//! assert!(matches!(dup, Err(StoreError::DuplicateEmail(_))));
//!
//! let names: Vec<_> = store.filter("li").map(|c| c.name()).collect();
//! assert_eq!(names, vec!["Alice"]);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod store;
pub mod view;

pub use config::Config;
pub use domain::{ContactId, ContactName, EmailAddress, ValidationError};
pub use error::{CommandError, ConfigError, StoreError, StoreResult};
pub use models::Contact;
pub use server::{Command, ContactConsole, Outcome};
pub use services::ContactManager;
pub use store::{ContactStore, Matches};
pub use view::ViewMode;
