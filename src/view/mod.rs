//! Presentation of the contact list.
//!
//! Rendering is kept apart from the store: the store hands out contacts, the
//! view decides how they look.

pub mod mode;
pub mod render;

pub use mode::ViewMode;
pub use render::{render, render_grid, render_list};
