//! Custom hooks.
pub mod use_goto;
pub mod use_nav_dropdown;

// Re-exports
pub use use_goto::use_goto;
pub use use_nav_dropdown::{use_nav_dropdown, UseNavDropdownHandle};
