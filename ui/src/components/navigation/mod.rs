//! Navigation components.
pub mod nav_dropdown;
pub mod nav_dropdown_state;
pub mod nav_dropdown_view;

// Re-exports
pub use nav_dropdown::{NavDropdown, NavDropdownProps};
pub use nav_dropdown_state::{Commit, NavDropdownEvent, NavDropdownState};
pub use nav_dropdown_view::{MenuItemView, NavDropdownView, TriggerView};
