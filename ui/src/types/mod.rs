pub mod nav_option;

// Re-exports
pub use nav_option::{validate_options, NavOption};
