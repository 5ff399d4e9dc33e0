//! Navigation UI components built with Yew.
pub mod components;
pub mod error;
pub mod hooks;
pub mod types;

// Re-exports
pub use error::{Error, Result};
