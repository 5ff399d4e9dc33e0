//! Application.
pub mod app;

// Re-exports
pub use app::App;
