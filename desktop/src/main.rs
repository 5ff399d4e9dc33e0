//! Waypoint demo.
//!
//! Mounts a version switcher in the page header.
//! Each entry of `assets/versions.json` becomes a route (`/v1`, `/v2`, ...)
//! and the dropdown's label follows whichever version is open.
//! Logs go to the browser console.
mod app;
mod error;
mod routes;
mod versions;

pub use error::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_web::{performance_layer, MakeConsoleWriter};

/// Dropdown transitions are logged at `DEBUG`.
const MAX_LOG_LEVEL: LevelFilter = LevelFilter::DEBUG;

fn main() {
    init_logging();
    tracing::info!("mounting waypoint");
    yew::Renderer::<app::App>::new().render();
}

/// Sends `tracing` events to the console and
/// records spans as performance marks.
fn init_logging() {
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339()) // no `SystemTime` on wasm32
        .with_writer(MakeConsoleWriter)
        .with_filter(MAX_LOG_LEVEL);

    let performance = performance_layer()
        .with_details_from_fields(Pretty::default())
        .with_filter(MAX_LOG_LEVEL);

    tracing_subscriber::registry()
        .with(console)
        .with(performance)
        .init();
}
