//! Standee studio: configuration, template catalog, shared editor state and
//! the services that load templates and export finished standees.

pub mod app;
pub mod config;
pub mod services;
pub mod templates;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
