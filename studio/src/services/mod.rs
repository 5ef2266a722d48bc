//! Application services: template loading, font loading, export.

pub mod export;
pub mod font;
pub mod template_loader;
