//! Export rasterizer for QR standees.
//!
//! Draws a template bitmap, the QR code and the text labels onto a
//! fixed-size canvas using the shared placement model, and encodes the
//! result as PNG.

pub mod color;
pub mod compose;
pub mod export;
pub mod link;
pub mod qr;
pub mod resize;
pub mod text;

// Re-exports for convenience
pub use color::parse_hex_color;
pub use export::{ExportOptions, StandeeContent, encode_png, render_standee};
pub use link::{expand_link_template, resolve_batch_link};
pub use qr::generate_qr;

/// Default export canvas width in pixels (380pt card at 2x).
pub const EXPORT_WIDTH: u32 = 760;

/// Default export canvas height in pixels (540pt card at 2x).
pub const EXPORT_HEIGHT: u32 = 1080;

/// Errors that can occur while rendering an export.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("QR encode error: {0}")]
    QrEncode(#[from] qrcode::types::QrError),

    #[error("Invalid color '{0}' (expected #rgb or #rrggbb)")]
    InvalidColor(String),

    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
