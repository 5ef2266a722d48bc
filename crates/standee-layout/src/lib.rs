//! Layout engine for QR standee templates.
//!
//! Finds the white square on a template bitmap where the QR code belongs,
//! merges it with user-positioned text anchors into a single placement
//! model, and tracks drag gestures and template-selection generations so
//! preview and export always read the same layout.

pub mod detect;
pub mod drag;
pub mod placement;
pub mod session;

// Re-exports for convenience
pub use detect::{RegionResult, detect_dynamic, detect_white_square};
pub use drag::{DragController, DragError, DragState, Surface};
pub use placement::{
    DEFAULT_QR_PLACEMENT, PixelBox, PlacementModel, TextAnchor, TextElement, clamp_anchor,
    resolve_qr_placement,
};
pub use session::{DetectionTicket, LayoutSession};
