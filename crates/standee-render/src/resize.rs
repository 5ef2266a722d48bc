//! Template fitting for the export canvas.
//!
//! Templates are stretched to the canvas so percentage coordinates measured
//! on the template land on the same spot in the export.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

/// Resize an image to exactly `width`x`height`.
///
/// Uses Lanczos3 filtering. Returns the original image unchanged if it
/// already has the target dimensions.
pub fn fit_to_canvas(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    if (orig_w, orig_h) == (width, height) {
        debug!(width, height, "Template already at canvas size, skipping resize");
        return img.clone();
    }

    debug!(
        orig_w,
        orig_h,
        new_width = width,
        new_height = height,
        "Fitting template to canvas"
    );
    img.resize_exact(width, height, FilterType::Lanczos3)
}
