//! White-square detection on template bitmaps.
//!
//! Sweeps square windows between 15% and 40% of the shorter image side
//! across the image on a coarse grid and reports the largest window whose
//! sampled pixels are mostly white. The strides are coarse on purpose:
//! tightening them changes which windows are accepted.

use image::{DynamicImage, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use tracing::debug;


/// Smallest scanned window edge, as a fraction of the shorter side.
const MIN_SIZE_RATIO: f64 = 0.15;

/// Largest scanned window edge, as a fraction of the shorter side.
const MAX_SIZE_RATIO: f64 = 0.40;

/// Increment between scanned window edges, as a fraction of the shorter side.
const SIZE_STEP_RATIO: f64 = 0.05;

/// Value each of R, G and B must exceed for a pixel to count as white.
const WHITE_THRESHOLD: u8 = 240;

/// Share of sampled pixels that must be white for a window to qualify.
const MIN_WHITE_RATIO: f64 = 0.75;

/// Detected QR placement, in percentages of the source image.
///
/// `x_pct`/`y_pct` locate the square's center relative to width/height;
/// `size_pct` is the edge length relative to the longer side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResult {
    pub x_pct: f64,
    pub y_pct: f64,
    pub size_pct: f64,
}

/// Candidate square: top-left pixel plus edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScanWindow {
    x: u32,
    y: u32,
    size: f64,
}

impl ScanWindow {
    fn area(&self) -> f64 {
        self.size * self.size
    }
}

/// Find the largest near-white square in `img`.
///
/// Returns `None` when no window clears the white-ratio threshold, which
/// includes empty images and images too small to hold a one-pixel window.
/// Among equally large qualifying windows the first one in the sweep wins
/// (smaller sizes first, then row by row from the top-left).
pub fn detect_white_square(img: &RgbaImage) -> Option<RegionResult> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        debug!(width, height, "Empty image, skipping white-square scan");
        return None;
    }

    let best = scan_sizes(width, height)
        .flat_map(|size| windows(width, height, size))
        .filter(|window| white_ratio(img, window) > MIN_WHITE_RATIO)
        .fold(None, |best: Option<ScanWindow>, window| match best {
            Some(b) if window.area() <= b.area() => Some(b),
            _ => Some(window),
        });

    let Some(window) = best else {
        debug!(width, height, "No white square found");
        return None;
    };

    let center_x = f64::from(window.x) + window.size / 2.0;
    let center_y = f64::from(window.y) + window.size / 2.0;
    let result = RegionResult {
        x_pct: center_x / f64::from(width) * 100.0,
        y_pct: center_y / f64::from(height) * 100.0,
        size_pct: window.size / f64::from(width.max(height)) * 100.0,
    };

    debug!(
        width,
        height,
        x = window.x,
        y = window.y,
        size = window.size,
        "White square detected"
    );
    Some(result)
}

/// Convenience wrapper for decoded images of any pixel format.
pub fn detect_dynamic(img: &DynamicImage) -> Option<RegionResult> {
    detect_white_square(&img.to_rgba8())
}

/// Window edge lengths to try, smallest first.
///
/// Sizes accumulate by repeated addition so the last step lands exactly
/// where an additive sweep would; sub-pixel sizes are skipped.
fn scan_sizes(width: u32, height: u32) -> impl Iterator<Item = f64> {
    let shorter = f64::from(width.min(height));
    let min_size = MIN_SIZE_RATIO * shorter;
    let max_size = MAX_SIZE_RATIO * shorter;
    let size_step = SIZE_STEP_RATIO * shorter;

    std::iter::successors(Some(min_size), move |size| Some(size + size_step))
        .take_while(move |size| *size <= max_size)
        .filter(|size| *size >= 1.0)
}

/// All window positions for one edge length, row-major.
fn windows(width: u32, height: u32, size: f64) -> impl Iterator<Item = ScanWindow> {
    let stride = ((size / 10.0).floor() as usize).max(1);
    let last_x = (f64::from(width) - size).floor() as u32;
    let last_y = (f64::from(height) - size).floor() as u32;

    (0..=last_y).step_by(stride).flat_map(move |y| {
        (0..=last_x)
            .step_by(stride)
            .map(move |x| ScanWindow { x, y, size })
    })
}

/// Share of white pixels on the window's sampling sub-grid.
fn white_ratio(img: &RgbaImage, window: &ScanWindow) -> f64 {
    let sample_step = ((window.size / 20.0).floor() as usize).max(1);
    // Integer offsets strictly below a fractional size stop at ceil(size) - 1.
    let extent = window.size.ceil() as u32;

    let mut white = 0u32;
    let mut total = 0u32;
    for sy in (0..extent).step_by(sample_step) {
        for sx in (0..extent).step_by(sample_step) {
            if is_white(img.get_pixel(window.x + sx, window.y + sy)) {
                white += 1;
            }
            total += 1;
        }
    }

    f64::from(white) / f64::from(total)
}

/// Alpha is ignored.
fn is_white(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0;
    r > WHITE_THRESHOLD && g > WHITE_THRESHOLD && b > WHITE_THRESHOLD
}
