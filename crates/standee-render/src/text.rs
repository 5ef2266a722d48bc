//! Text label rendering.

use ab_glyph::{Font, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// Draw a single line of text centered on (`center_x`, `center_y`).
pub fn draw_text_centered_at(
    img: &mut RgbaImage,
    font: &impl Font,
    scale: PxScale,
    center_x: f64,
    center_y: f64,
    text: &str,
    color: Rgba<u8>,
) {
    let (width, height) = text_size(scale, font, text);
    let x = (center_x - f64::from(width) / 2.0).round() as i32;
    let y = (center_y - f64::from(height) / 2.0).round() as i32;
    draw_text_mut(img, color, x, y, scale, font, text);
}
