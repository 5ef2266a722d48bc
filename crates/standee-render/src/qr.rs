//! QR code generation for standee exports.

use image::{Rgba, RgbaImage};
use image::imageops::{self, FilterType};
use qrcode::{Color, QrCode};
use tracing::debug;

use crate::Result;

/// Light modules added around the symbol on every side.
const QUIET_ZONE: u32 = 1;

/// Generate a QR code image from a URL or text string.
///
/// The symbol plus a one-module quiet zone is scaled to exactly
/// `target_width` pixels square with nearest-neighbor sampling so module
/// edges stay crisp.
pub fn generate_qr(
    data: &str,
    target_width: u32,
    dark: Rgba<u8>,
    light: Rgba<u8>,
) -> Result<RgbaImage> {
    let code = QrCode::new(data.as_bytes())?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;
    let total = module_count + QUIET_ZONE * 2;

    let mut img = RgbaImage::from_pixel(total, total, light);
    for (i, color) in modules.iter().enumerate() {
        if *color == Color::Dark {
            let x = (i as u32) % module_count + QUIET_ZONE;
            let y = (i as u32) / module_count + QUIET_ZONE;
            img.put_pixel(x, y, dark);
        }
    }

    let target_width = target_width.max(1);
    debug!(module_count, target_width, "Scaling QR code");
    Ok(imageops::resize(
        &img,
        target_width,
        target_width,
        FilterType::Nearest,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARK: Rgba<u8> = Rgba([0x25, 0x63, 0xeb, 255]);
    const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn generate_qr_matches_target_width() {
        let img = generate_qr("https://example.com", 230, DARK, LIGHT).unwrap();
        assert_eq!(img.dimensions(), (230, 230));
    }

    #[test]
    fn generate_qr_keeps_quiet_zone_light() {
        let img = generate_qr("https://example.com", 230, DARK, LIGHT).unwrap();
        assert_eq!(img.get_pixel(0, 0), &LIGHT);
        assert_eq!(img.get_pixel(229, 229), &LIGHT);
    }

    #[test]
    fn generate_qr_uses_dark_color() {
        let img = generate_qr("https://example.com", 230, DARK, LIGHT).unwrap();
        assert!(img.pixels().any(|p| *p == DARK));
        assert!(img.pixels().all(|p| *p == DARK || *p == LIGHT));
    }

    #[test]
    fn generate_qr_zero_width_still_works() {
        let img = generate_qr("test", 0, DARK, LIGHT).unwrap();
        assert_eq!(img.dimensions(), (1, 1));
    }
}
