//! Image composition: alpha-composite one image onto another.

use image::{Rgba, RgbaImage};

/// Overlay `top` onto `base` with its top-left corner at (`x`, `y`).
///
/// Offsets may be negative or run past the edges; only the overlapping
/// part is drawn.
pub fn overlay(base: &mut RgbaImage, top: &RgbaImage, x: i64, y: i64) {
    let (base_w, base_h) = (i64::from(base.width()), i64::from(base.height()));

    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x + i64::from(dx);
        let target_y = y + i64::from(dy);
        if target_x < 0 || target_y < 0 || target_x >= base_w || target_y >= base_h {
            continue;
        }
        let (tx, ty) = (target_x as u32, target_y as u32);

        let alpha = f32::from(pixel[3]) / 255.0;
        if alpha > 0.99 {
            base.put_pixel(tx, ty, *pixel);
        } else if alpha > 0.01 {
            let bg = *base.get_pixel(tx, ty);
            base.put_pixel(tx, ty, blend_pixel(&bg, pixel, alpha));
        }
    }
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (f32::from(fg[0]) * alpha + f32::from(bg[0]) * inv) as u8,
        (f32::from(fg[1]) * alpha + f32::from(bg[1]) * inv) as u8,
        (f32::from(fg[2]) * alpha + f32::from(bg[2]) * inv) as u8,
        255,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn overlay_copies_opaque_pixels() {
        let mut base = RgbaImage::from_pixel(10, 10, BLUE);
        let top = RgbaImage::from_pixel(3, 3, RED);
        overlay(&mut base, &top, 2, 2);

        assert_eq!(base.get_pixel(2, 2), &RED);
        assert_eq!(base.get_pixel(4, 4), &RED);
        assert_eq!(base.get_pixel(5, 5), &BLUE);
    }

    #[test]
    fn overlay_clips_negative_offsets() {
        let mut base = RgbaImage::from_pixel(10, 10, BLUE);
        let top = RgbaImage::from_pixel(4, 4, RED);
        overlay(&mut base, &top, -2, -2);

        assert_eq!(base.get_pixel(0, 0), &RED);
        assert_eq!(base.get_pixel(1, 1), &RED);
        assert_eq!(base.get_pixel(2, 2), &BLUE);
    }

    #[test]
    fn overlay_does_not_panic_on_out_of_bounds() {
        let mut base = RgbaImage::new(100, 100);
        let top = RgbaImage::new(50, 50);
        overlay(&mut base, &top, 80, 80);
        overlay(&mut base, &top, 500, -500);
    }

    #[test]
    fn overlay_skips_transparent_pixels() {
        let mut base = RgbaImage::from_pixel(4, 4, BLUE);
        let top = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 0]));
        overlay(&mut base, &top, 0, 0);
        assert_eq!(base.get_pixel(1, 1), &BLUE);
    }

    #[test]
    fn overlay_blends_translucent_pixels() {
        let mut base = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let top = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));
        overlay(&mut base, &top, 0, 0);

        let px = base.get_pixel(0, 0);
        assert!((126..=129).contains(&px[0]), "got {px:?}");
        assert_eq!(px[3], 255);
    }
}
