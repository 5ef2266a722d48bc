//! Standee export rendering.
//!
//! Reads the same [`PlacementModel`] as the preview, but through the
//! export path: the QR box uses the stored size uncapped.

use std::io::Cursor;

use ab_glyph::{Font, PxScale};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use standee_layout::{PlacementModel, TextElement};
use tracing::{debug, info};

use crate::{EXPORT_HEIGHT, EXPORT_WIDTH, RenderError, Result, compose, qr, resize, text};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Secondary text color (#6b7280).
const MUTED_GRAY: Rgba<u8> = Rgba([0x6b, 0x72, 0x80, 255]);

/// Default QR and title color (#2563eb).
const DEFAULT_ACCENT: Rgba<u8> = Rgba([0x25, 0x63, 0xeb, 255]);

/// Share of the backing square's edge taken by the QR code (a 53%-wide
/// code plus 9% padding on the card).
const QR_FILL_RATIO: f64 = 0.53 / 0.62;

/// Text printed on the standee.
#[derive(Debug, Clone, PartialEq)]
pub struct StandeeContent {
    /// Encoded into the QR code.
    pub link: String,
    pub title: String,
    pub subtitle: String,
    pub additional_text: Option<String>,
    pub bottom_text: String,
}

impl Default for StandeeContent {
    fn default() -> Self {
        Self {
            link: "https://example.com".into(),
            title: "Sample Title".into(),
            subtitle: "Subtitle Text".into(),
            additional_text: None,
            bottom_text: "Scan to learn more".into(),
        }
    }
}

impl StandeeContent {
    /// Label text for `element`, or `None` if there is nothing to draw.
    pub fn text_for(&self, element: TextElement) -> Option<&str> {
        let text = match element {
            TextElement::Title => self.title.as_str(),
            TextElement::Subtitle => self.subtitle.as_str(),
            TextElement::AdditionalText => self.additional_text.as_deref()?,
            TextElement::BottomText => self.bottom_text.as_str(),
        };
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Canvas and color options for an export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// QR module color; also used for the title and additional text.
    pub accent_color: Rgba<u8>,

    /// QR background (light modules and quiet zone).
    pub qr_background: Rgba<u8>,

    /// Color for subtitle and bottom text.
    pub muted_color: Rgba<u8>,

    /// Canvas fill when no template image is given.
    pub background: Rgba<u8>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: EXPORT_WIDTH,
            height: EXPORT_HEIGHT,
            accent_color: DEFAULT_ACCENT,
            qr_background: WHITE,
            muted_color: MUTED_GRAY,
            background: WHITE,
        }
    }
}

impl ExportOptions {
    /// Create options with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set canvas size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder: set accent (QR) color.
    pub fn with_accent_color(mut self, color: Rgba<u8>) -> Self {
        self.accent_color = color;
        self
    }

    /// Builder: set background used without a template.
    pub fn with_background(mut self, color: Rgba<u8>) -> Self {
        self.background = color;
        self
    }

    /// Builder: set QR background (backing square and light modules).
    pub fn with_qr_background(mut self, color: Rgba<u8>) -> Self {
        self.qr_background = color;
        self
    }

    /// Font size for a label, proportional to the canvas width.
    pub fn font_scale(&self, element: TextElement) -> PxScale {
        let ratio = match element {
            TextElement::Title => 0.11,
            TextElement::Subtitle => 0.055,
            TextElement::AdditionalText => 0.065,
            TextElement::BottomText => 0.05,
        };
        PxScale::from(self.width as f32 * ratio)
    }

    fn label_color(&self, element: TextElement) -> Rgba<u8> {
        match element {
            TextElement::Title | TextElement::AdditionalText => self.accent_color,
            TextElement::Subtitle | TextElement::BottomText => self.muted_color,
        }
    }
}

/// Render a standee onto a fresh `options.width`x`options.height` canvas.
///
/// - `template`: background bitmap, stretched to the canvas; solid
///   `options.background` when `None`
/// - `model`: placement read through its export path
/// - `font`: labels are skipped when `None`
pub fn render_standee(
    template: Option<&DynamicImage>,
    model: &PlacementModel,
    content: &StandeeContent,
    font: Option<&impl Font>,
    options: &ExportOptions,
) -> Result<RgbaImage> {
    let (width, height) = (options.width, options.height);
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidDimensions { width, height });
    }

    let mut canvas = match template {
        Some(img) => resize::fit_to_canvas(img, width, height).to_rgba8(),
        None => RgbaImage::from_pixel(width, height, options.background),
    };

    let qr_box = model.export_qr_box(f64::from(width), f64::from(height));
    let (box_x, box_y) = (qr_box.x.round() as i64, qr_box.y.round() as i64);
    let box_edge = qr_box.size.round().max(1.0) as u32;
    draw_filled_rect_mut(
        &mut canvas,
        Rect::at(box_x as i32, box_y as i32).of_size(box_edge, box_edge),
        options.qr_background,
    );

    let qr_edge = (qr_box.size * QR_FILL_RATIO).round().max(1.0) as u32;
    let inset = i64::from(box_edge.saturating_sub(qr_edge) / 2);
    let code = qr::generate_qr(
        &content.link,
        qr_edge,
        options.accent_color,
        options.qr_background,
    )?;
    compose::overlay(&mut canvas, &code, box_x + inset, box_y + inset);
    debug!(
        x = qr_box.x,
        y = qr_box.y,
        size = qr_box.size,
        qr_edge,
        "QR code placed"
    );

    match font {
        Some(font) => {
            for element in TextElement::ALL {
                let Some(label) = content.text_for(element) else {
                    continue;
                };
                let (cx, cy) = model.anchor_px(element, f64::from(width), f64::from(height));
                text::draw_text_centered_at(
                    &mut canvas,
                    font,
                    options.font_scale(element),
                    cx,
                    cy,
                    label,
                    options.label_color(element),
                );
            }
        }
        None => debug!("No font supplied, skipping text labels"),
    }

    info!(width, height, "Standee rendered");
    Ok(canvas)
}

/// Encode a rendered standee as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_glyph::FontRef;
    use standee_layout::RegionResult;

    const GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);

    fn gray_template(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, GRAY))
    }

    fn model_with_size(size_pct: f64) -> PlacementModel {
        PlacementModel::new(Some(RegionResult {
            x_pct: 50.0,
            y_pct: 50.0,
            size_pct,
        }))
    }

    fn render(template: Option<&DynamicImage>, model: &PlacementModel) -> RgbaImage {
        render_standee(
            template,
            model,
            &StandeeContent::default(),
            None::<&FontRef<'static>>,
            &ExportOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn canvas_has_export_dimensions() {
        let template = gray_template(300, 500);
        let img = render(Some(&template), &PlacementModel::default());
        assert_eq!(img.dimensions(), (EXPORT_WIDTH, EXPORT_HEIGHT));
    }

    #[test]
    fn large_detection_is_not_capped_on_export() {
        let template = gray_template(EXPORT_WIDTH, EXPORT_HEIGHT);
        let img = render(Some(&template), &model_with_size(60.0));

        // 60% of 1080 = 648px box from x=56; a 35% cap would start at x=191.
        assert_eq!(img.get_pixel(60, 540), &WHITE);
        assert_eq!(img.get_pixel(50, 540), &GRAY);
    }

    #[test]
    fn default_placement_is_centered() {
        let template = gray_template(EXPORT_WIDTH, EXPORT_HEIGHT);
        let img = render(Some(&template), &PlacementModel::default());

        // 30% of 1080 = 324px box centered at (380, 540).
        let (left, top) = (380 - 162, 540 - 162);
        assert_eq!(img.get_pixel(left + 2, top + 2), &WHITE);
        assert_eq!(img.get_pixel(left - 2, top - 2), &GRAY);
        assert_eq!(img.get_pixel(left + 324 + 2, top + 324 + 2), &GRAY);
    }

    #[test]
    fn qr_uses_accent_color() {
        let img = render(None, &PlacementModel::default());
        assert!(img.pixels().any(|p| *p == DEFAULT_ACCENT));
    }

    #[test]
    fn zero_canvas_is_rejected() {
        let err = render_standee(
            None,
            &PlacementModel::default(),
            &StandeeContent::default(),
            None::<&FontRef<'static>>,
            &ExportOptions::new().with_size(0, 100),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidDimensions {
                width: 0,
                height: 100
            }
        ));
    }

    #[test]
    fn empty_labels_are_skipped() {
        let content = StandeeContent {
            subtitle: "   ".into(),
            additional_text: Some(String::new()),
            ..StandeeContent::default()
        };
        assert_eq!(content.text_for(TextElement::Subtitle), None);
        assert_eq!(content.text_for(TextElement::AdditionalText), None);
        assert_eq!(content.text_for(TextElement::Title), Some("Sample Title"));
    }

    #[test]
    fn font_scale_follows_canvas_width() {
        let options = ExportOptions::new().with_size(1000, 1400);
        assert_eq!(options.font_scale(TextElement::Title), PxScale::from(110.0));
        assert_eq!(options.font_scale(TextElement::BottomText), PxScale::from(50.0));
    }

    #[test]
    fn encode_png_writes_signature() {
        let img = RgbaImage::from_pixel(4, 4, WHITE);
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn backing_square_pads_the_code() {
        let template = gray_template(EXPORT_WIDTH, EXPORT_HEIGHT);
        let backing = Rgba([250, 240, 200, 255]);
        let options = ExportOptions::new().with_qr_background(backing);
        let img = render_standee(
            Some(&template),
            &PlacementModel::default(),
            &StandeeContent::default(),
            None::<&FontRef<'static>>,
            &options,
        )
        .unwrap();

        // 324px box at (218, 378); the 277px code is inset by 23px.
        let (left, top, edge, inset) = (218u32, 378u32, 324u32, 23u32);
        for i in 0..edge {
            for d in 0..inset {
                for (x, y) in [
                    (left + i, top + d),
                    (left + i, top + edge - 1 - d),
                    (left + d, top + i),
                    (left + edge - 1 - d, top + i),
                ] {
                    assert_eq!(img.get_pixel(x, y), &backing, "at ({x}, {y})");
                }
            }
        }
        assert_eq!(img.get_pixel(left - 1, top - 1), &GRAY);

        let inner = (left + inset..left + edge - inset)
            .flat_map(|x| (top + inset..top + edge - inset).map(move |y| (x, y)));
        let dark = inner.filter(|&(x, y)| *img.get_pixel(x, y) == DEFAULT_ACCENT).count();
        assert!(dark > 0);
    }
}
