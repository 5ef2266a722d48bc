//! Placement model shared by the live preview and the export renderer.
//!
//! Holds the QR placement (detected or default) and one anchor per text
//! label, all in percentages. Preview and export each have their own read
//! path for the QR box: preview caps the edge for layout safety, export
//! uses the stored size as-is.

use serde::{Deserialize, Serialize};

use crate::detect::RegionResult;

/// QR placement used when detection finds nothing: centered, 30% edge.
pub const DEFAULT_QR_PLACEMENT: RegionResult = RegionResult {
    x_pct: 50.0,
    y_pct: 50.0,
    size_pct: 30.0,
};

/// Upper bound on the QR edge in the preview, as a percentage of the
/// shorter preview side.
pub const PREVIEW_SIZE_CAP_PCT: f64 = 35.0;

/// Pass a detected region through, or fall back to [`DEFAULT_QR_PLACEMENT`].
pub fn resolve_qr_placement(region: Option<RegionResult>) -> RegionResult {
    region.unwrap_or(DEFAULT_QR_PLACEMENT)
}

/// Position of a text label, in percentages of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnchor {
    pub x_pct: f64,
    pub y_pct: f64,
}

/// Clamp raw pointer percentages onto the canvas.
///
/// NaN maps to 0 so the result is always a valid anchor.
pub fn clamp_anchor(x: f64, y: f64) -> TextAnchor {
    TextAnchor {
        x_pct: clamp_pct(x),
        y_pct: clamp_pct(y),
    }
}

fn clamp_pct(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

/// Text labels that can be positioned independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextElement {
    Title,
    Subtitle,
    AdditionalText,
    BottomText,
}

impl TextElement {
    pub const ALL: [TextElement; 4] = [
        TextElement::Title,
        TextElement::Subtitle,
        TextElement::AdditionalText,
        TextElement::BottomText,
    ];

    /// Anchor used before the user drags the label anywhere.
    pub fn default_anchor(self) -> TextAnchor {
        let y_pct = match self {
            TextElement::Title => 15.0,
            TextElement::Subtitle => 22.0,
            TextElement::AdditionalText => 80.0,
            TextElement::BottomText => 87.0,
        };
        TextAnchor { x_pct: 50.0, y_pct }
    }
}

/// Text anchors for every label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnchors {
    pub title: TextAnchor,
    pub subtitle: TextAnchor,
    pub additional_text: TextAnchor,
    pub bottom_text: TextAnchor,
}

impl Default for TextAnchors {
    fn default() -> Self {
        Self {
            title: TextElement::Title.default_anchor(),
            subtitle: TextElement::Subtitle.default_anchor(),
            additional_text: TextElement::AdditionalText.default_anchor(),
            bottom_text: TextElement::BottomText.default_anchor(),
        }
    }
}

impl TextAnchors {
    pub fn get(&self, element: TextElement) -> TextAnchor {
        match element {
            TextElement::Title => self.title,
            TextElement::Subtitle => self.subtitle,
            TextElement::AdditionalText => self.additional_text,
            TextElement::BottomText => self.bottom_text,
        }
    }

    fn slot_mut(&mut self, element: TextElement) -> &mut TextAnchor {
        match element {
            TextElement::Title => &mut self.title,
            TextElement::Subtitle => &mut self.subtitle,
            TextElement::AdditionalText => &mut self.additional_text,
            TextElement::BottomText => &mut self.bottom_text,
        }
    }
}

/// Square in pixel space, top-left corner plus edge length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBox {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl PixelBox {
    fn centered(center_x: f64, center_y: f64, size: f64) -> Self {
        Self {
            x: center_x - size / 2.0,
            y: center_y - size / 2.0,
            size,
        }
    }
}

/// Merged layout read by both renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementModel {
    pub qr: RegionResult,
    pub anchors: TextAnchors,
}

impl Default for PlacementModel {
    fn default() -> Self {
        Self {
            qr: DEFAULT_QR_PLACEMENT,
            anchors: TextAnchors::default(),
        }
    }
}

impl PlacementModel {
    pub fn new(region: Option<RegionResult>) -> Self {
        Self {
            qr: resolve_qr_placement(region),
            anchors: TextAnchors::default(),
        }
    }

    /// Replace the QR placement with a detection outcome.
    pub fn set_qr(&mut self, region: Option<RegionResult>) {
        self.qr = resolve_qr_placement(region);
    }

    pub fn anchor(&self, element: TextElement) -> TextAnchor {
        self.anchors.get(element)
    }

    /// Store an anchor, clamped onto the canvas.
    pub fn set_anchor(&mut self, element: TextElement, x_pct: f64, y_pct: f64) {
        *self.anchors.slot_mut(element) = clamp_anchor(x_pct, y_pct);
    }

    pub fn reset_anchors(&mut self) {
        self.anchors = TextAnchors::default();
    }

    /// QR box for an on-screen preview of `width`x`height`.
    ///
    /// The edge is `min(size_pct, 35)%` of the shorter preview side.
    pub fn preview_qr_box(&self, width: f64, height: f64) -> PixelBox {
        let size_pct = self.qr.size_pct.min(PREVIEW_SIZE_CAP_PCT);
        let size = size_pct / 100.0 * width.min(height);
        PixelBox::centered(
            self.qr.x_pct / 100.0 * width,
            self.qr.y_pct / 100.0 * height,
            size,
        )
    }

    /// QR box for a fixed export canvas of `width`x`height` pixels.
    ///
    /// Uses the stored `size_pct` against the longer side, uncapped.
    pub fn export_qr_box(&self, width: f64, height: f64) -> PixelBox {
        let size = self.qr.size_pct / 100.0 * width.max(height);
        PixelBox::centered(
            self.qr.x_pct / 100.0 * width,
            self.qr.y_pct / 100.0 * height,
            size,
        )
    }

    /// Pixel position of a label's anchor on a `width`x`height` canvas.
    pub fn anchor_px(&self, element: TextElement, width: f64, height: f64) -> (f64, f64) {
        let anchor = self.anchor(element);
        (anchor.x_pct / 100.0 * width, anchor.y_pct / 100.0 * height)
    }
}
