//! Built-in standee templates.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Styling a template applies when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefaults {
    pub font: &'static str,
    pub qr_color: &'static str,
    pub bg_color: &'static str,
}

/// A template in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub default_settings: TemplateDefaults,
}

impl TemplateInfo {
    /// Bitmap location: `<assets_dir>/templates/<id>.png`.
    pub fn image_path(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join("templates").join(format!("{}.png", self.id))
    }
}

pub const TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        id: "modern-minimal",
        name: "Modern Minimal",
        description: "Clean and minimal design with ample white space",
        default_settings: TemplateDefaults {
            font: "Montserrat",
            qr_color: "#2563eb",
            bg_color: "#ffffff",
        },
    },
    TemplateInfo {
        id: "elegant-dark",
        name: "Elegant Dark",
        description: "Sophisticated dark theme with gold accents",
        default_settings: TemplateDefaults {
            font: "Playfair Display",
            qr_color: "#d4af37",
            bg_color: "#1a1a1a",
        },
    },
    TemplateInfo {
        id: "vibrant-colorful",
        name: "Vibrant Colorful",
        description: "Bold and colorful design for casual settings",
        default_settings: TemplateDefaults {
            font: "Pacifico",
            qr_color: "#ff6b6b",
            bg_color: "#f8f9fa",
        },
    },
];

/// Look up a built-in template by id.
pub fn find_template(id: &str) -> Option<&'static TemplateInfo> {
    TEMPLATES.iter().find(|t| t.id == id)
}
