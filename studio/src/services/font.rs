//! Label font loading.

use std::path::Path;

use ab_glyph::FontVec;

const MAX_FONT_SIZE: u64 = 50 * 1024 * 1024; // 50MB
const VALID_EXTENSIONS: &[&str] = &["ttf", "otf"];

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("Invalid font format (only TTF/OTF supported)")]
    InvalidFormat,
    #[error("Font file too large (max 50MB)")]
    FileTooLarge,
    #[error("Font could not be parsed: {0}")]
    Parse(#[from] ab_glyph::InvalidFont),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a TTF/OTF file into an owned font.
pub async fn load_font(path: &Path) -> Result<FontVec, FontError> {
    let ext_ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| VALID_EXTENSIONS.contains(&e.to_lowercase().as_str()));
    if !ext_ok {
        return Err(FontError::InvalidFormat);
    }

    let meta = tokio::fs::metadata(path).await?;
    if meta.len() > MAX_FONT_SIZE {
        return Err(FontError::FileTooLarge);
    }

    let bytes = tokio::fs::read(path).await?;
    let font = FontVec::try_from_vec(bytes)?;
    tracing::info!(path = %path.display(), "Font loaded");
    Ok(font)
}
