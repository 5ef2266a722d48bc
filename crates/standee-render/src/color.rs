//! Hex color parsing.

use std::sync::LazyLock;

use image::Rgba;
use regex::Regex;

use crate::{RenderError, Result};

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap());

/// Whether `value` is a `#rgb` or `#rrggbb` color.
pub fn is_hex_color(value: &str) -> bool {
    RE_HEX_COLOR.is_match(value)
}

/// Parse `#rgb` / `#rrggbb` into an opaque RGBA pixel.
pub fn parse_hex_color(value: &str) -> Result<Rgba<u8>> {
    if !is_hex_color(value) {
        return Err(RenderError::InvalidColor(value.to_string()));
    }

    let digits = &value[1..];
    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| RenderError::InvalidColor(value.to_string()))
    };

    let (r, g, b) = if digits.len() == 3 {
        // #abc expands to #aabbcc
        let expand = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
        (expand(0)?, expand(1)?, expand(2)?)
    } else {
        (
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )
    };

    Ok(Rgba([r, g, b, 255]))
}
