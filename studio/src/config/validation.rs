//! Setting value validation.

use standee_render::color::is_hex_color;

use crate::templates::find_template;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "STANDEE_TEMPLATE" => {
            if find_template(value).is_none() {
                return Err(format!("unknown template '{value}'"));
            }
        }
        "STANDEE_LINK" => {
            if value.trim().is_empty() {
                return Err("link must not be empty".into());
            }
        }
        "STANDEE_QR_COLOR" => {
            if !is_hex_color(value) {
                return Err("must be a #rgb or #rrggbb color".into());
            }
        }
        "STANDEE_EXPORT_WIDTH" | "STANDEE_EXPORT_HEIGHT" => validate_int_range(value, 64, 8192)?,
        "STANDEE_NUMBER" => validate_int_range(value, 1, 9999)?,
        "STANDEE_BATCH_COUNT" => validate_int_range(value, 1, 500)?,
        "STANDEE_BATCH_PREFIX" => {
            if value.chars().count() > 40 {
                return Err("prefix must be at most 40 characters".into());
            }
        }
        "STANDEE_FONT_PATH" => {
            let lower = value.to_lowercase();
            if !lower.ends_with(".ttf") && !lower.ends_with(".otf") {
                return Err("font must be a .ttf or .otf file".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
