//! Runtime application configuration loaded from environment variables.

use std::path::PathBuf;

use super::ConfigError;
use super::validation::validate_setting;

/// Runtime configuration for an export run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub template_id: String,
    /// Overrides the catalog image location.
    pub template_path: Option<PathBuf>,
    pub assets_dir: PathBuf,
    pub output_path: PathBuf,
    pub link: String,
    pub title: String,
    pub subtitle: String,
    pub additional_text: Option<String>,
    pub bottom_text: String,
    /// Falls back to the template's default color.
    pub qr_color: Option<String>,
    pub font_path: Option<PathBuf>,
    pub export_width: u32,
    pub export_height: u32,
    /// Substituted for `{n}` in the link; first number of a batch.
    pub standee_number: u32,
    /// Render this many consecutively numbered standees.
    pub batch_count: Option<u32>,
    /// Label printed before each batch number at the additional-text anchor.
    pub batch_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            template_id: "modern-minimal".into(),
            template_path: None,
            assets_dir: PathBuf::from("assets"),
            output_path: PathBuf::from("standee.png"),
            link: "https://example.com".into(),
            title: "Sample Title".into(),
            subtitle: "Subtitle Text".into(),
            additional_text: None,
            bottom_text: "Scan to learn more".into(),
            qr_color: None,
            font_path: None,
            export_width: standee_render::EXPORT_WIDTH,
            export_height: standee_render::EXPORT_HEIGHT,
            standee_number: 1,
            batch_count: None,
            batch_prefix: "Table".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment (after `.env`).
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {e}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing or empty keys keep their defaults; present values are
    /// validated before use.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &'static str| -> Result<Option<String>, ConfigError> {
            match lookup(key) {
                Some(v) if !v.is_empty() => {
                    validate_setting(key, &v)
                        .map_err(|message| ConfigError::Invalid { key, message })?;
                    Ok(Some(v))
                }
                _ => Ok(None),
            }
        };
        let get_u32 = |key: &'static str| -> Result<Option<u32>, ConfigError> {
            get(key)?
                .map(|v| {
                    v.parse::<u32>().map_err(|e| ConfigError::Invalid {
                        key,
                        message: e.to_string(),
                    })
                })
                .transpose()
        };

        let mut config = Self::default();
        if let Some(v) = get("STANDEE_TEMPLATE")? {
            config.template_id = v;
        }
        config.template_path = get("STANDEE_TEMPLATE_PATH")?.map(PathBuf::from);
        if let Some(v) = get("STANDEE_ASSETS_DIR")? {
            config.assets_dir = PathBuf::from(v);
        }
        if let Some(v) = get("STANDEE_OUTPUT")? {
            config.output_path = PathBuf::from(v);
        }
        if let Some(v) = get("STANDEE_LINK")? {
            config.link = v;
        }
        if let Some(v) = get("STANDEE_TITLE")? {
            config.title = v;
        }
        if let Some(v) = get("STANDEE_SUBTITLE")? {
            config.subtitle = v;
        }
        config.additional_text = get("STANDEE_ADDITIONAL_TEXT")?;
        if let Some(v) = get("STANDEE_BOTTOM_TEXT")? {
            config.bottom_text = v;
        }
        config.qr_color = get("STANDEE_QR_COLOR")?;
        config.font_path = get("STANDEE_FONT_PATH")?.map(PathBuf::from);
        if let Some(v) = get_u32("STANDEE_EXPORT_WIDTH")? {
            config.export_width = v;
        }
        if let Some(v) = get_u32("STANDEE_EXPORT_HEIGHT")? {
            config.export_height = v;
        }
        if let Some(v) = get_u32("STANDEE_NUMBER")? {
            config.standee_number = v;
        }
        config.batch_count = get_u32("STANDEE_BATCH_COUNT")?;
        if let Some(v) = get("STANDEE_BATCH_PREFIX")? {
            config.batch_prefix = v;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(load(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn values_override_defaults() {
        let config = load(&[
            ("STANDEE_TEMPLATE", "elegant-dark"),
            ("STANDEE_LINK", "https://menu.example/t/{n}"),
            ("STANDEE_NUMBER", "4"),
            ("STANDEE_EXPORT_WIDTH", "1520"),
            ("STANDEE_ADDITIONAL_TEXT", "Table"),
            ("STANDEE_QR_COLOR", "#0d9488"),
        ])
        .unwrap();

        assert_eq!(config.template_id, "elegant-dark");
        assert_eq!(config.link, "https://menu.example/t/{n}");
        assert_eq!(config.standee_number, 4);
        assert_eq!(config.export_width, 1520);
        assert_eq!(config.export_height, standee_render::EXPORT_HEIGHT);
        assert_eq!(config.additional_text.as_deref(), Some("Table"));
        assert_eq!(config.qr_color.as_deref(), Some("#0d9488"));
    }

    #[test]
    fn empty_values_keep_defaults() {
        let config = load(&[("STANDEE_TITLE", "")]).unwrap();
        assert_eq!(config.title, "Sample Title");
    }

    #[test]
    fn invalid_value_names_the_key() {
        let err = load(&[("STANDEE_QR_COLOR", "teal")]).unwrap_err();
        let ConfigError::Invalid { key, .. } = &err;
        assert_eq!(*key, "STANDEE_QR_COLOR");
        assert!(err.to_string().contains("STANDEE_QR_COLOR"));
    }

    #[test]
    fn unknown_template_is_rejected() {
        assert!(load(&[("STANDEE_TEMPLATE", "retro")]).is_err());
    }

    #[test]
    fn batch_settings_are_loaded() {
        let config = load(&[
            ("STANDEE_BATCH_COUNT", "6"),
            ("STANDEE_BATCH_PREFIX", "Booth"),
        ])
        .unwrap();
        assert_eq!(config.batch_count, Some(6));
        assert_eq!(config.batch_prefix, "Booth");
    }

    #[test]
    fn oversized_batch_is_rejected() {
        let err = load(&[("STANDEE_BATCH_COUNT", "100000")]).unwrap_err();
        assert!(err.to_string().contains("STANDEE_BATCH_COUNT"));
    }
}
