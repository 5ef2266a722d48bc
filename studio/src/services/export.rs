//! Standee export: render the shared placement model to PNG.

use std::path::{Path, PathBuf};

use ab_glyph::Font;
use anyhow::Context;
use image::DynamicImage;
use standee_render::{ExportOptions, StandeeContent, encode_png, render_standee};

use crate::app::SharedState;
use crate::config::AppConfig;
use crate::templates::TemplateInfo;

/// Label text and link for the configured standee.
pub fn content_from_config(config: &AppConfig) -> StandeeContent {
    StandeeContent {
        link: standee_render::resolve_batch_link(
            Some(config.link.as_str()),
            &config.link,
            config.standee_number,
        ),
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
        additional_text: config.additional_text.clone(),
        bottom_text: config.bottom_text.clone(),
    }
}

/// A standee to render and where to write it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    pub number: u32,
    pub content: StandeeContent,
    pub output_path: PathBuf,
}

/// Jobs for this run: one standee, or `batch_count` numbered standees.
///
/// Batch standees start at `standee_number`; each gets its own `{n}` link,
/// the label `"<prefix> <n>"` as additional text, and `<stem>-<n>.png`
/// next to the configured output path.
pub fn export_jobs(config: &AppConfig) -> Vec<ExportJob> {
    let Some(count) = config.batch_count else {
        return vec![ExportJob {
            number: config.standee_number,
            content: content_from_config(config),
            output_path: config.output_path.clone(),
        }];
    };

    (config.standee_number..config.standee_number.saturating_add(count))
        .map(|number| {
            let numbered = AppConfig {
                standee_number: number,
                additional_text: Some(batch_label(&config.batch_prefix, number)),
                ..config.clone()
            };
            ExportJob {
                number,
                content: content_from_config(&numbered),
                output_path: numbered_path(&config.output_path, number),
            }
        })
        .collect()
}

fn batch_label(prefix: &str, number: u32) -> String {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        number.to_string()
    } else {
        format!("{prefix} {number}")
    }
}

/// `out/standee.png` -> `out/standee-7.png`.
fn numbered_path(path: &Path, number: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("standee");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("png");
    path.with_file_name(format!("{stem}-{number}.{ext}"))
}

/// Export options from the configuration, falling back to the template's
/// default colors.
pub fn options_from_config(
    config: &AppConfig,
    template: &TemplateInfo,
) -> anyhow::Result<ExportOptions> {
    let accent = config
        .qr_color
        .as_deref()
        .unwrap_or(template.default_settings.qr_color);
    let accent = standee_render::parse_hex_color(accent).context("invalid QR color")?;
    let background = standee_render::parse_hex_color(template.default_settings.bg_color)
        .context("invalid template background color")?;

    Ok(ExportOptions::new()
        .with_size(config.export_width, config.export_height)
        .with_accent_color(accent)
        .with_background(background))
}

/// Render the current placement to PNG bytes.
pub async fn export_standee(
    state: &SharedState,
    template: Option<&DynamicImage>,
    content: &StandeeContent,
    options: &ExportOptions,
    font: Option<&impl Font>,
) -> anyhow::Result<Vec<u8>> {
    let model = state.placement().await;
    let img = render_standee(template, &model, content, font, options)
        .context("failed to render standee")?;
    encode_png(&img).context("failed to encode PNG")
}
