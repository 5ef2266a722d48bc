//! Headless export binary.
//!
//! Loads a template, detects where the QR code goes, and writes the
//! rendered standee (or a numbered batch) as PNG. Configured through `STANDEE_*` environment
//! variables (a `.env` file is honored).

use anyhow::Context;

use standee_studio_lib::app::SharedState;
use standee_studio_lib::config::AppConfig;
use standee_studio_lib::services::{export, font, template_loader};
use standee_studio_lib::templates::find_template;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    standee_studio_lib::init_tracing();

    let config = AppConfig::load()?;
    let template = find_template(&config.template_id)
        .with_context(|| format!("unknown template '{}'", config.template_id))?;
    tracing::info!(template = template.id, "Starting standee export");

    let state = SharedState::new();
    let template_path = config
        .template_path
        .clone()
        .unwrap_or_else(|| template.image_path(&config.assets_dir));
    let image = template_loader::select_template(&state, template.id, &template_path).await;

    let font = match &config.font_path {
        Some(path) => match font::load_font(path).await {
            Ok(f) => Some(f),
            Err(e) => {
                tracing::warn!(path = %path.display(), "Skipping text labels: {e}");
                None
            }
        },
        None => None,
    };

    let placement = state.placement().await;
    tracing::info!(
        placement = %serde_json::to_string(&placement)?,
        "Placement resolved"
    );

    let options = export::options_from_config(&config, template)?;
    let jobs = export::export_jobs(&config);
    for job in &jobs {
        let png = export::export_standee(
            &state,
            image.as_deref(),
            &job.content,
            &options,
            font.as_ref(),
        )
        .await?;

        tokio::fs::write(&job.output_path, &png)
            .await
            .with_context(|| format!("failed to write {}", job.output_path.display()))?;
        tracing::info!(
            number = job.number,
            path = %job.output_path.display(),
            bytes = png.len(),
            "Standee written"
        );
    }
    tracing::info!(count = jobs.len(), "Export finished");
    Ok(())
}
