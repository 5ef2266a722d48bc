//! Template loading and white-square detection.
//!
//! Decoding and scanning run on the blocking pool; the result is applied
//! through the session's generation guard, so switching templates while a
//! scan is in flight never lets the old result win.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use image::DynamicImage;
use standee_layout::{DetectionTicket, detect_dynamic};
use tracing::{info, warn};

use crate::app::SharedState;

/// Decode a template bitmap off the async runtime.
pub async fn load_template_image(path: &Path) -> anyhow::Result<DynamicImage> {
    let path: PathBuf = path.to_path_buf();
    tokio::task::spawn_blocking(move || {
        image::open(&path).with_context(|| format!("failed to decode template {}", path.display()))
    })
    .await
    .context("template decode task failed")?
}

/// Scan `image` for `ticket` and apply the result if still current.
///
/// Returns whether the result was applied.
pub async fn apply_image(
    state: &SharedState,
    ticket: &DetectionTicket,
    image: Arc<DynamicImage>,
) -> bool {
    let region = match tokio::task::spawn_blocking(move || detect_dynamic(&image)).await {
        Ok(region) => region,
        Err(e) => {
            warn!(template = ticket.template_id(), "Detection task failed: {e}");
            None
        }
    };
    state.finish_detection(ticket, region).await
}

/// Select a template, decode it and place the QR code on it.
///
/// Returns the decoded image for export, or `None` if decoding failed (the
/// default placement is applied) or a newer selection superseded this one.
pub async fn select_template(
    state: &SharedState,
    template_id: &str,
    path: &Path,
) -> Option<Arc<DynamicImage>> {
    let ticket = state.begin_selection(template_id).await;
    load_for_ticket(state, &ticket, path).await
}

/// Decode and scan the template for `ticket`.
///
/// The image is only handed back if its placement was applied, so callers
/// never pair a superseded bitmap with the current model.
pub async fn load_for_ticket(
    state: &SharedState,
    ticket: &DetectionTicket,
    path: &Path,
) -> Option<Arc<DynamicImage>> {
    let template_id = ticket.template_id();
    let generation = ticket.generation();

    match load_template_image(path).await {
        Ok(image) => {
            let image = Arc::new(image);
            let applied = apply_image(state, ticket, Arc::clone(&image)).await;
            info!(template = template_id, generation, applied, "Template loaded");
            applied.then_some(image)
        }
        Err(e) => {
            warn!(template = template_id, generation, "Using default placement: {e:#}");
            state.finish_detection(ticket, None).await;
            None
        }
    }
}
