//! Editing session: the placement model plus template-selection bookkeeping.
//!
//! Every template selection bumps a generation counter and hands out a
//! [`DetectionTicket`]. A detection result is only applied if its ticket is
//! still current, so a slow scan for an old template can never overwrite
//! the placement of a newer one.

use tracing::{debug, info};

use crate::detect::RegionResult;
use crate::drag::DragController;
use crate::placement::PlacementModel;

/// Proof of which template selection a detection run belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionTicket {
    generation: u64,
    template_id: String,
}

impl DetectionTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }
}

/// Placement model, drag state and current template for one editor.
#[derive(Debug, Default)]
pub struct LayoutSession {
    model: PlacementModel,
    drag: DragController,
    template_id: Option<String>,
    generation: u64,
    detection_pending: bool,
}

impl LayoutSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> &PlacementModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut PlacementModel {
        &mut self.model
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Drag controller together with the model it writes to.
    pub fn drag_parts(&mut self) -> (&mut DragController, &mut PlacementModel) {
        (&mut self.drag, &mut self.model)
    }

    pub fn template_id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the current template's detection has not landed yet.
    pub fn detection_pending(&self) -> bool {
        self.detection_pending
    }

    /// Switch to a new template and get the ticket its detection must carry.
    ///
    /// The QR placement falls back to the default until the result lands.
    /// Text anchors are kept.
    pub fn select_template(&mut self, template_id: impl Into<String>) -> DetectionTicket {
        let template_id = template_id.into();
        self.generation += 1;
        self.template_id = Some(template_id.clone());
        self.detection_pending = true;
        self.model.set_qr(None);

        info!(
            template = %template_id,
            generation = self.generation,
            "Template selected"
        );
        DetectionTicket {
            generation: self.generation,
            template_id,
        }
    }

    /// Apply a detection outcome if `ticket` is still current.
    ///
    /// Returns `false` (and leaves the model untouched) for stale tickets.
    pub fn apply_detection(
        &mut self,
        ticket: &DetectionTicket,
        region: Option<RegionResult>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                template = %ticket.template_id,
                stale = ticket.generation,
                current = self.generation,
                "Discarding stale detection result"
            );
            return false;
        }

        self.model.set_qr(region);
        self.detection_pending = false;
        debug!(
            template = %ticket.template_id,
            found = region.is_some(),
            "Detection applied"
        );
        true
    }
}
