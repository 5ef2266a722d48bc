//! Shared editor state.

use std::sync::Arc;

use standee_layout::{
    DetectionTicket, DragError, LayoutSession, PlacementModel, RegionResult, Surface, TextElement,
};
use tokio::sync::RwLock;

/// Editor state shared between the preview, the loader and the exporter.
#[derive(Clone, Default)]
pub struct SharedState {
    session: Arc<RwLock<LayoutSession>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct access to the session, e.g. for drag handling.
    pub fn session(&self) -> &Arc<RwLock<LayoutSession>> {
        &self.session
    }

    /// Snapshot of the current placement model.
    pub async fn placement(&self) -> PlacementModel {
        *self.session.read().await.model()
    }

    /// Start a template selection and return its detection ticket.
    pub async fn begin_selection(&self, template_id: &str) -> DetectionTicket {
        self.session.write().await.select_template(template_id)
    }

    /// Apply a detection result if `ticket` is still current.
    pub async fn finish_detection(
        &self,
        ticket: &DetectionTicket,
        region: Option<RegionResult>,
    ) -> bool {
        self.session.write().await.apply_detection(ticket, region)
    }

    /// Pointer pressed on a label in the preview.
    pub async fn drag_start(&self, element: TextElement) -> Result<(), DragError> {
        self.session.write().await.drag_parts().0.pointer_down(element)
    }

    /// Pointer moved; updates the held label's anchor immediately.
    pub async fn drag_move(&self, client_x: f64, client_y: f64, surface: Surface) {
        let mut session = self.session.write().await;
        let (drag, model) = session.drag_parts();
        drag.pointer_move(model, client_x, client_y, surface);
    }

    /// Pointer released anywhere.
    pub async fn drag_end(&self) {
        self.session.write().await.drag_parts().0.pointer_up();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn drag_updates_model_read_by_export() {
        let state = SharedState::new();
        let surface = Surface::new(0.0, 0.0, 200.0, 400.0);

        state.drag_start(TextElement::Title).await.unwrap();
        state.drag_move(50.0, 100.0, surface).await;
        // Export snapshot taken mid-drag already sees the live anchor.
        let mid = state.placement().await.anchor(TextElement::Title);
        assert_eq!((mid.x_pct, mid.y_pct), (25.0, 25.0));

        state.drag_end().await;
        assert!(state.drag_start(TextElement::Subtitle).await.is_ok());
        assert!(state.drag_start(TextElement::Title).await.is_err());
        state.drag_end().await;
        assert_eq!(state.session().read().await.drag().active_listeners(), 0);
    }
}
