//! Drag interaction for text labels.
//!
//! A label is grabbed on pointer-down, follows every pointer-move, and is
//! released on pointer-up wherever the pointer is. Only one label can be
//! held at a time. The global move/up listeners are represented by a
//! [`PointerSubscription`] that lives exactly as long as the drag.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, warn};

use crate::placement::{PlacementModel, TextElement};

/// Errors raised by the drag state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    #[error("{held:?} is already being dragged (pressed {pressed:?})")]
    AlreadyDragging {
        held: TextElement,
        pressed: TextElement,
    },
}

/// Current drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(TextElement),
}

/// Screen rectangle of the canvas the labels live on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position relative to the surface, in unclamped percentages.
    fn to_pct(self, client_x: f64, client_y: f64) -> (f64, f64) {
        (
            pct_of(client_x - self.left, self.width),
            pct_of(client_y - self.top, self.height),
        )
    }
}

fn pct_of(offset: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        offset / extent * 100.0
    } else {
        0.0
    }
}

/// Handle for the move/up listeners installed while a drag is active.
///
/// Dropping it uninstalls the listeners.
#[derive(Debug)]
pub struct PointerSubscription {
    live: Arc<AtomicUsize>,
}

impl PointerSubscription {
    fn acquire(live: &Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::Relaxed);
        Self {
            live: Arc::clone(live),
        }
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Drag state machine: `Idle` <-> `Dragging(element)`.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    subscription: Option<PointerSubscription>,
    live: Arc<AtomicUsize>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Number of installed pointer listeners (0 or 1).
    pub fn active_listeners(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    /// Grab `element`. Fails if another drag has not been released yet.
    pub fn pointer_down(&mut self, element: TextElement) -> Result<(), DragError> {
        if let DragState::Dragging(held) = self.state {
            warn!(?held, pressed = ?element, "Pointer-down while a drag is active");
            return Err(DragError::AlreadyDragging {
                held,
                pressed: element,
            });
        }

        debug!(?element, "Drag started");
        self.subscription = Some(PointerSubscription::acquire(&self.live));
        self.state = DragState::Dragging(element);
        Ok(())
    }

    /// Move the held label to the pointer. No-op while idle.
    ///
    /// Returns the element that moved, if any.
    pub fn pointer_move(
        &mut self,
        model: &mut PlacementModel,
        client_x: f64,
        client_y: f64,
        surface: Surface,
    ) -> Option<TextElement> {
        let DragState::Dragging(element) = self.state else {
            return None;
        };
        let (x_pct, y_pct) = surface.to_pct(client_x, client_y);
        model.set_anchor(element, x_pct, y_pct);
        Some(element)
    }

    /// Release the drag. Always ends in `Idle`.
    pub fn pointer_up(&mut self) {
        if let DragState::Dragging(element) = self.state {
            debug!(?element, "Drag ended");
        }
        self.subscription = None;
        self.state = DragState::Idle;
    }
}
