//! Pointer and wheel handling for the preview surface.
//!
//! Two states: `Idle` and `Dragging`. A press inside the preview starts a
//! drag anchored at the press position; each move while dragging pans by the
//! delta from the anchor and re-anchors; release or leaving the preview ends
//! the drag. Wheel ticks zoom independently of the drag state.

use tracing::debug;

use crate::config::ZoomConfig;
use crate::view::{ViewState, ZoomDirection};

/// Pointer input in preview-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    Wheel { delta_y: f64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { anchor_x: f64, anchor_y: f64 },
}

/// What the caller must do after an input was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Input had no effect.
    Ignored,
    /// Interaction state changed but the picture did not.
    Updated,
    /// The view transform changed; re-render the preview.
    Redraw,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Enter (or re-anchor) the dragging state.
    pub fn press(&mut self, x: f64, y: f64) {
        *self = Self::Dragging {
            anchor_x: x,
            anchor_y: y,
        };
    }

    /// Delta from the anchor to (x, y), re-anchoring. `None` when idle.
    pub fn motion(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        match *self {
            Self::Idle => None,
            Self::Dragging { anchor_x, anchor_y } => {
                self.press(x, y);
                Some((x - anchor_x, y - anchor_y))
            }
        }
    }

    /// Return to idle. True if a drag was in progress.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging
    }
}

/// Apply one pointer event to the drag state and view.
pub fn handle_pointer(
    drag: &mut DragState,
    view: &mut ViewState,
    event: PointerEvent,
    preview_w: u32,
    preview_h: u32,
    zoom: &ZoomConfig,
) -> InputOutcome {
    match event {
        PointerEvent::Down { x, y } => {
            if !contains(preview_w, preview_h, x, y) {
                debug!(x, y, "Pointer down outside preview ignored");
                return InputOutcome::Ignored;
            }
            drag.press(x, y);
            debug!(x, y, "Drag started");
            InputOutcome::Updated
        }
        PointerEvent::Move { x, y } => match drag.motion(x, y) {
            Some((dx, dy)) => {
                view.apply_drag(dx, dy);
                InputOutcome::Redraw
            }
            None => InputOutcome::Ignored,
        },
        PointerEvent::Up | PointerEvent::Leave => {
            if drag.release() {
                debug!(
                    offset_x = view.offset_x,
                    offset_y = view.offset_y,
                    "Drag ended"
                );
                InputOutcome::Updated
            } else {
                InputOutcome::Ignored
            }
        }
        PointerEvent::Wheel { delta_y } => {
            view.apply_zoom(ZoomDirection::from_wheel_delta(delta_y), zoom);
            InputOutcome::Redraw
        }
    }
}

fn contains(width: u32, height: u32, x: f64, y: f64) -> bool {
    (0.0..=width as f64).contains(&x) && (0.0..=height as f64).contains(&y)
}
