//! Hover tracking - at most one highlighted planting at a time.
//!
//! ## State Transitions
//!
//! ```text
//! None    -> Some(A)   (move over A: set(A))
//! Some(A) -> Some(B)   (move to B: unset(A), set(B))
//! Some(A) -> Some(A)   (move within A: no engine calls)
//! Some(A) -> None      (leave layer: unset(A), cursor reset)
//! Some(A) -> None      (move onto a feature without id: unset(A))
//! ```

use crate::constants::HOVER_STATE_KEY;
use crate::engine::MapEngine;
use crate::types::{Cursor, FeatureRef};
use tracing::trace;

/// Owns the identity of the hovered feature and mirrors it into the engine's
/// `hover` feature state.
#[derive(Debug, Default)]
pub struct HoverTracker {
    current: Option<FeatureRef>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The feature currently marked hovered, if any.
    pub fn current(&self) -> Option<&FeatureRef> {
        self.current.as_ref()
    }

    pub fn is_hovering(&self) -> bool {
        self.current.is_some()
    }

    /// Pointer entered the interactive layer.
    pub fn on_pointer_enter<E: MapEngine + ?Sized>(&mut self, engine: &mut E) {
        engine.set_cursor(Cursor::Pointer);
    }

    /// Pointer moved over `feature`.
    pub fn on_pointer_move<E: MapEngine + ?Sized>(&mut self, engine: &mut E, feature: FeatureRef) {
        if self.current.as_ref() == Some(&feature) {
            return;
        }

        if let Some(previous) = self.current.take() {
            trace!(%previous, "unhover");
            engine.set_feature_state(&previous, HOVER_STATE_KEY, false);
        }

        trace!(%feature, "hover");
        engine.set_feature_state(&feature, HOVER_STATE_KEY, true);
        self.current = Some(feature);
    }

    /// Unmark the hovered feature, leaving the cursor alone.
    pub fn clear<E: MapEngine + ?Sized>(&mut self, engine: &mut E) {
        if let Some(previous) = self.current.take() {
            trace!(%previous, "unhover");
            engine.set_feature_state(&previous, HOVER_STATE_KEY, false);
        }
    }

    /// Pointer left the interactive layer.
    pub fn on_pointer_leave<E: MapEngine + ?Sized>(&mut self, engine: &mut E) {
        self.clear(engine);
        engine.set_cursor(Cursor::Default);
    }
}
