//! Pointer interaction for the plantings layer.
//!
//! ## Architecture
//!
//! Raw pointer events are resolved to features by `MapApp`; the handlers here
//! only turn "which feature" into engine calls. Hover state is a field of
//! `HoverTracker`, never process-wide.
//!
//! ## Modules
//!
//! - `hover` - single hovered feature, feature-state set/unset, cursor
//! - `selection` - click to fly to a centroid, empty click to restore padding

mod hover;
mod selection;

pub use hover::HoverTracker;
pub use selection::{ClickOutcome, SelectionController};
