//! Application module - the map view state and its event handling.
//!
//! This module is organized into several submodules:
//! - `state` - the MapApp struct, lifecycle enum and interaction sub-struct
//! - `lifecycle` - deferred one-shot initialization and settings reload
//! - `events` - engine event dispatch (load, pointer, click, move)
//! - `view_state` - longitude/latitude/zoom readout

mod events;
mod lifecycle;
mod state;
mod view_state;

pub use events::MapEvent;
pub use state::{InteractionState, Lifecycle, MapApp};
pub use view_state::ViewState;
