//! Interaction layer and style tables for the orchard plantings map.
//!
//! The map engine is external and reached through [`engine::MapEngine`].
//! This crate decides what the engine is told: which sources and layers to
//! register, which feature is hovered, where the camera flies on click.

pub mod app;
pub mod centroid;
pub mod constants;
pub mod engine;
pub mod error;
pub mod input;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod style;
pub mod types;

pub use app::{MapApp, MapEvent};
pub use engine::{MapEngine, MemoryEngine};
pub use error::{CentroidError, MapError, MapResult};
