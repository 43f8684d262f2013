//! Map engine boundary.
//!
//! The renderer (tile fetching, projection, GPU drawing, camera animation)
//! lives outside this crate. Everything the interaction layer needs from it
//! goes through `MapEngine`. Mutations are fire-and-forget: the engine applies
//! them on its own render cadence and silently drops calls that address
//! features it no longer holds.

mod memory;

pub use memory::{EngineCall, MemoryEngine};

use crate::style::{LayerSpec, SourceSpec, TerrainSpec};
use crate::types::{CameraCommand, CameraState, Cursor, Feature, FeatureRef, ScreenPoint};

pub trait MapEngine {
    /// Register a data source under `id`.
    fn add_source(&mut self, id: &str, source: &SourceSpec);

    /// Register a render layer on top of the existing ones.
    fn add_layer(&mut self, layer: &LayerSpec);

    /// Enable 3D terrain, or disable it with `None`.
    fn set_terrain(&mut self, terrain: Option<&TerrainSpec>);

    /// Set a named boolean flag in a feature's state.
    fn set_feature_state(&mut self, feature: &FeatureRef, key: &str, value: bool);

    /// Features under a screen point, restricted to `layers`, topmost first.
    fn query_rendered_features(&self, point: ScreenPoint, layers: &[&str]) -> Vec<Feature>;

    /// Start a camera transition, superseding any in flight.
    fn apply_camera(&mut self, command: &CameraCommand);

    /// Camera as of the last rendered frame.
    fn camera(&self) -> CameraState;

    fn set_cursor(&mut self, cursor: Cursor);
}

/// Options the engine is created with once the map can initialize.
#[derive(Clone, Debug, PartialEq)]
pub struct MapOptions {
    pub access_token: String,
    pub style_url: String,
    pub camera: CameraState,
    pub viewport: crate::types::Viewport,
}
