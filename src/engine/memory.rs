//! In-memory engine.
//!
//! Holds resident features in an R-tree, keeps per-feature state, applies
//! camera commands instantly and records every call it receives. Used by the
//! command-line tool and as the engine in tests.

use super::{MapEngine, MapOptions};
use crate::constants::{MAX_MERCATOR_LAT, TILE_SIZE};
use crate::spatial_index::{GeoBounds, SpatialIndex};
use crate::style::{LayerSpec, SourceSpec, TerrainSpec};
use crate::types::{
    CameraCommand, CameraState, Cursor, Feature, FeatureRef, LngLat, ScreenPoint, Viewport,
};
use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;
use tracing::{debug, trace};

/// A call as received by the engine, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    AddSource { id: String },
    AddLayer { id: String },
    SetTerrain { source: Option<String> },
    SetFeatureState { feature: FeatureRef, key: String, value: bool },
    Camera(CameraCommand),
    Cursor(Cursor),
}

struct ResidentFeature {
    feature: Feature,
    bounds: GeoBounds,
}

pub struct MemoryEngine {
    viewport: Viewport,
    camera: CameraState,
    cursor: Cursor,
    sources: Vec<(String, SourceSpec)>,
    layers: Vec<LayerSpec>,
    terrain: Option<TerrainSpec>,
    features: Vec<Option<ResidentFeature>>,
    index: SpatialIndex,
    resident: HashSet<FeatureRef>,
    feature_state: HashMap<FeatureRef, HashMap<String, bool>>,
    calls: Vec<EngineCall>,
}

impl MemoryEngine {
    pub fn new(options: &MapOptions) -> Self {
        debug!(style = %options.style_url, "creating in-memory map engine");
        Self {
            viewport: options.viewport,
            camera: options.camera,
            cursor: Cursor::Default,
            sources: Vec::new(),
            layers: Vec::new(),
            terrain: None,
            features: Vec::new(),
            index: SpatialIndex::new(),
            resident: HashSet::new(),
            feature_state: HashMap::new(),
            calls: Vec::new(),
        }
    }

    /// Make a feature resident, as if its tile had loaded.
    pub fn insert_feature(&mut self, feature: Feature, bounds: GeoBounds) {
        let slot = self.features.len() as u64;
        if let Some(reference) = feature.reference() {
            self.resident.insert(reference);
        }
        self.index.insert(slot, bounds);
        self.features.push(Some(ResidentFeature { feature, bounds }));
    }

    /// Drop every feature of a source along with its state, as on tile eviction.
    pub fn evict_source(&mut self, source: &str) -> usize {
        let mut evicted = 0;
        for (slot, entry) in self.features.iter_mut().enumerate() {
            if entry.as_ref().is_some_and(|r| r.feature.source == source) {
                if let Some(reference) = entry.take().and_then(|r| r.feature.reference()) {
                    self.resident.remove(&reference);
                    self.feature_state.remove(&reference);
                }
                self.index.remove(slot as u64);
                evicted += 1;
            }
        }
        debug!(source, evicted, "evicted features");
        evicted
    }

    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Drain the call log.
    pub fn take_calls(&mut self) -> Vec<EngineCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn feature_state(&self, feature: &FeatureRef) -> Option<&HashMap<String, bool>> {
        self.feature_state.get(feature)
    }

    /// Features whose `key` flag is currently true.
    pub fn features_with_state(&self, key: &str) -> Vec<FeatureRef> {
        self.feature_state
            .iter()
            .filter(|(_, state)| state.get(key).copied().unwrap_or(false))
            .map(|(feature, _)| feature.clone())
            .collect()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|(id, _)| id.as_str())
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    pub fn terrain(&self) -> Option<&TerrainSpec> {
        self.terrain.as_ref()
    }

    pub fn bounds_of(&self, feature: &FeatureRef) -> Option<GeoBounds> {
        self.features
            .iter()
            .flatten()
            .find(|r| r.feature.reference().as_ref() == Some(feature))
            .map(|r| r.bounds)
    }

    // ========================================================================
    // Web Mercator projection
    // ========================================================================

    fn world_size(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.camera.zoom)
    }

    fn visual_center(&self) -> ScreenPoint {
        let p = self.camera.padding;
        ScreenPoint::new(
            p.left + (self.viewport.width - p.left - p.right) / 2.0,
            p.top + (self.viewport.height - p.top - p.bottom) / 2.0,
        )
    }

    fn to_world(&self, position: LngLat) -> (f64, f64) {
        let world = self.world_size();
        let lat = position.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
        let x = (position.lng + 180.0) / 360.0 * world;
        let y = (PI - (PI / 4.0 + lat / 2.0).tan().ln()) / (2.0 * PI) * world;
        (x, y)
    }

    /// Screen point of a geographic position under the current camera.
    pub fn project(&self, position: LngLat) -> ScreenPoint {
        let (cx, cy) = self.to_world(self.camera.center);
        let (x, y) = self.to_world(position);
        let center = self.visual_center();
        ScreenPoint::new(center.x + (x - cx), center.y + (y - cy))
    }

    /// Geographic position under a screen point.
    pub fn unproject(&self, point: ScreenPoint) -> LngLat {
        let world = self.world_size();
        let (cx, cy) = self.to_world(self.camera.center);
        let center = self.visual_center();
        let x = cx + (point.x - center.x);
        let y = cy + (point.y - center.y);
        let lng = x / world * 360.0 - 180.0;
        let lat = (PI - 2.0 * PI * y / world).sinh().atan().to_degrees();
        LngLat::new(lng, lat)
    }
}

impl MapEngine for MemoryEngine {
    fn add_source(&mut self, id: &str, source: &SourceSpec) {
        debug!(id, "add source");
        self.calls.push(EngineCall::AddSource { id: id.to_string() });
        self.sources.retain(|(existing, _)| existing != id);
        self.sources.push((id.to_string(), source.clone()));
    }

    fn add_layer(&mut self, layer: &LayerSpec) {
        debug!(id = %layer.id, "add layer");
        self.calls.push(EngineCall::AddLayer { id: layer.id.clone() });
        self.layers.retain(|existing| existing.id != layer.id);
        self.layers.push(layer.clone());
    }

    fn set_terrain(&mut self, terrain: Option<&TerrainSpec>) {
        self.calls.push(EngineCall::SetTerrain {
            source: terrain.map(|t| t.source.clone()),
        });
        self.terrain = terrain.cloned();
    }

    fn set_feature_state(&mut self, feature: &FeatureRef, key: &str, value: bool) {
        self.calls.push(EngineCall::SetFeatureState {
            feature: feature.clone(),
            key: key.to_string(),
            value,
        });

        if !self.resident.contains(feature) {
            debug!(%feature, key, "feature not resident, state change ignored");
            return;
        }

        trace!(%feature, key, value, "set feature state");
        self.feature_state
            .entry(feature.clone())
            .or_default()
            .insert(key.to_string(), value);
    }

    fn query_rendered_features(&self, point: ScreenPoint, layers: &[&str]) -> Vec<Feature> {
        let position = self.unproject(point);
        let mut slots = self.index.query_point(position.lng, position.lat);
        // Later inserts draw on top
        slots.sort_unstable_by(|a, b| b.cmp(a));

        let hits: Vec<&Feature> = slots
            .iter()
            .filter_map(|slot| self.features.get(*slot as usize)?.as_ref())
            .map(|r| &r.feature)
            .collect();

        let hits = &hits;
        self.layers
            .iter()
            .rev()
            .filter(|layer| layers.contains(&layer.id.as_str()))
            .flat_map(move |layer| {
                hits.iter()
                    .copied()
                    .filter(move |f| f.source == layer.source && f.source_layer == layer.source_layer)
                    .cloned()
            })
            .collect()
    }

    fn apply_camera(&mut self, command: &CameraCommand) {
        debug!(?command, "camera");
        self.calls.push(EngineCall::Camera(command.clone()));
        match *command {
            CameraCommand::JumpTo { center, zoom } => {
                self.camera.center = center;
                self.camera.zoom = zoom;
            }
            CameraCommand::FlyTo { center, zoom, padding } => {
                self.camera = CameraState { center, zoom, padding };
            }
            CameraCommand::EaseTo { padding } => {
                self.camera.padding = padding;
            }
        }
    }

    fn camera(&self) -> CameraState {
        self.camera
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.calls.push(EngineCall::Cursor(cursor));
        self.cursor = cursor;
    }
}
