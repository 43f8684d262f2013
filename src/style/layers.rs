//! Sources and layers registered with the engine once the basemap has loaded.
//!
//! Everything here serialises to the engine's style JSON so a host page can
//! feed it to the renderer unchanged.

use super::expression::RuleTable;
use super::palette::{LegendEntry, legend_entries, variety_fill_color};
use crate::constants::*;
use crate::settings::Settings;
use crate::types::LngLat;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{Map, Value};

/// Data source registration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SourceSpec {
    Vector {
        url: String,
    },
    Raster {
        url: String,
        #[serde(rename = "tileSize")]
        tile_size: u32,
    },
    RasterDem {
        url: String,
        #[serde(rename = "tileSize")]
        tile_size: u32,
        maxzoom: u32,
    },
}

/// Named source, kept in registration order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamedSource {
    pub id: String,
    #[serde(flatten)]
    pub spec: SourceSpec,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Fill,
    Line,
    Raster,
    Hillshade,
}

/// Render layer bound to a source (and, for vector data, a source layer).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayerSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub source: String,
    #[serde(rename = "source-layer", skip_serializing_if = "Option::is_none")]
    pub source_layer: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub layout: Map<String, Value>,
    pub paint: Map<String, Value>,
}

impl LayerSpec {
    pub fn new(id: &str, kind: LayerKind, source: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            source: source.to_string(),
            source_layer: None,
            layout: Map::new(),
            paint: Map::new(),
        }
    }

    pub fn source_layer(mut self, source_layer: &str) -> Self {
        self.source_layer = Some(source_layer.to_string());
        self
    }

    pub fn paint(mut self, property: &str, value: impl Into<Value>) -> Self {
        self.paint.insert(property.to_string(), value.into());
        self
    }
}

/// 3D terrain driven by a raster-dem source.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TerrainSpec {
    pub source: String,
    pub exaggeration: f64,
}

// ============================================================================
// Hover-conditional paint
// ============================================================================

static FILL_OPACITY: Lazy<RuleTable<f64>> =
    Lazy::new(|| RuleTable::hover(HOVER_FILL_OPACITY, DEFAULT_FILL_OPACITY));

static OUTLINE_COLOR: Lazy<RuleTable<&'static str>> =
    Lazy::new(|| RuleTable::hover(HOVER_OUTLINE_COLOR, DEFAULT_OUTLINE_COLOR));

static OUTLINE_WIDTH: Lazy<RuleTable<f64>> =
    Lazy::new(|| RuleTable::hover(HOVER_OUTLINE_WIDTH, DEFAULT_OUTLINE_WIDTH));

pub fn fill_opacity() -> &'static RuleTable<f64> {
    &FILL_OPACITY
}

pub fn outline_color() -> &'static RuleTable<&'static str> {
    &OUTLINE_COLOR
}

pub fn outline_width() -> &'static RuleTable<f64> {
    &OUTLINE_WIDTH
}

// ============================================================================
// Catalog
// ============================================================================

pub fn plantings_sources() -> Vec<NamedSource> {
    vec![
        NamedSource {
            id: ELEVATION_SOURCE_ID.to_string(),
            spec: SourceSpec::Raster {
                url: ELEVATION_TILESET_URL.to_string(),
                tile_size: RASTER_TILE_SIZE,
            },
        },
        NamedSource {
            id: TERRAIN_SOURCE_ID.to_string(),
            spec: SourceSpec::RasterDem {
                url: TERRAIN_TILESET_URL.to_string(),
                tile_size: RASTER_TILE_SIZE,
                maxzoom: DEM_MAX_ZOOM,
            },
        },
        NamedSource {
            id: PLANTINGS_SOURCE_ID.to_string(),
            spec: SourceSpec::Vector {
                url: PLANTINGS_TILESET_URL.to_string(),
            },
        },
    ]
}

/// Layers bottom to top.
pub fn plantings_layers() -> Vec<LayerSpec> {
    vec![
        LayerSpec::new(ELEVATION_LAYER_ID, LayerKind::Raster, ELEVATION_SOURCE_ID)
            .paint("raster-opacity", ELEVATION_OPACITY),
        LayerSpec::new(HILLSHADE_LAYER_ID, LayerKind::Hillshade, TERRAIN_SOURCE_ID)
            .paint("hillshade-exaggeration", 0.5)
            .paint("hillshade-shadow-color", "#473b24"),
        LayerSpec::new(PLANTINGS_FILL_LAYER_ID, LayerKind::Fill, PLANTINGS_SOURCE_ID)
            .source_layer(PLANTINGS_SOURCE_LAYER)
            .paint("fill-color", variety_fill_color().to_expression())
            .paint("fill-opacity", fill_opacity().to_expression()),
        LayerSpec::new(PLANTINGS_OUTLINE_LAYER_ID, LayerKind::Line, PLANTINGS_SOURCE_ID)
            .source_layer(PLANTINGS_SOURCE_LAYER)
            .paint("line-color", outline_color().to_expression())
            .paint("line-width", outline_width().to_expression()),
    ]
}

pub fn terrain(exaggeration: f64) -> TerrainSpec {
    TerrainSpec {
        source: TERRAIN_SOURCE_ID.to_string(),
        exaggeration,
    }
}

/// Everything a host page needs to build the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyleDocument {
    pub style: String,
    pub center: LngLat,
    pub zoom: f64,
    pub sources: Vec<NamedSource>,
    pub layers: Vec<LayerSpec>,
    pub terrain: Option<TerrainSpec>,
    pub legend: Vec<LegendEntry>,
}

impl StyleDocument {
    pub fn from_settings(settings: &Settings) -> Self {
        let view = &settings.initial_view;
        Self {
            style: settings.style_url.clone(),
            center: LngLat::new(view.lng, view.lat),
            zoom: view.zoom,
            sources: plantings_sources(),
            layers: plantings_layers(),
            terrain: (settings.terrain_exaggeration > 0.0).then(|| terrain(settings.terrain_exaggeration)),
            legend: legend_entries(),
        }
    }

    /// Layer ids pointer queries run against.
    pub fn interactive_layers() -> &'static [&'static str] {
        &[PLANTINGS_FILL_LAYER_ID]
    }
}
