//! Application-wide constants.
//!
//! Centralizes identifiers, camera defaults and colour values so the style
//! catalog, the input handlers and the tests agree on them.

use crate::types::{LngLat, Padding};

// ============================================================================
// Initial View
// ============================================================================

/// Longitude the map opens at (Bolzano basin)
pub const INITIAL_LNG: f64 = 11.3677;

/// Latitude the map opens at
pub const INITIAL_LAT: f64 = 46.6131;

/// Zoom level the map opens at
pub const INITIAL_ZOOM: f64 = 9.0;

pub const INITIAL_CENTER: LngLat = LngLat::new(INITIAL_LNG, INITIAL_LAT);

// ============================================================================
// Camera Focus
// ============================================================================

/// Zoom level used when flying to a clicked planting
pub const FOCUS_ZOOM: f64 = 17.0;

/// Padding applied while a planting is focused. The bottom inset leaves room
/// for the detail overlay and pushes the visual center upward.
pub const FOCUS_PADDING: Padding = Padding {
    top: 0.0,
    bottom: 500.0,
    left: 0.0,
    right: 0.0,
};

/// Tile size the in-memory engine projects with (Mapbox vector tile size)
pub const TILE_SIZE: f64 = 512.0;

/// Web Mercator latitude limit
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

// ============================================================================
// Sources & Layers
// ============================================================================

/// Default basemap style
pub const DEFAULT_STYLE_URL: &str = "mapbox://styles/mapbox/streets-v11";

/// Vector tileset holding the combined plantings polygons
pub const PLANTINGS_SOURCE_ID: &str = "plantings-combined";
pub const PLANTINGS_TILESET_URL: &str = "mapbox://devgioele.3r62yymc";
pub const PLANTINGS_SOURCE_LAYER: &str = "polygons_combined-9iacsm";

pub const PLANTINGS_FILL_LAYER_ID: &str = "plantings-combined-fill";
pub const PLANTINGS_OUTLINE_LAYER_ID: &str = "plantings-combined-outline";

/// Raster DEM used for 3D terrain and hillshading
pub const TERRAIN_SOURCE_ID: &str = "mapbox-dem";
pub const TERRAIN_TILESET_URL: &str = "mapbox://mapbox.mapbox-terrain-dem-v1";
pub const HILLSHADE_LAYER_ID: &str = "terrain-hillshade";

/// Raster elevation tiles drawn faintly under the plantings
pub const ELEVATION_SOURCE_ID: &str = "elevation";
pub const ELEVATION_TILESET_URL: &str = "mapbox://mapbox.terrain-rgb";
pub const ELEVATION_LAYER_ID: &str = "elevation-raster";
pub const ELEVATION_OPACITY: f64 = 0.25;

pub const RASTER_TILE_SIZE: u32 = 512;
pub const DEM_MAX_ZOOM: u32 = 14;

/// Default vertical exaggeration of the terrain
pub const DEFAULT_TERRAIN_EXAGGERATION: f64 = 1.5;

// ============================================================================
// Feature Attributes & State
// ============================================================================

/// Attribute holding the free-text centroid, e.g. `POINT (11.37 46.61)`
pub const CENTROID_PROPERTY: &str = "centroid";

/// Attribute holding the cultivar name
pub const VARIETY_PROPERTY: &str = "variety";

/// Feature-state flag toggled by the hover tracker
pub const HOVER_STATE_KEY: &str = "hover";

// ============================================================================
// Colors & Paint
// ============================================================================

/// Fill colour for plantings whose variety is not in the palette
pub const FALLBACK_VARIETY_COLOR: &str = "#c5c6d0";

pub const HOVER_FILL_OPACITY: f64 = 0.8;
pub const DEFAULT_FILL_OPACITY: f64 = 0.5;

pub const HOVER_OUTLINE_COLOR: &str = "#000000";
pub const DEFAULT_OUTLINE_COLOR: &str = "#ffffff";

pub const HOVER_OUTLINE_WIDTH: f64 = 3.0;
pub const DEFAULT_OUTLINE_WIDTH: f64 = 1.0;

/// Legend label for the fallback colour
pub const LEGEND_OTHER_LABEL: &str = "Other";

// ============================================================================
// Settings
// ============================================================================

/// Environment variable that overrides the stored access token
pub const ACCESS_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";

pub const SETTINGS_DIR_NAME: &str = "orchardmap";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
