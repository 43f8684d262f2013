//! Core types shared by the input handlers, the style tables and the engine.
//!
//! These are plain data: geographic and screen coordinates, feature identity,
//! camera commands. None of them own engine resources.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// Coordinates
// ============================================================================

/// A geographic position in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }
}

impl fmt::Display for LngLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lng, self.lat)
    }
}

/// A pixel position relative to the top-left corner of the map container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the map container in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Viewport insets that shift the visual center of the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Padding {
    pub const ZERO: Padding = Padding {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

// ============================================================================
// Features
// ============================================================================

/// Engine-assigned feature identifier. Vector tiles carry either form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Number(u64),
    String(String),
}

impl From<u64> for FeatureId {
    fn from(id: u64) -> Self {
        FeatureId::Number(id)
    }
}

impl From<&str> for FeatureId {
    fn from(id: &str) -> Self {
        FeatureId::String(id.to_string())
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureId::Number(n) => write!(f, "{n}"),
            FeatureId::String(s) => f.write_str(s),
        }
    }
}

/// Address of a feature's per-feature state inside the engine.
///
/// Only valid while the tile holding the feature is loaded. This layer never
/// owns the feature, it only refers to it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureRef {
    pub source: String,
    pub source_layer: Option<String>,
    pub id: FeatureId,
}

impl FeatureRef {
    pub fn new(source: impl Into<String>, source_layer: Option<&str>, id: impl Into<FeatureId>) -> Self {
        Self {
            source: source.into(),
            source_layer: source_layer.map(str::to_string),
            id: id.into(),
        }
    }
}

impl fmt::Display for FeatureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source_layer {
            Some(layer) => write!(f, "{}/{}#{}", self.source, layer, self.id),
            None => write!(f, "{}#{}", self.source, self.id),
        }
    }
}

/// A feature as returned by a hit query: identity plus its attribute bag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: Option<FeatureId>,
    pub source: String,
    pub source_layer: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Feature {
    /// The state address of this feature, if the tile assigned it an id.
    pub fn reference(&self) -> Option<FeatureRef> {
        self.id.clone().map(|id| FeatureRef {
            source: self.source.clone(),
            source_layer: self.source_layer.clone(),
            id,
        })
    }

    /// Text attribute lookup; non-string values read as absent.
    pub fn text_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

// ============================================================================
// Camera & Cursor
// ============================================================================

/// Camera transition handed to the engine. The engine animates it; a newer
/// command supersedes one still in flight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CameraCommand {
    /// Instant center/zoom change
    JumpTo { center: LngLat, zoom: f64 },
    /// Animated flight to a target with viewport padding
    FlyTo {
        center: LngLat,
        zoom: f64,
        padding: Padding,
    },
    /// Animated padding-only change
    EaseTo { padding: Padding },
}

/// Camera as last reported by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub center: LngLat,
    pub zoom: f64,
    pub padding: Padding,
}

/// Mouse cursor affordance over the map canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}
