//! Click handling - focus the camera on a planting, or restore framing.

use crate::centroid::feature_centroid;
use crate::constants::{FOCUS_PADDING, FOCUS_ZOOM};
use crate::engine::MapEngine;
use crate::types::{CameraCommand, Feature, LngLat, Padding};
use tracing::{debug, warn};

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// Camera is flying to the feature's centroid
    Focused(LngLat),
    /// A feature was hit but has no usable centroid; camera untouched
    NoCentroid,
    /// Empty map area: padding eased back to zero
    Deselected,
}

/// Stateless click-to-focus logic. Only the focus parameters are kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionController {
    zoom: f64,
    padding: Padding,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self {
            zoom: FOCUS_ZOOM,
            padding: FOCUS_PADDING,
        }
    }
}

impl SelectionController {
    pub fn new(zoom: f64, padding: Padding) -> Self {
        Self { zoom, padding }
    }

    pub fn on_click<E: MapEngine + ?Sized>(&self, engine: &mut E, hit: Option<&Feature>) -> ClickOutcome {
        let Some(feature) = hit else {
            engine.apply_camera(&CameraCommand::EaseTo {
                padding: Padding::ZERO,
            });
            return ClickOutcome::Deselected;
        };

        match feature_centroid(feature) {
            Ok(Some(center)) => {
                engine.apply_camera(&CameraCommand::FlyTo {
                    center,
                    zoom: self.zoom,
                    padding: self.padding,
                });
                ClickOutcome::Focused(center)
            }
            Ok(None) => {
                debug!(id = ?feature.id, "clicked feature has no centroid");
                ClickOutcome::NoCentroid
            }
            Err(e) => {
                warn!(id = ?feature.id, "{}", e);
                ClickOutcome::NoCentroid
            }
        }
    }
}
