//! Coordinate readout shown above the map.

use crate::types::{CameraState, LngLat};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub lng: f64,
    pub lat: f64,
    pub zoom: f64,
}

impl ViewState {
    pub fn new(center: LngLat, zoom: f64) -> Self {
        Self {
            lng: center.lng,
            lat: center.lat,
            zoom,
        }
    }

    pub fn update(&mut self, camera: &CameraState) {
        self.lng = camera.center.lng;
        self.lat = camera.center.lat;
        self.zoom = camera.zoom;
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Longitude: {:.4} | Latitude: {:.4} | Zoom: {:.2}",
            self.lng, self.lat, self.zoom
        )
    }
}
