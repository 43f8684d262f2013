//! Spatial Index Module
//!
//! R-tree over feature bounding boxes in geographic coordinates. Backs the
//! hit queries of the in-memory engine, O(log n) per pointer event.

use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Longitude/latitude bounding box of a feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GeoBounds {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west: west.min(east),
            south: south.min(north),
            east: west.max(east),
            north: south.max(north),
        }
    }

    /// Square box of `half_size` degrees around a point.
    pub fn around(lng: f64, lat: f64, half_size: f64) -> Self {
        Self::new(lng - half_size, lat - half_size, lng + half_size, lat + half_size)
    }

    #[inline]
    pub fn contains(&self, lng: f64, lat: f64) -> bool {
        lng >= self.west && lng <= self.east && lat >= self.south && lat <= self.north
    }
}

/// An indexed entry: the engine's slot for the feature plus its bounds.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub slot: u64,
    pub bounds: GeoBounds,
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.west, self.bounds.south],
            [self.bounds.east, self.bounds.north],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

/// R-tree keyed by slot, with a side table so entries can be replaced.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<u64, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, slot: u64, bounds: GeoBounds) {
        if let Some(old_entry) = self.entries.remove(&slot) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry { slot, bounds };
        self.tree.insert(entry);
        self.entries.insert(slot, entry);
    }

    pub fn remove(&mut self, slot: u64) -> bool {
        if let Some(entry) = self.entries.remove(&slot) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Slots whose bounds contain the point, in no particular order.
    pub fn query_point(&self, lng: f64, lat: f64) -> Vec<u64> {
        let point_envelope = AABB::from_point([lng, lat]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.bounds.contains(lng, lat))
            .map(|entry| entry.slot)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
