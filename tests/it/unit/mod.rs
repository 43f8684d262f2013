//! Unit tests for orchardmap.

mod centroid_tests;
mod settings_tests;
mod snapshot_tests;
