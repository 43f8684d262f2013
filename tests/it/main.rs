//! Single test binary entry point.
//!
//! All tests compile into one binary to keep linking to a single pass.
//!
//! Structure:
//! - helpers: builders for maps, plantings and call-log filters
//! - integration: event flows through `MapApp` end to end
//! - unit: single-component tests

mod unit;
