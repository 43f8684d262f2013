//! Centroid extraction from feature attributes.
//!
//! Plantings carry a human-written `centroid` attribute such as
//! `POINT (11.37 46.61)`. Letters and parentheses are stripped and the two
//! remaining numbers are read as longitude then latitude.

use crate::constants::CENTROID_PROPERTY;
use crate::error::CentroidError;
use crate::types::{Feature, LngLat};
use serde_json::{Map, Value};

/// Read the centroid of a feature.
///
/// Returns `Ok(None)` when the attribute is absent, not text, or blank.
pub fn extract_centroid(properties: &Map<String, Value>) -> Result<Option<LngLat>, CentroidError> {
    match properties.get(CENTROID_PROPERTY).and_then(Value::as_str) {
        Some(raw) if !raw.trim().is_empty() => parse_centroid(raw).map(Some),
        _ => Ok(None),
    }
}

/// Convenience wrapper over [`extract_centroid`] for a hit feature.
pub fn feature_centroid(feature: &Feature) -> Result<Option<LngLat>, CentroidError> {
    extract_centroid(&feature.properties)
}

/// Parse a centroid description into `(lng, lat)`.
pub fn parse_centroid(raw: &str) -> Result<LngLat, CentroidError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_alphabetic() && *c != '(' && *c != ')')
        .collect();

    let tokens: Vec<&str> = cleaned.trim_start().split_whitespace().collect();
    let [lng, lat] = tokens.as_slice() else {
        return Err(CentroidError::TokenCount {
            raw: raw.to_string(),
            found: tokens.len(),
        });
    };

    Ok(LngLat::new(parse_component(raw, lng)?, parse_component(raw, lat)?))
}

fn parse_component(raw: &str, token: &str) -> Result<f64, CentroidError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CentroidError::InvalidNumber {
            raw: raw.to_string(),
            token: token.to_string(),
        })
}
