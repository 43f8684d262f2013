//! Unit tests for centroid extraction.

use crate::helpers::planting;
use orchardmap::centroid::{extract_centroid, feature_centroid, parse_centroid};
use orchardmap::types::LngLat;
use orchardmap::CentroidError;
use serde_json::{Map, Value, json};

fn props(centroid: Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("centroid".to_string(), centroid);
    map
}

#[test]
fn test_wkt_point_yields_lng_lat() {
    let position = extract_centroid(&props(json!("POINT (11.37 46.61)"))).unwrap();
    assert_eq!(position, Some(LngLat::new(11.37, 46.61)));
}

#[test]
fn test_values_match_tokens_exactly() {
    let position = parse_centroid("POINT (11.234567891 46.987654321)").unwrap();
    assert_eq!(position.lng, "11.234567891".parse::<f64>().unwrap());
    assert_eq!(position.lat, "46.987654321".parse::<f64>().unwrap());
}

#[test]
fn test_missing_attribute_is_no_coordinate() {
    assert_eq!(extract_centroid(&Map::new()), Ok(None));
}

#[test]
fn test_empty_attribute_is_no_coordinate() {
    assert_eq!(extract_centroid(&props(json!(""))), Ok(None));
    assert_eq!(extract_centroid(&props(json!("   "))), Ok(None));
}

#[test]
fn test_non_text_attribute_is_no_coordinate() {
    assert_eq!(extract_centroid(&props(json!(null))), Ok(None));
    assert_eq!(extract_centroid(&props(json!([11.37, 46.61]))), Ok(None));
}

#[test]
fn test_wrong_token_count_is_malformed() {
    let err = extract_centroid(&props(json!("POINT (11.37)"))).unwrap_err();
    assert!(matches!(err, CentroidError::TokenCount { found: 1, .. }));

    let err = extract_centroid(&props(json!("POINT EMPTY"))).unwrap_err();
    assert!(matches!(err, CentroidError::TokenCount { found: 0, .. }));
}

#[test]
fn test_non_numeric_token_is_malformed() {
    let err = extract_centroid(&props(json!("POINT (11.37 46.61.5)"))).unwrap_err();
    assert!(matches!(err, CentroidError::InvalidNumber { .. }));

    // Punctuation survives cleanup and breaks the number
    let err = extract_centroid(&props(json!("POINT (11.37, 46.61)"))).unwrap_err();
    assert!(matches!(err, CentroidError::InvalidNumber { ref token, .. } if token == "11.37,"));
}

#[test]
fn test_feature_centroid_reads_attribute_bag() {
    let feature = planting(1, "GALA", Some("POINT (11.2 46.5)"));
    assert_eq!(feature_centroid(&feature), Ok(Some(LngLat::new(11.2, 46.5))));

    let bare = planting(2, "GALA", None);
    assert_eq!(feature_centroid(&bare), Ok(None));
}

#[test]
fn test_error_message_names_input() {
    let err = parse_centroid("POINT (1 2 3)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed centroid \"POINT (1 2 3)\": expected 2 numbers, found 3"
    );
}
