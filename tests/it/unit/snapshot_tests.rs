//! Snapshot tests using the insta crate.
//!
//! The style JSON handed to the engine is checked inline so a change in
//! serialisation shows up as a diff right here.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use orchardmap::constants::{PLANTINGS_SOURCE_ID, TERRAIN_SOURCE_ID};
use orchardmap::style::{NamedSource, legend_entries, outline_color, plantings_sources};

fn source(id: &str) -> NamedSource {
    plantings_sources().into_iter().find(|s| s.id == id).unwrap()
}

// ============================================================================
// Sources
// ============================================================================

#[test]
fn snapshot_plantings_source() {
    insta::assert_json_snapshot!(source(PLANTINGS_SOURCE_ID), @r###"
    {
      "id": "plantings-combined",
      "type": "vector",
      "url": "mapbox://devgioele.3r62yymc"
    }
    "###);
}

#[test]
fn snapshot_terrain_source() {
    insta::assert_json_snapshot!(source(TERRAIN_SOURCE_ID), @r###"
    {
      "id": "mapbox-dem",
      "type": "raster-dem",
      "url": "mapbox://mapbox.mapbox-terrain-dem-v1",
      "tileSize": 512,
      "maxzoom": 14
    }
    "###);
}

// ============================================================================
// Paint expressions
// ============================================================================

#[test]
fn snapshot_outline_color_expression() {
    insta::assert_json_snapshot!(outline_color().to_expression(), @r###"
    [
      "case",
      [
        "boolean",
        [
          "feature-state",
          "hover"
        ],
        false
      ],
      "#000000",
      "#ffffff"
    ]
    "###);
}

// ============================================================================
// Legend
// ============================================================================

#[test]
fn snapshot_legend_head() {
    let legend = legend_entries();
    insta::assert_json_snapshot!(&legend[..2], @r###"
    [
      {
        "label": "Golden Delicious",
        "color": "#ffd128"
      },
      {
        "label": "Gala",
        "color": "#a50518"
      }
    ]
    "###);
}
