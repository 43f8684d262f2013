//! Pointer sessions over the plantings layer, driven through `MapApp`.

use crate::helpers::{
    TestMapBuilder, engine, engine_mut, hover_calls, id, planting_ref, point_at,
};
use orchardmap::constants::{PLANTINGS_SOURCE_ID, PLANTINGS_SOURCE_LAYER};
use orchardmap::engine::EngineCall;
use orchardmap::types::{Cursor, Feature, FeatureRef, LngLat};
use orchardmap::MapEvent;
use serde_json::Map;

const A: LngLat = LngLat::new(11.30, 46.60);
const B: LngLat = LngLat::new(11.45, 46.65);
const EMPTY: LngLat = LngLat::new(11.3677, 46.6131);

fn hover(n: u64, value: bool) -> EngineCall {
    EngineCall::SetFeatureState {
        feature: planting_ref(n),
        key: "hover".to_string(),
        value,
    }
}

#[test]
fn test_enter_switch_leave_session() {
    let mut app = TestMapBuilder::new()
        .with_planting(42, "GOLDEN", A)
        .with_planting(7, "GALA", B)
        .build();

    let (a, b, empty) = (point_at(&app, A), point_at(&app, B), point_at(&app, EMPTY));
    app.handle_event(MapEvent::PointerMove(a));
    assert_eq!(app.hover().current(), Some(&planting_ref(42)));

    app.handle_event(MapEvent::PointerMove(b));
    assert_eq!(app.hover().current(), Some(&planting_ref(7)));

    app.handle_event(MapEvent::PointerMove(empty));
    assert!(app.hover().current().is_none());

    assert_eq!(
        engine(&app).calls(),
        &[
            EngineCall::Cursor(Cursor::Pointer),
            hover(42, true),
            hover(42, false),
            hover(7, true),
            hover(7, false),
            EngineCall::Cursor(Cursor::Default),
        ]
    );
    assert!(engine(&app).features_with_state("hover").is_empty());
    assert_eq!(engine(&app).cursor(), Cursor::Default);
}

#[test]
fn test_moving_within_a_planting_is_quiet() {
    let mut app = TestMapBuilder::new().with_planting(42, "GOLDEN", A).build();

    let a = point_at(&app, A);
    app.handle_event(MapEvent::PointerMove(a));
    let after_first = engine(&app).calls().len();

    for dx in [1.0, 2.0, -1.0] {
        let mut nudged = a;
        nudged.x += dx;
        app.handle_event(MapEvent::PointerMove(nudged));
    }

    assert_eq!(engine(&app).calls().len(), after_first);
    assert_eq!(engine(&app).features_with_state("hover"), vec![planting_ref(42)]);
}

#[test]
fn test_leaving_the_canvas_clears_hover() {
    let mut app = TestMapBuilder::new().with_planting(42, "GOLDEN", A).build();

    let a = point_at(&app, A);
    app.handle_event(MapEvent::PointerMove(a));
    app.handle_event(MapEvent::PointerLeave);

    assert_eq!(hover_calls(engine(&app).calls()), vec![(id(42), true), (id(42), false)]);
    assert_eq!(engine(&app).cursor(), Cursor::Default);

    // A second leave has nothing to undo
    engine_mut(&mut app).take_calls();
    app.handle_event(MapEvent::PointerLeave);
    assert!(engine(&app).calls().is_empty());
}

#[test]
fn test_empty_area_without_prior_hover_issues_nothing() {
    let mut app = TestMapBuilder::new().with_planting(42, "GOLDEN", A).build();

    let empty = point_at(&app, EMPTY);
    app.handle_event(MapEvent::PointerMove(empty));

    assert!(engine(&app).calls().is_empty());
}

#[test]
fn test_pointer_ignored_before_style_load() {
    let mut app = TestMapBuilder::new()
        .with_planting(42, "GOLDEN", A)
        .without_style()
        .build();

    let a = point_at(&app, A);
    app.handle_event(MapEvent::PointerMove(a));
    assert!(engine(&app).calls().is_empty());
    assert!(app.hover().current().is_none());

    app.handle_event(MapEvent::Load);
    engine_mut(&mut app).take_calls();
    app.handle_event(MapEvent::PointerMove(a));
    assert_eq!(hover_calls(engine(&app).calls()), vec![(id(42), true)]);
}

fn anonymous_planting() -> Feature {
    Feature {
        id: None,
        source: PLANTINGS_SOURCE_ID.to_string(),
        source_layer: Some(PLANTINGS_SOURCE_LAYER.to_string()),
        properties: Map::new(),
    }
}

#[test]
fn test_feature_without_id_sets_cursor_only() {
    let mut app = TestMapBuilder::new().with_feature(anonymous_planting(), A).build();

    let a = point_at(&app, A);
    app.handle_event(MapEvent::PointerMove(a));

    assert_eq!(engine(&app).calls(), &[EngineCall::Cursor(Cursor::Pointer)]);
    assert!(app.hover().current().is_none());
}

#[test]
fn test_moving_onto_feature_without_id_clears_hover() {
    let mut app = TestMapBuilder::new()
        .with_planting(42, "GOLDEN", A)
        .with_feature(anonymous_planting(), B)
        .build();

    let (a, b) = (point_at(&app, A), point_at(&app, B));
    app.handle_event(MapEvent::PointerMove(a));
    app.handle_event(MapEvent::PointerMove(b));

    assert!(app.hover().current().is_none());
    assert!(engine(&app).features_with_state("hover").is_empty());
    // Still over the layer, so the cursor stays interactive
    assert_eq!(
        engine(&app).calls(),
        &[EngineCall::Cursor(Cursor::Pointer), hover(42, true), hover(42, false)]
    );
    assert_eq!(engine(&app).cursor(), Cursor::Pointer);

    // Back onto the planting re-marks it
    app.handle_event(MapEvent::PointerMove(a));
    assert_eq!(engine(&app).features_with_state("hover"), vec![planting_ref(42)]);
}

#[test]
fn test_string_ids_are_tracked() {
    let mut feature = crate::helpers::planting(0, "FUJI", None);
    feature.id = Some("plot-7".into());
    let mut app = TestMapBuilder::new().with_feature(feature, A).build();

    let a = point_at(&app, A);
    app.handle_event(MapEvent::PointerMove(a));

    let expected = FeatureRef::new(PLANTINGS_SOURCE_ID, Some(PLANTINGS_SOURCE_LAYER), "plot-7");
    assert_eq!(engine(&app).features_with_state("hover"), vec![expected]);
}

#[test]
fn test_other_sources_are_not_interactive() {
    let mut foreign = crate::helpers::planting(9, "GALA", None);
    foreign.source = "elevation".to_string();
    foreign.source_layer = None;
    let mut app = TestMapBuilder::new().with_feature(foreign, A).build();

    let a = point_at(&app, A);
    app.handle_event(MapEvent::PointerMove(a));

    assert!(engine(&app).calls().is_empty());
}
