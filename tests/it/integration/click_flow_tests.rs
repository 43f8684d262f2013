//! Click-to-focus and the coordinate readout.

use crate::helpers::{TestMapBuilder, camera_calls, engine, engine_mut, planting, point_at};
use orchardmap::input::ClickOutcome;
use orchardmap::types::{CameraCommand, LngLat, Padding};
use orchardmap::MapEvent;

const A: LngLat = LngLat::new(11.30, 46.60);
const EMPTY: LngLat = LngLat::new(11.3677, 46.6131);

#[test]
fn test_click_planting_flies_to_centroid() {
    let mut app = TestMapBuilder::new().with_planting(42, "GOLDEN", A).build();

    let outcome = app.handle_click(point_at(&app, A));

    assert_eq!(outcome, Some(ClickOutcome::Focused(A)));
    assert_eq!(
        camera_calls(engine(&app).calls()),
        vec![CameraCommand::FlyTo {
            center: A,
            zoom: 17.0,
            padding: Padding {
                top: 0.0,
                bottom: 500.0,
                left: 0.0,
                right: 0.0,
            },
        }]
    );
    let selected = app.selected().unwrap();
    assert_eq!(selected.text_property("variety"), Some("GOLDEN"));
}

#[test]
fn test_click_empty_area_restores_padding_and_clears_selection() {
    let mut app = TestMapBuilder::new().with_planting(42, "GOLDEN", A).build();

    app.handle_event(MapEvent::Click(point_at(&app, A)));
    assert!(app.selected().is_some());
    engine_mut(&mut app).take_calls();

    // The flight moved the camera, so project again under the new one
    let outcome = app.handle_click(point_at(&app, LngLat::new(A.lng + 0.05, A.lat)));

    assert_eq!(outcome, Some(ClickOutcome::Deselected));
    assert_eq!(
        camera_calls(engine(&app).calls()),
        vec![CameraCommand::EaseTo { padding: Padding::ZERO }]
    );
    assert!(app.selected().is_none());
}

#[test]
fn test_click_planting_without_centroid_selects_without_moving() {
    let mut app = TestMapBuilder::new()
        .with_feature(planting(7, "GALA", None), A)
        .build();

    let outcome = app.handle_click(point_at(&app, A));

    assert_eq!(outcome, Some(ClickOutcome::NoCentroid));
    assert!(camera_calls(engine(&app).calls()).is_empty());
    assert_eq!(app.selected().and_then(|f| f.text_property("variety")), Some("GALA"));
}

#[test]
fn test_click_before_style_load_does_nothing() {
    let mut app = TestMapBuilder::new().without_style().build();
    assert_eq!(app.handle_click(point_at(&app, EMPTY)), None);
    assert!(engine(&app).calls().is_empty());
}

#[test]
fn test_move_updates_readout() {
    let mut app = TestMapBuilder::new().with_planting(42, "GOLDEN", A).build();
    assert_eq!(
        app.view().to_string(),
        "Longitude: 11.3677 | Latitude: 46.6131 | Zoom: 9.00"
    );

    app.handle_event(MapEvent::Click(point_at(&app, A)));
    app.handle_event(MapEvent::Move);

    assert_eq!(
        app.view().to_string(),
        "Longitude: 11.3000 | Latitude: 46.6000 | Zoom: 17.00"
    );
}
