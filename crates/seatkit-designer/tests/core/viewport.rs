use seatkit_designer::{
    seat_positions, GeometryParams, Point, SeatRef, SeatingState, TableType, Viewport, ZoomLimits,
};

#[test]
fn test_viewport_defaults() {
    let viewport = Viewport::new();
    assert_eq!(viewport.zoom(), 1.0);
    assert_eq!(viewport.pan_x(), 0.0);
    assert_eq!(viewport.pan_y(), 0.0);
    assert_eq!(viewport.to_string(), "Zoom: 1.00x | Pan: (0.0, 0.0)");
}

#[test]
fn test_zoom_is_clamped_and_stepped() {
    let mut viewport = Viewport::with_limits(ZoomLimits {
        min: 0.5,
        max: 2.0,
        step: 2.0,
    });

    viewport.zoom_in();
    assert_eq!(viewport.zoom(), 2.0);
    viewport.zoom_in();
    assert_eq!(viewport.zoom(), 2.0);

    viewport.zoom_out();
    viewport.zoom_out();
    viewport.zoom_out();
    assert_eq!(viewport.zoom(), 0.5);

    viewport.set_zoom(f64::NAN);
    assert_eq!(viewport.zoom(), 0.5);

    viewport.reset_zoom();
    assert_eq!(viewport.zoom(), 1.0);
}

#[test]
fn test_unusable_limits_are_normalized() {
    let mut viewport = Viewport::with_limits(ZoomLimits {
        min: 3.0,
        max: 0.5,
        step: 2.0,
    });
    assert_eq!(viewport.limits().min, 0.5);
    assert_eq!(viewport.limits().max, 3.0);
    viewport.set_zoom(10.0);
    assert_eq!(viewport.zoom(), 3.0);

    let mut viewport = Viewport::with_limits(ZoomLimits {
        min: f64::NAN,
        max: 2.0,
        step: 0.5,
    });
    assert_eq!(viewport.limits(), ZoomLimits::default());
    viewport.zoom_in();
    assert_eq!(viewport.zoom(), 1.2);
}

#[test]
fn test_pan_and_reset() {
    let mut viewport = Viewport::new();
    viewport.pan_by(10.0, -5.0);
    viewport.pan_by(2.0, 1.0);
    assert_eq!((viewport.pan_x(), viewport.pan_y()), (12.0, -4.0));

    viewport.set_zoom(3.0);
    viewport.reset();
    assert_eq!(viewport.zoom(), 1.0);
    assert_eq!((viewport.pan_x(), viewport.pan_y()), (0.0, 0.0));
}

#[test]
fn test_table_to_screen_applies_offset_zoom_and_pan() {
    let mut state = SeatingState::new();
    state.add_table(TableType::Round, None, 100.0, 50.0).unwrap();
    let table = &state.tables()[0];

    let mut viewport = Viewport::new();
    viewport.set_zoom(2.0);
    viewport.set_pan(10.0, 20.0);

    let screen = viewport.table_to_screen(table, Point::new(5.0, 5.0));
    assert_eq!(screen, Point::new((100.0 + 5.0) * 2.0 + 10.0, (50.0 + 5.0) * 2.0 + 20.0));

    let world = viewport.screen_to_world(screen);
    assert_eq!(world, Point::new(105.0, 55.0));
}

#[test]
fn test_zoom_at_keeps_anchor_fixed() {
    let mut viewport = Viewport::new();
    viewport.set_pan(30.0, 40.0);
    let anchor = Point::new(200.0, 150.0);
    let world_before = viewport.screen_to_world(anchor);

    viewport.zoom_at(anchor, 2.0);
    assert_eq!(viewport.zoom(), 2.0);
    let world_after = viewport.screen_to_world(anchor);
    assert!((world_before.x - world_after.x).abs() < 1e-9);
    assert!((world_before.y - world_after.y).abs() < 1e-9);
}

#[test]
fn test_seat_at_hits_marker_through_transform() {
    let mut state = SeatingState::new();
    state.add_table(TableType::Round, None, 100.0, 100.0).unwrap();
    let params = GeometryParams::default();
    let table = &state.tables()[0];
    let marker = seat_positions(table, &params, 1.0)[2];

    let mut viewport = Viewport::new();
    viewport.set_zoom(1.5);
    viewport.set_pan(-20.0, 35.0);

    let screen = viewport.table_to_screen(table, marker.center());
    let hit = viewport.seat_at(state.layout(), &params, screen);
    assert_eq!(hit, Some(SeatRef::new(table.id, table.seats[2].id)));

    let centre_of_table = viewport.table_to_screen(table, Point::new(80.0, 80.0));
    assert_eq!(viewport.seat_at(state.layout(), &params, centre_of_table), None);
}

#[test]
fn test_seat_at_prefers_topmost_table() {
    let mut state = SeatingState::new();
    state.add_table(TableType::Round, None, 0.0, 0.0).unwrap();
    state.add_table(TableType::Round, None, 0.0, 0.0).unwrap();
    let params = GeometryParams::default();
    let top = &state.tables()[1];
    let marker = seat_positions(top, &params, 1.0)[0];

    let viewport = Viewport::new();
    let hit = viewport
        .seat_at(state.layout(), &params, marker.center())
        .unwrap();
    assert_eq!(hit.table_id, top.id);
}
