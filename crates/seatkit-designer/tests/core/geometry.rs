use seatkit_designer::geometry::{edge_counts, locate_seat, seat_centers};
use seatkit_designer::{
    seat_positions, GeometryParams, Point, SeatingState, TableConfigUpdate, TableType,
};

const EPS: f64 = 1e-9;

fn assert_point_eq(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < EPS && (actual.y - expected.y).abs() < EPS,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn table_with_seats(table_type: TableType, update: TableConfigUpdate) -> SeatingState {
    let mut state = SeatingState::new();
    let id = state.add_table(table_type, None, 0.0, 0.0).unwrap();
    state.update_table_config(id, &update).unwrap();
    state
}

#[test]
fn test_round_four_seats_on_compass_points() {
    let state = table_with_seats(TableType::Round, TableConfigUpdate::seat_count(4));
    let table = &state.tables()[0];
    assert_eq!((table.width, table.height), (160.0, 160.0));

    let params = GeometryParams::default();
    let centers: Vec<Point> = seat_positions(table, &params, 1.0)
        .iter()
        .map(|p| p.center())
        .collect();

    // radius = 80 + 15 + 8
    assert_point_eq(centers[0], Point::new(80.0, -23.0));
    assert_point_eq(centers[1], Point::new(183.0, 80.0));
    assert_point_eq(centers[2], Point::new(80.0, 183.0));
    assert_point_eq(centers[3], Point::new(-23.0, 80.0));

    let middle = Point::new(80.0, 80.0);
    for c in &centers {
        assert!((c.distance_to(&middle) - 103.0).abs() < EPS);
    }

    // recomputation is bit-identical
    assert_eq!(
        seat_positions(table, &params, 1.0),
        seat_positions(table, &params, 1.0)
    );
}

#[test]
fn test_seat_position_is_top_left_of_marker() {
    let state = table_with_seats(TableType::Round, TableConfigUpdate::seat_count(4));
    let table = &state.tables()[0];
    let params = GeometryParams::default();

    let positions = seat_positions(table, &params, 0.5);
    assert_eq!(positions[0].size, 15.0);
    assert!((positions[0].x - (80.0 - 15.0) * 0.5).abs() < EPS);
    assert!((positions[0].y - (-23.0 - 15.0) * 0.5).abs() < EPS);
}

#[test]
fn test_zero_seats_yield_no_positions() {
    let params = GeometryParams::default();
    for (table_type, update) in [
        (TableType::Round, TableConfigUpdate::seat_count(0)),
        (TableType::Rectangle, TableConfigUpdate::seat_count(0)),
        (TableType::Theater, TableConfigUpdate::theater(0, 8)),
        (TableType::Amphitheater, TableConfigUpdate::amphitheater(vec![])),
    ] {
        let state = table_with_seats(table_type, update);
        let table = &state.tables()[0];
        assert!(table.seats.is_empty());
        assert!(seat_positions(table, &params, 1.0).is_empty());
    }
}

#[test]
fn test_rectangle_seats_surround_table() {
    let mut state = SeatingState::new();
    state.add_table(TableType::Rectangle, None, 0.0, 0.0).unwrap();
    let table = &state.tables()[0];
    let params = GeometryParams::default();

    assert_eq!(edge_counts(10, table.width, table.height), [3, 2, 3, 2]);
    let centers = seat_centers(table, &params);
    assert_eq!(centers.len(), 10);

    let offset = params.seat_offset();
    for c in &centers[0..3] {
        assert_eq!(c.y, -offset);
    }
    for c in &centers[3..5] {
        assert_eq!(c.x, table.width + offset);
    }
    for c in &centers[5..8] {
        assert_eq!(c.y, table.height + offset);
    }
    for c in &centers[8..10] {
        assert_eq!(c.x, -offset);
    }
    // evenly spaced along the top edge
    assert_point_eq(centers[0], Point::new(60.0, -offset));
    assert_point_eq(centers[1], Point::new(120.0, -offset));
    assert_point_eq(centers[2], Point::new(180.0, -offset));
}

#[test]
fn test_square_edge_distribution_for_various_counts() {
    assert_eq!(edge_counts(4, 160.0, 160.0), [1, 1, 1, 1]);
    assert_eq!(edge_counts(5, 160.0, 160.0), [1, 2, 1, 1]);
    assert_eq!(edge_counts(6, 160.0, 160.0), [2, 1, 2, 1]);
    assert_eq!(edge_counts(12, 160.0, 160.0), [3, 3, 3, 3]);
}

#[test]
fn test_theater_rows_below_header() {
    let state = table_with_seats(TableType::Theater, TableConfigUpdate::theater(2, 4));
    let table = &state.tables()[0];
    let params = GeometryParams::default();
    let centers = seat_centers(table, &params);

    assert_eq!(centers.len(), 8);
    // 400 wide, 4 columns; 260 below the header, 2 rows
    assert_point_eq(centers[0], Point::new(50.0, 105.0));
    assert_point_eq(centers[3], Point::new(350.0, 105.0));
    assert_point_eq(centers[4], Point::new(50.0, 235.0));
    assert!(centers.iter().all(|c| c.y > params.header_height));
}

#[test]
fn test_amphitheater_rows_are_concentric_arcs() {
    let state = table_with_seats(
        TableType::Amphitheater,
        TableConfigUpdate::amphitheater(vec![3, 1, 4]),
    );
    let table = &state.tables()[0];
    let params = GeometryParams::default();
    let centers = seat_centers(table, &params);
    assert_eq!(centers.len(), 8);

    assert_eq!(locate_seat(&[3, 1, 4], 3), Some((1, 0, 1)));
    assert_eq!(locate_seat(&[3, 1, 4], 4), Some((2, 0, 4)));

    let cx = table.width / 2.0;
    let cy = params.header_height;
    let compression = params.amphitheater_compression;
    // undo the vertical squash to measure the true radius of each seat
    let radius = |p: &Point| ((p.x - cx).powi(2) + ((p.y - cy) / compression).powi(2)).sqrt();

    for c in &centers[0..3] {
        assert!((radius(c) - 60.0).abs() < 1e-6);
    }
    assert!((radius(&centers[3]) - 100.0).abs() < 1e-6);
    assert!((centers[3].x - cx).abs() < EPS);
    for c in &centers[4..8] {
        assert!((radius(c) - 140.0).abs() < 1e-6);
    }

    // outer seats of a row sit at +-60 degrees
    let half_span = 60f64.to_radians();
    assert_point_eq(
        centers[0],
        Point::new(cx - 60.0 * half_span.sin(), cy + 60.0 * half_span.cos() * compression),
    );
}
