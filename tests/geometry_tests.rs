//! Tests for grid drawing and the pixel coordinate model

mod common;

use common::{DrawOp, MockSurface};
use e_board::{BoardConfig, BoardGrid};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_reference_scenario_8x8_800x500() {
    let mut surface = MockSurface::new();
    let board = BoardGrid::new(BoardConfig::new(8, 8, 800.0, 500.0), &mut surface).unwrap();

    let g = board.geometry();
    assert!(approx(g.cell_width, 80.0));
    assert!(approx(g.cell_height, 50.0));
    assert!(approx(g.x_offset, 120.0));
    assert!(approx(g.y_offset, 75.0));
    let (x, y) = board.cell_to_pixel(0, 0);
    assert!(approx(x, 120.0) && approx(y, 75.0));
}

#[test]
fn test_construction_draws_rows_plus_cols_lines() {
    let mut surface = MockSurface::new();
    let board = BoardGrid::new(BoardConfig::new(3, 5, 100.0, 100.0), &mut surface).unwrap();

    let lines = surface.live_lines();
    assert_eq!(lines.len(), 3 + 5);
    assert_eq!(surface.created_count(), 3 + 5);

    let g = *board.geometry();
    let span_x = g.cell_width * 4.0;
    let span_y = g.cell_height * 2.0;
    for op in lines {
        let DrawOp::Line { x1, y1, x2, y2, .. } = op else {
            panic!("expected a line, got {:?}", op);
        };
        if x1 == x2 {
            // vertical line spans the full board height
            assert!(approx(y2 - y1, span_y));
            assert!(approx(*y1, g.y_offset));
        } else {
            assert!(approx(*y1, *y2));
            assert!(approx(x2 - x1, span_x));
            assert!(approx(*x1, g.x_offset));
        }
    }
}

#[test]
fn test_line_positions_follow_cell_pitch() {
    let mut surface = MockSurface::new();
    let board = BoardGrid::new(BoardConfig::new(2, 3, 100.0, 100.0), &mut surface).unwrap();
    let g = *board.geometry();

    let vertical_xs: Vec<f64> = surface
        .live_lines()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Line { x1, x2, .. } if x1 == x2 => Some(*x1),
            _ => None,
        })
        .collect();
    assert_eq!(
        vertical_xs,
        vec![g.x_offset, g.x_offset + g.cell_width, g.x_offset + g.cell_width * 2.0]
    );
}

#[test]
fn test_redrawing_duplicates_lines() {
    let mut surface = MockSurface::new();
    let mut board = BoardGrid::new(BoardConfig::new(2, 2, 100.0, 100.0), &mut surface).unwrap();
    assert_eq!(surface.created_count(), 4);
    // a second draw stacks a duplicate set; avoiding that is the caller's job
    board.draw_board(&mut surface);
    assert_eq!(surface.created_count(), 8);
}

#[test]
fn test_piece_drawn_centered_with_marker_radius() {
    let mut surface = MockSurface::new();
    let mut board = BoardGrid::new(BoardConfig::default(), &mut surface).unwrap();
    board.place_piece(&mut surface, 2, 5, "white", true);

    let (_, op) = surface.created.last().unwrap();
    let DrawOp::Oval { x1, y1, x2, y2, fill } = op else {
        panic!("expected an oval, got {:?}", op);
    };
    let (cx, cy) = board.cell_to_pixel(2, 5);
    let r = board.geometry().marker_radius;
    assert_eq!((*x1, *y1), (cx - r, cy - r));
    assert_eq!((*x2, *y2), (cx + r, cy + r));
    assert_eq!(fill, "white");
}

#[test]
fn test_rejects_invalid_geometry_at_construction() {
    let mut surface = MockSurface::new();
    assert!(BoardGrid::new(BoardConfig::new(0, 8, 800.0, 500.0), &mut surface).is_err());
    assert!(BoardGrid::new(BoardConfig::new(8, 0, 800.0, 500.0), &mut surface).is_err());
    assert!(BoardGrid::new(BoardConfig::new(8, 8, -10.0, 500.0), &mut surface).is_err());
    // nothing may be drawn on a rejected construction
    assert_eq!(surface.created_count(), 0);
}
