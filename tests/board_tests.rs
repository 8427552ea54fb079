//! Board tests - end-to-end drag gestures over the public API

use tui_match::core::{GameBoard, TileGrid};
use tui_match::types::PieceKind::{Chameleon, Hat, Tux, Wildebeest};
use tui_match::types::{Animation, Point, PointF};

/// 4x4 board with a 2x2 Tux square in the bottom-left corner and a
/// match-free checkerboard elsewhere; columns are bottom-up.
fn tux_square_board() -> GameBoard {
    let grid = TileGrid::from_kinds(&[
        vec![Tux, Tux, Hat, Chameleon],
        vec![Tux, Tux, Chameleon, Hat],
        vec![Hat, Chameleon, Hat, Chameleon],
        vec![Chameleon, Hat, Chameleon, Hat],
    ]);
    GameBoard::with_grid(grid, 7)
}

#[test]
fn test_full_drag_gesture_scores_a_triple() {
    // Vertical Tux pair at (0,0)-(0,1), lone Tux at (2,0)
    let grid = TileGrid::from_kinds(&[
        vec![Tux, Tux, Hat, Chameleon],
        vec![Hat, Chameleon, Wildebeest, Hat],
        vec![Tux, Wildebeest, Hat, Chameleon],
        vec![Chameleon, Hat, Chameleon, Wildebeest],
    ]);
    let mut board = GameBoard::with_grid(grid, 7);

    // Press on the lone Tux, drag it one tile left, release
    board.drag_start(PointF::new(2.5, 0.5));
    board.drag_move(PointF::new(2.0, 0.5));
    board.drag_move(PointF::new(1.6, 0.5));
    let score = board.drag_release_and_check_move(PointF::new(1.6, 0.5));

    assert_eq!(score, 3);
    for (x, y) in [(0, 0), (0, 1), (1, 0)] {
        assert_eq!(
            board.grid().tile(x, y).animation,
            Animation::Delete,
            "tile ({}, {}) should be deleting",
            x,
            y
        );
    }
}

#[test]
fn test_same_region_scores_once() {
    // Both swapped tiles land inside the one 2x2 Tux region: the region
    // qualifies at both ends but scores a single 4, not 8
    let mut board = tux_square_board();
    let score = board.execute_move(Point::new(1, 0), Point::new(1, 1));

    assert_eq!(score, 4);
    for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        assert_eq!(board.grid().tile(x, y).animation, Animation::Delete);
    }
}

#[test]
fn test_evade_clears_on_release() {
    let mut board = tux_square_board();
    board.drag_start(PointF::new(1.5, 1.5));
    board.drag_move(PointF::new(1.5, 2.45));
    assert_eq!(board.grid().tile(1, 2).animation, Animation::EvadeUp);

    // Sub-threshold release: no move, the evading neighbor settles back
    board.drag_release_and_check_move(PointF::new(1.5, 1.55));
    assert_eq!(board.grid().tile(1, 2).animation, Animation::Return);
    assert_eq!(board.grid().tile(1, 1).animation, Animation::Return);
}

#[test]
fn test_deleted_region_is_replenished() {
    let mut board = tux_square_board();
    let score = board.execute_move(Point::new(1, 0), Point::new(1, 1));
    assert_eq!(score, 4);

    // Run the animation through delete and compaction
    for _ in 0..60 {
        board.physics_tick();
    }

    // Full board again, nothing left mid-animation
    for column in board.grid().columns() {
        assert_eq!(column.len(), 4);
        for tile in column {
            assert_eq!(tile.animation, Animation::Stationary);
        }
    }
    // The checkerboard tiles above the cleared square slid down
    assert_eq!(board.grid().tile(0, 0).kind, Hat);
    assert_eq!(board.grid().tile(1, 0).kind, Chameleon);
}

#[test]
fn test_clamped_drag_never_leaves_board() {
    let mut board = tux_square_board();
    board.drag_start(PointF::new(-3.0, 100.0));
    assert!(board.dragging());

    // The clamped anchor is the top-left tile
    board.drag_move(PointF::new(-5.0, 50.0));
    let tile = board.grid().tile(0, 3);
    assert!(tile.offset_x.abs() <= 1.0);
    assert!(tile.offset_y.abs() <= 1.0);

    let score = board.drag_release_and_check_move(PointF::new(-5.0, 50.0));
    assert_eq!(score, 0);
}
