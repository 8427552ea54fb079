//! Blob labeler tests - checked against a brute-force flood fill

use tui_match::core::{Blobs, SimpleRng, TileGrid};
use tui_match::types::PieceKind::{Chameleon, Hat, Tux};

/// Reference region size: plain flood fill over same-kind 4-neighbors.
fn flood_size(grid: &TileGrid, start_x: usize, start_y: usize) -> u32 {
    let kind = grid.tile(start_x, start_y).kind;
    let mut seen = vec![false; grid.width() * grid.height()];
    let mut stack = vec![(start_x, start_y)];
    let mut size = 0;

    while let Some((x, y)) = stack.pop() {
        let idx = x * grid.height() + y;
        if seen[idx] || grid.tile(x, y).kind != kind {
            continue;
        }
        seen[idx] = true;
        size += 1;

        if x > 0 {
            stack.push((x - 1, y));
        }
        if x + 1 < grid.width() {
            stack.push((x + 1, y));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
        if y + 1 < grid.height() {
            stack.push((x, y + 1));
        }
    }
    size
}

#[test]
fn test_labeler_matches_flood_fill_on_random_boards() {
    for seed in [1, 7, 42, 1000, 123456] {
        let mut rng = SimpleRng::new(seed);
        let mut grid = TileGrid::randomized(9, 9, &mut rng);
        let mut blobs = Blobs::new();
        blobs.relabel(&mut grid);

        for x in 0..grid.width() {
            for y in 0..grid.height() {
                assert_eq!(
                    blobs.region_size(&grid, x, y),
                    flood_size(&grid, x, y),
                    "region size mismatch at ({}, {}) with seed {}",
                    x,
                    y,
                    seed
                );
            }
        }
    }
}

#[test]
fn test_same_region_same_label() {
    let mut grid = TileGrid::from_kinds(&[
        vec![Tux, Tux, Hat],
        vec![Hat, Tux, Tux],
        vec![Tux, Hat, Tux],
    ]);
    let mut blobs = Blobs::new();
    blobs.relabel(&mut grid);

    // The S-shaped Tux chain is one region of five
    let label = grid.tile(0, 0).label;
    for (x, y) in [(0, 1), (1, 1), (1, 2), (2, 2)] {
        assert_eq!(grid.tile(x, y).label, label);
    }
    assert_eq!(blobs.size(label), 5);

    // The isolated Tux at (2,0) is its own region
    assert_ne!(grid.tile(2, 0).label, label);
    assert_eq!(blobs.region_size(&grid, 2, 0), 1);
}

#[test]
fn test_histogram_covers_every_tile() {
    let mut rng = SimpleRng::new(99);
    let mut grid = TileGrid::randomized(6, 6, &mut rng);
    let mut blobs = Blobs::new();
    blobs.relabel(&mut grid);

    let total: u32 = (0..blobs.label_count())
        .map(|label| blobs.size(label as u32))
        .sum();
    assert_eq!(total, 36);
}

#[test]
fn test_relabel_is_deterministic() {
    let mut a = TileGrid::from_kinds(&[
        vec![Tux, Chameleon, Hat],
        vec![Chameleon, Tux, Hat],
        vec![Hat, Hat, Tux],
    ]);
    let mut b = a.clone();

    let mut blobs_a = Blobs::new();
    let mut blobs_b = Blobs::new();
    blobs_a.relabel(&mut a);
    blobs_b.relabel(&mut b);

    for x in 0..3 {
        for y in 0..3 {
            assert_eq!(a.tile(x, y).label, b.tile(x, y).label);
        }
    }
}
