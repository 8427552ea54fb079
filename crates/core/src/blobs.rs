//! Blob labeler - connected-region partitioning
//!
//! Partitions the grid into maximal 4-connected same-kind regions and keeps
//! a histogram of region sizes. This is a naive fixed-point relaxation that
//! walks the grid a bounded number of times; it only runs when a move is
//! attempted on a grid that changed since the last run, so the repeated
//! passes are not a performance concern.
//!
//! Labels are stable only between a [`Blobs::relabel`] call and the next
//! structural grid mutation. Every query checks that invariant against the
//! grid's mutation epoch and fails fast on a stale partition.

use arrayvec::ArrayVec;
use tui_match_types::PieceKind;

use crate::grid::TileGrid;

/// Distinct region labels adjacent to a cell (at most four)
pub type NeighborLabels = ArrayVec<u32, 4>;

/// Region partition of a grid at one mutation epoch
#[derive(Debug, Clone, Default)]
pub struct Blobs {
    /// Region size per label, rebuilt in full by every labeling run
    sizes: Vec<u32>,
    /// Grid epoch the current labels were computed against
    epoch: Option<u64>,
}

impl Blobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute region labels and the size histogram for `grid`
    ///
    /// Phase one scans in x-outer/y-inner order and looks only at already
    /// visited neighbors (one step -x and -y): a cell adopts the smallest
    /// same-kind past-neighbor label, or mints a fresh one. Phase two
    /// relaxes until a fixed point: a cell adopts any strictly smaller
    /// same-kind 4-neighbor label, with the histogram rebuilt from zero on
    /// every pass since labels are still shifting. The smallest-label-wins
    /// tie break makes the final partition deterministic for a given grid.
    pub fn relabel(&mut self, grid: &mut TileGrid) {
        let width = grid.width();
        let height = grid.height();

        // Seeding pass
        let mut next_label: u32 = 0;
        for x in 0..width {
            for y in 0..height {
                let kind = grid.tile(x, y).kind;
                let seed = past_neighbor_labels(grid, x, y, kind)
                    .into_iter()
                    .min()
                    .unwrap_or_else(|| {
                        let fresh = next_label;
                        next_label += 1;
                        fresh
                    });
                grid.tile_mut(x, y).label = seed;
            }
        }

        // Relaxation passes
        loop {
            let mut changed = false;
            self.sizes.clear();
            self.sizes.resize(next_label as usize, 0);

            for x in 0..width {
                for y in 0..height {
                    let kind = grid.tile(x, y).kind;
                    let label = grid.tile(x, y).label;
                    let lowest = neighbor_labels_raw(grid, x, y, kind)
                        .into_iter()
                        .min()
                        .unwrap_or(label);
                    let label = if lowest < label {
                        grid.tile_mut(x, y).label = lowest;
                        changed = true;
                        lowest
                    } else {
                        label
                    };
                    self.sizes[label as usize] += 1;
                }
            }

            if !changed {
                break;
            }
        }

        self.epoch = Some(grid.epoch());
    }

    fn assert_fresh(&self, grid: &TileGrid) {
        assert_eq!(
            self.epoch,
            Some(grid.epoch()),
            "stale region labels: grid mutated since the last labeling run"
        );
    }

    /// Distinct labels of same-kind 4-neighbors of `(x, y)`, using the
    /// tile's own kind
    ///
    /// # Panics
    /// Panics when the labels are stale or the coordinate is out of bounds.
    pub fn neighbor_labels(&self, grid: &TileGrid, x: usize, y: usize) -> NeighborLabels {
        self.neighbor_labels_as(grid, x, y, grid.tile(x, y).kind)
    }

    /// Distinct labels of 4-neighbors of `(x, y)` holding the given kind
    ///
    /// # Panics
    /// Panics when the labels are stale or the coordinate is out of bounds.
    pub fn neighbor_labels_as(
        &self,
        grid: &TileGrid,
        x: usize,
        y: usize,
        kind: PieceKind,
    ) -> NeighborLabels {
        self.assert_fresh(grid);
        neighbor_labels_raw(grid, x, y, kind)
    }

    /// Size of the region containing `(x, y)`
    ///
    /// # Panics
    /// Panics when the labels are stale or the coordinate is out of bounds.
    pub fn region_size(&self, grid: &TileGrid, x: usize, y: usize) -> u32 {
        self.assert_fresh(grid);
        self.size(grid.tile(x, y).label)
    }

    /// Histogram lookup for one label
    ///
    /// # Panics
    /// Panics on a label the last labeling run never assigned.
    pub fn size(&self, label: u32) -> u32 {
        match self.sizes.get(label as usize) {
            Some(&count) => count,
            None => panic!("unknown region label {label}"),
        }
    }

    /// Number of labels minted by the last run (some may have zero count
    /// after relaxation merges regions)
    pub fn label_count(&self) -> usize {
        self.sizes.len()
    }
}

/// Distinct same-kind labels over all in-bounds 4-neighbors
///
/// No freshness check: also used inside the relaxation loop where labels
/// are still in flux.
fn neighbor_labels_raw(grid: &TileGrid, x: usize, y: usize, kind: PieceKind) -> NeighborLabels {
    let mut labels = NeighborLabels::new();
    let mut visit = |nx: usize, ny: usize| {
        let tile = grid.tile(nx, ny);
        if tile.kind == kind && !labels.contains(&tile.label) {
            labels.push(tile.label);
        }
    };

    if x > 0 {
        visit(x - 1, y);
    }
    if y > 0 {
        visit(x, y - 1);
    }
    if x + 1 < grid.width() {
        visit(x + 1, y);
    }
    if y + 1 < grid.height() {
        visit(x, y + 1);
    }
    labels
}

/// Same-kind labels of the already-visited neighbors (one step -x and -y)
fn past_neighbor_labels(grid: &TileGrid, x: usize, y: usize, kind: PieceKind) -> NeighborLabels {
    let mut labels = NeighborLabels::new();
    if x > 0 {
        let tile = grid.tile(x - 1, y);
        if tile.kind == kind {
            labels.push(tile.label);
        }
    }
    if y > 0 {
        let tile = grid.tile(x, y - 1);
        if tile.kind == kind && !labels.contains(&tile.label) {
            labels.push(tile.label);
        }
    }
    labels
}
