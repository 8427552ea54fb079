//! Grid module - tile storage with bounds-checked access
//!
//! The grid is a `width x height` field of tiles stored in a flat vector,
//! column-major (`x * height + y`) so a column is one contiguous slice and
//! the replenishment compaction can work in place. `y = 0` is the bottom
//! row; replacement tiles enter at the top of a column.
//!
//! Every coordinate always holds exactly one tile; "deleting" a tile is a
//! replacement, never removal of a cell.

use tui_match_types::{Animation, PieceKind};

use crate::rng::SimpleRng;

/// One board tile
///
/// `offset_x`/`offset_y` are rendering-only displacements in tile units.
/// `label` is the transient region label, valid only between a labeling run
/// and the next structural mutation of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub kind: PieceKind,
    pub animation: Animation,
    pub offset_x: f32,
    pub offset_y: f32,
    pub label: u32,
}

impl Tile {
    /// A freshly spawned stationary tile of the given kind
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            animation: Animation::Stationary,
            offset_x: 0.0,
            offset_y: 0.0,
            label: 0,
        }
    }
}

/// The tile field
///
/// Structural mutations (anything that can change which kind sits where)
/// bump a monotonic epoch; the blob labeler records the epoch it ran
/// against so stale label queries fail fast instead of silently answering
/// from an outdated partition.
#[derive(Debug, Clone)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
    epoch: u64,
}

impl TileGrid {
    /// Create a grid filled with randomized stationary tiles
    pub fn randomized(width: usize, height: usize, rng: &mut SimpleRng) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        let tiles = (0..width * height).map(|_| Tile::new(rng.piece())).collect();
        Self {
            tiles,
            width,
            height,
            epoch: 0,
        }
    }

    /// Create a grid from explicit per-column kinds (column-major, `y = 0`
    /// at the bottom of each column)
    ///
    /// # Panics
    /// Panics if the columns are empty or ragged.
    pub fn from_kinds(columns: &[Vec<PieceKind>]) -> Self {
        let width = columns.len();
        assert!(width > 0, "grid dimensions must be non-zero");
        let height = columns[0].len();
        assert!(height > 0, "grid dimensions must be non-zero");
        assert!(
            columns.iter().all(|c| c.len() == height),
            "all columns must have equal height"
        );

        let mut tiles = Vec::with_capacity(width * height);
        for column in columns {
            tiles.extend(column.iter().map(|&kind| Tile::new(kind)));
        }
        Self {
            tiles,
            width,
            height,
            epoch: 0,
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "tile access out of bounds: ({}, {}) on {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        x * self.height + y
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Mutation epoch; bumped by every structural mutation
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Tile at `(x, y)`
    ///
    /// # Panics
    /// Panics when the coordinate is outside the grid. Callers clamp
    /// pointer positions before indexing, so this is unreachable in normal
    /// operation and deliberately loud when it is not.
    pub fn tile(&self, x: usize, y: usize) -> &Tile {
        &self.tiles[self.index(x, y)]
    }

    /// Mutable tile access for animation state and offsets
    ///
    /// Does not bump the epoch: region labels depend only on piece kinds,
    /// and kind changes must go through [`TileGrid::set`], [`TileGrid::swap`]
    /// or [`TileGrid::column_mut`].
    ///
    /// # Panics
    /// Panics when the coordinate is outside the grid.
    pub fn tile_mut(&mut self, x: usize, y: usize) -> &mut Tile {
        let idx = self.index(x, y);
        &mut self.tiles[idx]
    }

    /// Replace the tile at `(x, y)`
    ///
    /// # Panics
    /// Panics when the coordinate is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        let idx = self.index(x, y);
        self.tiles[idx] = tile;
        self.epoch += 1;
    }

    /// Swap the tiles at two coordinates
    ///
    /// # Panics
    /// Panics when either coordinate is outside the grid.
    pub fn swap(&mut self, ax: usize, ay: usize, bx: usize, by: usize) {
        let a = self.index(ax, ay);
        let b = self.index(bx, by);
        self.tiles.swap(a, b);
        self.epoch += 1;
    }

    /// Iterate columns bottom-to-top as contiguous slices
    pub fn columns(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks_exact(self.height)
    }

    /// Mutable access to one column for in-place compaction
    ///
    /// Bumps the epoch: compaction rearranges piece kinds.
    ///
    /// # Panics
    /// Panics when `x` is outside the grid.
    pub fn column_mut(&mut self, x: usize) -> &mut [Tile] {
        assert!(
            x < self.width,
            "column access out of bounds: {} on {}x{} grid",
            x,
            self.width,
            self.height
        );
        self.epoch += 1;
        &mut self.tiles[x * self.height..(x + 1) * self.height]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> TileGrid {
        TileGrid::from_kinds(&[
            vec![PieceKind::Tux, PieceKind::Hat],
            vec![PieceKind::Chameleon, PieceKind::Wildebeest],
            vec![PieceKind::Hat, PieceKind::Tux],
        ])
    }

    #[test]
    fn test_from_kinds_layout() {
        let grid = small_grid();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.tile(0, 0).kind, PieceKind::Tux);
        assert_eq!(grid.tile(0, 1).kind, PieceKind::Hat);
        assert_eq!(grid.tile(2, 1).kind, PieceKind::Tux);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_tile_out_of_bounds_panics() {
        let grid = small_grid();
        grid.tile(3, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_tile_mut_out_of_bounds_panics() {
        let mut grid = small_grid();
        grid.tile_mut(0, 2);
    }

    #[test]
    fn test_structural_mutations_bump_epoch() {
        let mut grid = small_grid();
        let e0 = grid.epoch();

        grid.set(0, 0, Tile::new(PieceKind::Wildebeest));
        assert!(grid.epoch() > e0);

        let e1 = grid.epoch();
        grid.swap(0, 0, 1, 1);
        assert!(grid.epoch() > e1);

        let e2 = grid.epoch();
        grid.column_mut(0);
        assert!(grid.epoch() > e2);
    }

    #[test]
    fn test_animation_mutation_keeps_epoch() {
        let mut grid = small_grid();
        let e0 = grid.epoch();
        grid.tile_mut(1, 1).animation = Animation::Return;
        grid.tile_mut(1, 1).offset_x = 0.5;
        assert_eq!(grid.epoch(), e0);
    }

    #[test]
    fn test_columns_are_contiguous() {
        let grid = small_grid();
        let cols: Vec<&[Tile]> = grid.columns().collect();
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[1][0].kind, PieceKind::Chameleon);
        assert_eq!(cols[1][1].kind, PieceKind::Wildebeest);
    }

    #[test]
    fn test_randomized_grid_is_stationary() {
        let mut rng = SimpleRng::new(42);
        let grid = TileGrid::randomized(5, 4, &mut rng);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        for column in grid.columns() {
            for tile in column {
                assert_eq!(tile.animation, Animation::Stationary);
                assert_eq!((tile.offset_x, tile.offset_y), (0.0, 0.0));
            }
        }
    }
}
