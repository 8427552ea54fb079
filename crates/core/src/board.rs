//! Board engine - drag gestures, move rules, animation and replenishment
//!
//! `GameBoard` owns the tile grid, the blob labeler and the active drag
//! session. The presentation layer feeds it clamped-on-entry pointer
//! positions and a fixed-rate tick; it mutates the grid and consults the
//! labeler to decide which swaps are legal and how much they score.
//!
//! Labels are recomputed lazily: structural mutations set a dirty flag and
//! every label-dependent path goes through `ensure_labels` first. The
//! labeler additionally checks the grid's mutation epoch, so a missed
//! recompute fails fast instead of judging moves on a stale partition.

use arrayvec::ArrayVec;
use tui_match_types::{
    Animation, PieceKind, Point, PointF, DELETE_STEP, DELETE_THRESHOLD, DRAG_SLACK, EVADE_STEP,
    EVADE_THRESHOLD, FALL_SPEED, MATCH_MIN, MOVE_COMMIT_THRESHOLD, REST_THRESHOLD, RETURN_DAMPING,
};

use crate::blobs::Blobs;
use crate::grid::{Tile, TileGrid};
use crate::rng::SimpleRng;

/// The board engine
#[derive(Debug, Clone)]
pub struct GameBoard {
    grid: TileGrid,
    blobs: Blobs,
    labels_dirty: bool,
    /// Anchor of the active drag session, clamped into the board
    drag: Option<PointF>,
    rng: SimpleRng,
}

impl GameBoard {
    /// Create a board with freshly randomized tiles
    pub fn new(width: usize, height: usize, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let grid = TileGrid::randomized(width, height, &mut rng);
        Self::from_grid(grid, rng)
    }

    /// Create a board over an existing grid (used by tests and embedders
    /// that need a known layout)
    pub fn with_grid(grid: TileGrid, seed: u32) -> Self {
        Self::from_grid(grid, SimpleRng::new(seed))
    }

    fn from_grid(grid: TileGrid, rng: SimpleRng) -> Self {
        Self {
            grid,
            blobs: Blobs::new(),
            labels_dirty: true,
            drag: None,
            rng,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// True while a press has not yet been released
    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current RNG state, usable to seed a successor board without
    /// replaying this board's draw sequence
    pub fn rng_state(&self) -> u32 {
        self.rng.seed()
    }

    /// Send every tile falling (the level-complete clear animation)
    pub fn set_all_falling(&mut self) {
        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                self.grid.tile_mut(x, y).animation = Animation::Fall;
            }
        }
    }

    /// Begin a drag session at the given pointer position
    ///
    /// Starting a new press silently discards any previous session. The
    /// anchor tile is pinned `Stationary` so a pending `Return` does not
    /// fight the drag offsets.
    pub fn drag_start(&mut self, pos: PointF) {
        let anchor = self.clamp_to_board(pos);
        let cell = anchor.cell();
        self.grid.tile_mut(cell.x, cell.y).animation = Animation::Stationary;
        self.drag = Some(anchor);
    }

    /// Update the active drag with a new pointer position
    ///
    /// Applies the rubber-band offset to the anchor tile and triggers or
    /// cancels neighbor evasion. Ignored without an active session.
    pub fn drag_move(&mut self, pos: PointF) {
        let Some(anchor) = self.drag else {
            return;
        };
        let pos = self.clamp_to_board(pos);

        // Normalize so the combined displacement never exceeds one tile
        let raw_dx = pos.x - anchor.x;
        let raw_dy = pos.y - anchor.y;
        let factor = (raw_dx.abs() + raw_dy.abs() - DRAG_SLACK).max(1.0);
        let dx = (raw_dx / factor).clamp(-1.0, 1.0);
        let dy = (raw_dy / factor).clamp(-1.0, 1.0);

        let cell = anchor.cell();
        let tile = self.grid.tile_mut(cell.x, cell.y);
        tile.offset_x = dx;
        tile.offset_y = dy;

        if dx.abs() > EVADE_THRESHOLD || dy.abs() > EVADE_THRESHOLD {
            self.evade(cell);
        } else {
            self.evade_cancel(cell);
        }
    }

    /// Finish the drag: resolve the destination, validate and execute
    ///
    /// Returns the score delta of the executed move, 0 for a no-op or an
    /// invalid move (the anchor tile then animates back to rest).
    pub fn drag_release_and_check_move(&mut self, pos: PointF) -> u32 {
        let Some(anchor) = self.drag.take() else {
            return 0;
        };
        let origin = anchor.cell();
        self.evade_cancel(origin);

        let pos = self.clamp_to_board(pos);
        let dx = pos.x - anchor.x;
        let dy = pos.y - anchor.y;

        // Destination is one step along the dominant axis, if the pointer
        // travelled far enough to commit
        let mut dest_x = origin.x as isize;
        let mut dest_y = origin.y as isize;
        if dx.abs() > dy.abs() {
            if dx > MOVE_COMMIT_THRESHOLD {
                dest_x += 1;
            } else if dx < -MOVE_COMMIT_THRESHOLD {
                dest_x -= 1;
            }
        } else if dy > MOVE_COMMIT_THRESHOLD {
            dest_y += 1;
        } else if dy < -MOVE_COMMIT_THRESHOLD {
            dest_y -= 1;
        }

        // A committed step at the border can point one past the grid; such
        // a drag is a no-op rather than an out-of-bounds access
        let destination = if dest_x >= 0
            && (dest_x as usize) < self.grid.width()
            && dest_y >= 0
            && (dest_y as usize) < self.grid.height()
        {
            Point::new(dest_x as usize, dest_y as usize)
        } else {
            origin
        };

        if destination != origin && self.check_move(origin, destination) {
            self.execute_move(origin, destination)
        } else {
            self.grid.tile_mut(origin.x, origin.y).animation = Animation::Return;
            0
        }
    }

    /// Hypothetical-swap validity check
    ///
    /// Each end is evaluated with the opposite end's current kind, without
    /// touching the grid: the region that would form there is the tile
    /// itself plus its distinct same-kind neighbor regions. The move is
    /// valid when either end reaches the match threshold.
    pub fn check_move(&mut self, source: Point, destination: Point) -> bool {
        self.ensure_labels();

        let source_kind = self.grid.tile(source.x, source.y).kind;
        let destination_kind = self.grid.tile(destination.x, destination.y).kind;

        let source_total = 1 + self.joined_region_size(source, destination_kind);
        let destination_total = 1 + self.joined_region_size(destination, source_kind);

        source_total >= MATCH_MIN || destination_total >= MATCH_MIN
    }

    /// Sum of distinct neighbor-region sizes of `pos` holding `kind`
    fn joined_region_size(&self, pos: Point, kind: PieceKind) -> u32 {
        self.blobs
            .neighbor_labels_as(&self.grid, pos.x, pos.y, kind)
            .into_iter()
            .map(|label| self.blobs.size(label))
            .sum()
    }

    /// Swap the two tiles and resolve the resulting matches
    ///
    /// Unlike the validity check this works on the really-swapped grid:
    /// labels are recomputed and each end's actual region is measured. Both
    /// ends are evaluated independently; when they land in the same region
    /// it qualifies (and scores) once.
    pub fn execute_move(&mut self, source: Point, destination: Point) -> u32 {
        self.swap_tiles(source, destination);
        self.labels_dirty = true;
        self.ensure_labels();

        let mut qualifying: ArrayVec<u32, 2> = ArrayVec::new();
        let mut score = 0;
        for pos in [source, destination] {
            let label = self.grid.tile(pos.x, pos.y).label;
            let size = self.blobs.size(label);
            if size >= MATCH_MIN && !qualifying.contains(&label) {
                qualifying.push(label);
                score += size;
            }
        }

        for label in qualifying {
            self.mark_region_deleted(label);
        }
        score
    }

    /// Physically swap two tiles, nudging their pending visual offsets by
    /// the coordinate delta so the swap animates into place
    fn swap_tiles(&mut self, source: Point, destination: Point) {
        let dx = source.x as f32 - destination.x as f32;
        let dy = source.y as f32 - destination.y as f32;

        let tile = self.grid.tile_mut(source.x, source.y);
        tile.offset_x += dx;
        tile.offset_y += dy;
        tile.animation = Animation::Return;

        let tile = self.grid.tile_mut(destination.x, destination.y);
        tile.offset_x -= dx;
        tile.offset_y -= dy;
        tile.animation = Animation::Return;

        self.grid.swap(source.x, source.y, destination.x, destination.y);
    }

    fn mark_region_deleted(&mut self, label: u32) {
        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                if self.grid.tile(x, y).label == label {
                    self.grid.tile_mut(x, y).animation = Animation::Delete;
                }
            }
        }
    }

    /// Slide the neighbor opposite the dominant drag axis out of the way
    ///
    /// The evading tile is the one the drag displaced *from*: dragging
    /// right pushes the right-hand neighbor into an `EvadeLeft` slide. All
    /// other orthogonal neighbors settle back first. The half-tile clamp
    /// margin on the anchor keeps the evading neighbor inside the grid.
    fn evade(&mut self, origin: Point) {
        let tile = self.grid.tile(origin.x, origin.y);
        let (evading, animation) = if tile.offset_x.abs() > tile.offset_y.abs() {
            if tile.offset_x > 0.0 {
                (Point::new(origin.x + 1, origin.y), Animation::EvadeLeft)
            } else {
                (Point::new(origin.x - 1, origin.y), Animation::EvadeRight)
            }
        } else if tile.offset_y > 0.0 {
            (Point::new(origin.x, origin.y + 1), Animation::EvadeUp)
        } else {
            (Point::new(origin.x, origin.y - 1), Animation::EvadeDown)
        };

        self.evade_cancel(origin);
        self.grid.tile_mut(evading.x, evading.y).animation = animation;
    }

    /// Settle all four orthogonal neighbors of `pos` back to rest
    fn evade_cancel(&mut self, pos: Point) {
        if pos.x > 0 {
            self.grid.tile_mut(pos.x - 1, pos.y).animation = Animation::Return;
        }
        if pos.x + 1 < self.grid.width() {
            self.grid.tile_mut(pos.x + 1, pos.y).animation = Animation::Return;
        }
        if pos.y > 0 {
            self.grid.tile_mut(pos.x, pos.y - 1).animation = Animation::Return;
        }
        if pos.y + 1 < self.grid.height() {
            self.grid.tile_mut(pos.x, pos.y + 1).animation = Animation::Return;
        }
    }

    /// Clamp a pointer position into the open rectangle half a tile inside
    /// the board, keeping the anchor inside a cell
    fn clamp_to_board(&self, pos: PointF) -> PointF {
        PointF::new(
            pos.x.clamp(0.5, self.grid.width() as f32 - 0.5),
            pos.y.clamp(0.5, self.grid.height() as f32 - 0.5),
        )
    }

    /// Advance every tile by one fixed timestep
    ///
    /// Runs delete-and-replenish once, after the per-tile loop, if any tile
    /// is in `DeleteDone` this tick.
    pub fn physics_tick(&mut self) {
        let mut deletes_done = false;

        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                let tile = self.grid.tile_mut(x, y);
                match tile.animation {
                    Animation::Stationary => {}
                    Animation::Return => {
                        tile.offset_x *= RETURN_DAMPING;
                        tile.offset_y *= RETURN_DAMPING;
                        if tile.offset_x.abs() < REST_THRESHOLD
                            && tile.offset_y.abs() < REST_THRESHOLD
                        {
                            tile.offset_x = 0.0;
                            tile.offset_y = 0.0;
                            tile.animation = Animation::Stationary;
                        }
                    }
                    Animation::Fall => {
                        // No terminal condition here: cleared externally
                        tile.offset_y -= FALL_SPEED;
                    }
                    Animation::Delete => {
                        tile.offset_x += DELETE_STEP;
                        if tile.offset_x > DELETE_THRESHOLD {
                            tile.animation = Animation::DeleteDone;
                            deletes_done = true;
                        }
                    }
                    Animation::DeleteDone => {
                        tile.offset_x += DELETE_STEP;
                        deletes_done = true;
                    }
                    Animation::EvadeUp => {
                        tile.offset_y = (tile.offset_y - EVADE_STEP).max(-1.0);
                    }
                    Animation::EvadeDown => {
                        tile.offset_y = (tile.offset_y + EVADE_STEP).min(1.0);
                    }
                    Animation::EvadeLeft => {
                        tile.offset_x = (tile.offset_x - EVADE_STEP).max(-1.0);
                    }
                    Animation::EvadeRight => {
                        tile.offset_x = (tile.offset_x + EVADE_STEP).min(1.0);
                    }
                }
            }
        }

        if deletes_done {
            self.delete_and_replenish();
        }
    }

    /// Remove fully-deleted tiles column by column and refill from the top
    ///
    /// Stable in-place compaction: survivors keep their relative order,
    /// and every surviving tile not still mid-`Delete` picks up a vertical
    /// offset equal to the cells removed below it so far, then settles via
    /// `Return`. Tiles still mid-`Delete` stay in place untouched; their
    /// own animation will reach `DeleteDone` on a later tick and trigger a
    /// further compaction. Replacement tiles enter the same way the
    /// survivors move: offset up by the column's removal count, falling
    /// into place via `Return`.
    fn delete_and_replenish(&mut self) {
        for x in 0..self.grid.width() {
            let rng = &mut self.rng;
            let column = self.grid.column_mut(x);

            let mut removed = 0usize;
            let mut write = 0usize;
            for read in 0..column.len() {
                let mut tile = column[read];
                if tile.animation == Animation::DeleteDone {
                    removed += 1;
                    continue;
                }
                if tile.animation != Animation::Delete {
                    tile.offset_y += removed as f32;
                    tile.animation = Animation::Return;
                }
                column[write] = tile;
                write += 1;
            }
            for slot in column.iter_mut().skip(write) {
                let mut tile = Tile::new(rng.piece());
                tile.offset_y = removed as f32;
                tile.animation = Animation::Return;
                *slot = tile;
            }
        }
        self.labels_dirty = true;
    }

    fn ensure_labels(&mut self) {
        if self.labels_dirty {
            self.blobs.relabel(&mut self.grid);
            self.labels_dirty = false;
        }
    }
}
