//! Render-ready snapshot of the game state
//!
//! The presentation layer consumes only this read-only view: dimensions,
//! per-tile kind/animation/offset, and the progression counters. Region
//! labels are deliberately absent; they are internal derived data.

use tui_match_types::{Animation, GameMode, PieceKind};

/// One tile as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSnapshot {
    pub kind: PieceKind,
    pub animation: Animation,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Whole-game view, refillable in place via [`crate::Game::snapshot_into`]
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Column-major, `x * height + y`, matching the grid layout
    pub tiles: Vec<TileSnapshot>,
    pub score: u32,
    pub goal: u32,
    pub mode: GameMode,
}

impl GameSnapshot {
    /// Tile at `(x, y)`
    ///
    /// # Panics
    /// Panics when the coordinate is outside the snapshot.
    pub fn tile(&self, x: usize, y: usize) -> &TileSnapshot {
        assert!(
            x < self.width && y < self.height,
            "tile access out of bounds: ({}, {}) on {}x{} snapshot",
            x,
            y,
            self.width,
            self.height
        );
        &self.tiles[x * self.height + y]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            tiles: Vec::new(),
            score: 0,
            goal: 0,
            mode: GameMode::Paused,
        }
    }
}
