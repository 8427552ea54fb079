//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the complete rules and simulation of the
//! tile-matching board: tile storage, connected-region labeling, drag
//! gesture interpretation, the per-tile animation state machine, and the
//! score/goal progression. It has **zero dependencies** on UI or I/O:
//!
//! - **Deterministic**: same seed and gesture sequence produce the same game
//! - **Testable**: every rule is exercised without a terminal
//! - **Single-threaded**: every operation runs to completion; the caller
//!   serializes pointer events and the fixed-rate tick
//!
//! # Module Structure
//!
//! - [`grid`]: the tile field with bounds-checked access and a mutation
//!   epoch for label-staleness detection
//! - [`blobs`]: fixed-point labeling of maximal 4-connected same-kind
//!   regions plus the region-size histogram
//! - [`board`]: the board engine - gestures, move validation/execution,
//!   animation tick and delete-and-replenish
//! - [`game`]: the `Paused -> Playing -> LevelComplete` progression
//! - [`rng`]: seedable LCG for piece randomization
//! - [`snapshot`]: the read-only view handed to the presentation layer
//!
//! # Example
//!
//! ```
//! use tui_match_core::Game;
//! use tui_match_types::{GameMode, LevelConfig, PointF};
//!
//! let mut game = Game::new(LevelConfig::default(), 12345);
//!
//! // Tap to start, then drag a tile one cell to the right
//! game.release(PointF::new(1.0, 1.0));
//! assert_eq!(game.mode(), GameMode::Playing);
//!
//! game.press(PointF::new(1.5, 1.5));
//! game.pointer_move(PointF::new(2.3, 1.5));
//! game.release(PointF::new(2.3, 1.5));
//!
//! // Advance the settle/delete animations
//! game.tick();
//! ```

pub mod blobs;
pub mod board;
pub mod game;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_match_types as types;

// Re-export commonly used types for convenience
pub use blobs::Blobs;
pub use board::GameBoard;
pub use game::Game;
pub use grid::{Tile, TileGrid};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, TileSnapshot};
