//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` mouse events into board-local pointer events. The core
//! consumes continuous board coordinates (one tile per unit, `(0, 0)` at
//! the bottom-left); this module owns the projection from terminal cells
//! to that space, so the core never sees screen geometry.

pub mod map;

pub use tui_match_types as types;

pub use map::{should_quit, PointerMap};
