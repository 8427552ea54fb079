//! Terminal "game renderer" module.
//!
//! A small game-oriented rendering layer: [`GameView`] is pure (snapshot
//! in, draw list out) and unit-testable without a terminal;
//! [`TerminalRenderer`] owns the terminal lifecycle (raw mode, alternate
//! screen, mouse capture) and flushes a draw list with queued crossterm
//! commands, one flush per frame.

pub mod game_view;
pub mod renderer;

pub use game_view::{DrawCell, GameView, Viewport};
pub use renderer::TerminalRenderer;
