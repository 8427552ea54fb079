//! Mouse projection and key mapping from terminal events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tui_match_types::{PointF, PointerEvent};

/// Projection from terminal cells to board-local coordinates.
///
/// The board occupies a rectangle of `cell_w x cell_h` character cells per
/// tile starting at `(origin_col, origin_row)` (top-left of the board).
/// Terminal rows grow downward while board `y` grows upward, so the row
/// axis is flipped during projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerMap {
    pub origin_col: u16,
    pub origin_row: u16,
    /// Board cell width in terminal columns.
    pub cell_w: u16,
    /// Board cell height in terminal rows.
    pub cell_h: u16,
    /// Board height in tiles (needed for the row flip).
    pub board_height: usize,
}

impl PointerMap {
    pub fn new(origin_col: u16, origin_row: u16, board_height: usize) -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            origin_col,
            origin_row,
            cell_w: 2,
            cell_h: 1,
            board_height,
        }
    }

    /// Project a terminal cell to a board-local position.
    ///
    /// Positions left of or above the board project to slightly negative
    /// coordinates which the core clamps on entry; that keeps a drag that
    /// wanders off the board behaving like a drag to its edge.
    pub fn project(&self, col: u16, row: u16) -> PointF {
        let x = (col as f32 - self.origin_col as f32 + 0.5) / self.cell_w as f32;
        let down_y = (row as f32 - self.origin_row as f32 + 0.5) / self.cell_h as f32;
        PointF::new(x, self.board_height as f32 - down_y)
    }

    /// Map a crossterm mouse event to a pointer event, left button only.
    pub fn pointer_event(&self, event: MouseEvent) -> Option<PointerEvent> {
        let pos = self.project(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Press(pos)),
            MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Move(pos)),
            MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Release(pos)),
            _ => None,
        }
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
