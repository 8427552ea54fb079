//! GameView: maps a `GameSnapshot` into a terminal draw list.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;
use tui_match_core::GameSnapshot;
use tui_match_types::{Animation, GameMode, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// One positioned string to print.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCell {
    pub col: u16,
    pub row: u16,
    pub text: String,
    pub fg: Color,
}

/// Maps game snapshots into draw lists.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Top-left corner of the board inside the viewport (also the origin
    /// the input projection needs).
    pub fn board_origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let board_w = snap.width as u16 * self.cell_w;
        let board_h = snap.height as u16 * self.cell_h;
        let col = viewport.width.saturating_sub(board_w) / 2;
        // One row reserved above the board for the status line.
        let row = (viewport.height.saturating_sub(board_h) / 2).max(1);
        (col, row)
    }

    /// Render the snapshot into a draw list.
    ///
    /// Tiles are placed at their cell position displaced by their animation
    /// offset; a tile drifting outside the viewport is skipped rather than
    /// wrapped. Tiles are emitted bottom-to-top so that a tile sliding over
    /// a lower neighbor wins the overlap.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> Vec<DrawCell> {
        let mut cells = Vec::with_capacity(snap.tiles.len() + 1);
        cells.push(self.status_line(snap));

        let (origin_col, origin_row) = self.board_origin(snap, viewport);
        for y in 0..snap.height {
            for x in 0..snap.width {
                let tile = snap.tile(x, y);
                let world_x = x as f32 + tile.offset_x;
                let world_y = y as f32 + tile.offset_y;

                let col = origin_col as f32 + world_x * self.cell_w as f32;
                let row = origin_row as f32
                    + (snap.height as f32 - 1.0 - world_y) * self.cell_h as f32;
                if col < 0.0
                    || row < 0.0
                    || col + self.cell_w as f32 > viewport.width as f32
                    || row >= viewport.height as f32
                {
                    continue;
                }

                cells.push(DrawCell {
                    col: col as u16,
                    row: row as u16,
                    text: glyph_for(tile.animation).to_string(),
                    fg: color_for(tile.kind),
                });
            }
        }
        cells
    }

    fn status_line(&self, snap: &GameSnapshot) -> DrawCell {
        let text = match snap.mode {
            GameMode::Paused => "tap to start".to_string(),
            GameMode::Playing => format!("score {} / {}", snap.score, snap.goal),
            GameMode::LevelComplete => {
                format!("level complete! tap for the next board ({} pts)", snap.score)
            }
        };
        DrawCell {
            col: 0,
            row: 0,
            text,
            fg: Color::White,
        }
    }
}

fn color_for(kind: PieceKind) -> Color {
    match kind {
        PieceKind::Tux => Color::Cyan,
        PieceKind::Hat => Color::Red,
        PieceKind::Chameleon => Color::Green,
        PieceKind::Wildebeest => Color::Yellow,
    }
}

fn glyph_for(animation: Animation) -> &'static str {
    match animation {
        // Deleting tiles dim out as they slide away
        Animation::Delete | Animation::DeleteDone => "░░",
        _ => "██",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_match_core::TileSnapshot;

    fn snapshot(width: usize, height: usize) -> GameSnapshot {
        GameSnapshot {
            width,
            height,
            tiles: vec![
                TileSnapshot {
                    kind: PieceKind::Tux,
                    animation: Animation::Stationary,
                    offset_x: 0.0,
                    offset_y: 0.0,
                };
                width * height
            ],
            score: 5,
            goal: 40,
            mode: GameMode::Playing,
        }
    }

    #[test]
    fn test_render_emits_status_and_all_tiles() {
        let view = GameView::default();
        let cells = view.render(&snapshot(3, 3), Viewport::new(80, 24));
        // status line + 9 tiles
        assert_eq!(cells.len(), 10);
        assert!(cells[0].text.contains("5 / 40"));
    }

    #[test]
    fn test_tiles_outside_viewport_are_skipped() {
        let view = GameView::default();
        let mut snap = snapshot(3, 3);
        // Slide one tile far off to the right
        snap.tiles[0].offset_x = 100.0;
        let cells = view.render(&snap, Viewport::new(20, 20));
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn test_board_is_centered() {
        let view = GameView::default();
        let snap = snapshot(4, 4);
        let (col, row) = view.board_origin(&snap, Viewport::new(80, 24));
        assert_eq!(col, (80 - 8) / 2);
        assert_eq!(row, (24 - 4) / 2);
    }

    #[test]
    fn test_row_axis_is_flipped() {
        let view = GameView::default();
        let snap = snapshot(2, 2);
        let viewport = Viewport::new(40, 20);
        let (_, origin_row) = view.board_origin(&snap, viewport);
        let cells = view.render(&snap, viewport);
        // First emitted tile is (0, 0): the bottom row sits below the top row
        let bottom = &cells[1];
        assert_eq!(bottom.row, origin_row + 1);
    }

    #[test]
    fn test_paused_status_text() {
        let view = GameView::default();
        let mut snap = snapshot(2, 2);
        snap.mode = GameMode::Paused;
        let cells = view.render(&snap, Viewport::new(40, 20));
        assert_eq!(cells[0].text, "tap to start");
    }
}
