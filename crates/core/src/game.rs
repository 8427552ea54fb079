//! Game module - top-level progression state machine
//!
//! Wraps the board engine with the score/goal counters and the
//! `Paused -> Playing -> LevelComplete -> Playing` cycle. All transitions
//! happen at pointer-release boundaries; the board only sees gestures
//! while the game is in `Playing`.

use tui_match_types::{
    GameMode, LevelConfig, PointF, GOAL_GROWTH_DENOMINATOR, GOAL_GROWTH_NUMERATOR, LEVEL_GROWTH,
};

use crate::board::GameBoard;
use crate::snapshot::{GameSnapshot, TileSnapshot};

/// Complete game: board plus progression state
#[derive(Debug, Clone)]
pub struct Game {
    board: GameBoard,
    score: u32,
    goal: u32,
    mode: GameMode,
}

impl Game {
    /// Create a game in `Paused` ("tap to start") with a randomized board
    pub fn new(config: LevelConfig, seed: u32) -> Self {
        Self::with_board(GameBoard::new(config.width, config.height, seed), config.goal)
    }

    /// Create a game over an existing board (tests and embedders with a
    /// known layout)
    pub fn with_board(board: GameBoard, goal: u32) -> Self {
        Self {
            board,
            score: 0,
            goal,
            mode: GameMode::Paused,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Pointer press in board-local coordinates
    pub fn press(&mut self, pos: PointF) {
        if self.mode == GameMode::Playing {
            self.board.drag_start(pos);
        }
    }

    /// Pointer motion in board-local coordinates
    pub fn pointer_move(&mut self, pos: PointF) {
        if self.mode == GameMode::Playing {
            self.board.drag_move(pos);
        }
    }

    /// Pointer release; drives every mode transition
    pub fn release(&mut self, pos: PointF) {
        match self.mode {
            GameMode::Paused => {
                // Tap to start
                self.mode = GameMode::Playing;
            }
            GameMode::Playing => {
                self.score += self.board.drag_release_and_check_move(pos);
                if self.score >= self.goal {
                    self.board.set_all_falling();
                    self.mode = GameMode::LevelComplete;
                }
            }
            GameMode::LevelComplete => {
                self.next_level();
            }
        }
    }

    /// Advance animations by one fixed timestep
    pub fn tick(&mut self) {
        self.board.physics_tick();
    }

    /// Grow the goal and the board, reset the score and resume play
    fn next_level(&mut self) {
        self.goal = self.goal * GOAL_GROWTH_NUMERATOR / GOAL_GROWTH_DENOMINATOR;
        let width = self.board.width() + LEVEL_GROWTH;
        let height = self.board.height() + LEVEL_GROWTH;
        self.board = GameBoard::new(width, height, self.board.rng_state());
        self.score = 0;
        self.mode = GameMode::Playing;
    }

    /// Fill `out` with a render-ready view of the whole game, reusing its
    /// allocations
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let grid = self.board.grid();
        out.width = grid.width();
        out.height = grid.height();
        out.tiles.clear();
        out.tiles.reserve(grid.width() * grid.height());
        for column in grid.columns() {
            for tile in column {
                out.tiles.push(TileSnapshot {
                    kind: tile.kind,
                    animation: tile.animation,
                    offset_x: tile.offset_x,
                    offset_y: tile.offset_y,
                });
            }
        }
        out.score = self.score;
        out.goal = self.goal;
        out.mode = self.mode;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
