//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default level dimensions and score target
pub const DEFAULT_BOARD_WIDTH: usize = 9;
pub const DEFAULT_BOARD_HEIGHT: usize = 9;
pub const DEFAULT_GOAL: u32 = 40;

/// Board growth per completed level (added to each dimension)
pub const LEVEL_GROWTH: usize = 3;

/// Fixed animation timestep (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gesture tuning
///
/// A drag offset past `EVADE_THRESHOLD` makes the threatened neighbor slide
/// aside; a release offset past `MOVE_COMMIT_THRESHOLD` commits a one-tile
/// move. `DRAG_SLACK` softens the rubber-band normalization.
pub const EVADE_THRESHOLD: f32 = 0.9;
pub const MOVE_COMMIT_THRESHOLD: f32 = 0.1;
pub const DRAG_SLACK: f32 = 0.2;

/// Animation tuning (per tick, in tile units)
pub const RETURN_DAMPING: f32 = 0.8;
pub const REST_THRESHOLD: f32 = 0.1;
pub const FALL_SPEED: f32 = 0.2;
pub const DELETE_STEP: f32 = 0.2;
pub const DELETE_THRESHOLD: f32 = 2.0;
pub const EVADE_STEP: f32 = 0.1;

/// Minimum connected-region size for a match
pub const MATCH_MIN: u32 = 3;

/// Goal multiplier between levels (3/2 = 1.5x)
pub const GOAL_GROWTH_NUMERATOR: u32 = 3;
pub const GOAL_GROWTH_DENOMINATOR: u32 = 2;

/// Tile piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Tux,
    Hat,
    Chameleon,
    Wildebeest,
}

impl PieceKind {
    /// All kinds, in draw order
    pub const ALL: [PieceKind; 4] = [
        PieceKind::Tux,
        PieceKind::Hat,
        PieceKind::Chameleon,
        PieceKind::Wildebeest,
    ];

    /// Number of distinct kinds
    pub const COUNT: u32 = Self::ALL.len() as u32;

    /// Kind for a bounded uniform draw in `[0, COUNT)`
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % Self::COUNT) as usize]
    }
}

/// Per-tile animation state
///
/// The physics tick advances every tile according to its variant; the match
/// over these is total so a new state cannot silently no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animation {
    /// At rest, offset pinned to (0, 0)
    Stationary,
    /// Offset decays toward zero, snapping to rest under `REST_THRESHOLD`
    Return,
    /// Vertical offset decreases each tick; cleared externally
    Fall,
    /// Horizontal slide-out; becomes `DeleteDone` past `DELETE_THRESHOLD`
    Delete,
    /// Fully slid out; removed by the next replenishment pass
    DeleteDone,
    /// Neighbor vacating space for a prospective swap
    EvadeUp,
    EvadeDown,
    EvadeLeft,
    EvadeRight,
}

/// Top-level game progression state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Waiting for a tap to start; gestures have no board effect
    Paused,
    /// Normal play
    Playing,
    /// Goal reached; next release starts the next level
    LevelComplete,
}

/// Constructor-time level parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    /// Initial columns
    pub width: usize,
    /// Initial rows
    pub height: usize,
    /// Initial score target
    pub goal: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            goal: DEFAULT_GOAL,
        }
    }
}

/// Integer board cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Continuous board-local pointer coordinate
///
/// Produced by the platform layer's projection; `(0, 0)` is the bottom-left
/// corner of the board, one tile per unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Cell containing this position (coordinates assumed non-negative)
    pub fn cell(&self) -> Point {
        Point::new(self.x as usize, self.y as usize)
    }
}

/// Pointer events consumed by the game (board-local coordinates)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(PointF),
    Move(PointF),
    Release(PointF),
}
