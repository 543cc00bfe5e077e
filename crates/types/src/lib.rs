//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless simulation).
//!
//! # Coordinate System
//!
//! Game space is measured in pixels with the origin at the top-left corner of
//! the viewport. `y` grows downward, so "ascending" means `y` decreases.
//!
//! # Default Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `VIEWPORT_WIDTH` | 480 | Default game-space width |
//! | `VIEWPORT_HEIGHT` | 800 | Default game-space height |
//! | `GAP_HEIGHT` | 200 | Vertical opening between upper and lower obstacle |
//! | `MIN_OBSTACLE_HEIGHT` | 50 | Smallest allowed obstacle bar |
//! | `OBSTACLE_WIDTH` | 60 | Width of every obstacle bar |
//! | `PLANE_WIDTH` x `PLANE_HEIGHT` | 60 x 40 | Plane bounding box |
//! | `PLANE_X` | 50 | Fixed left edge of the plane |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `STEP_PX` | 5 | Vertical displacement per tick |
//! | `TRAVERSE_MS` | 3000 | Time for a pair to sweep across the viewport |
//! | `OBSTACLE_EXIT_X` | -100 | Horizontal position where a sweep ends |
//!
//! # Examples
//!
//! ```
//! use paper_plane_types::{GameAction, Phase, GAP_HEIGHT};
//!
//! let action = GameAction::from_str("ascendPress").unwrap();
//! assert_eq!(action, GameAction::AscendPress);
//! assert_eq!(Phase::Idle.as_str(), "idle");
//! assert_eq!(GAP_HEIGHT, 200.0);
//! ```

/// Default viewport width in pixels
pub const VIEWPORT_WIDTH: f32 = 480.0;

/// Default viewport height in pixels
pub const VIEWPORT_HEIGHT: f32 = 800.0;

/// Gap between the upper and lower obstacle (200px)
pub const GAP_HEIGHT: f32 = 200.0;

/// Minimum obstacle bar height (50px)
pub const MIN_OBSTACLE_HEIGHT: f32 = 50.0;

/// Obstacle bar width (60px)
pub const OBSTACLE_WIDTH: f32 = 60.0;

/// Plane bounding box width (60px)
pub const PLANE_WIDTH: f32 = 60.0;

/// Plane bounding box height (40px)
pub const PLANE_HEIGHT: f32 = 40.0;

/// Fixed horizontal offset of the plane's left edge (50px)
pub const PLANE_X: f32 = 50.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Vertical displacement applied every tick, up or down (5px)
pub const STEP_PX: f32 = 5.0;

/// Duration of one obstacle traversal cycle (3000ms)
pub const TRAVERSE_MS: u32 = 3000;

/// Horizontal position at which a traversal cycle ends (-100px)
pub const OBSTACLE_EXIT_X: f32 = -100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_geometry_defaults() {
        assert_eq!(GAP_HEIGHT, 200.0);
        assert_eq!(MIN_OBSTACLE_HEIGHT, 50.0);
        assert_eq!(OBSTACLE_WIDTH, 60.0);
        assert_eq!((PLANE_WIDTH, PLANE_HEIGHT), (60.0, 40.0));
        assert_eq!(PLANE_X, 50.0);

        assert_eq!(TICK_MS, 16);
        assert_eq!(STEP_PX, 5.0);
        assert_eq!(TRAVERSE_MS, 3000);
        assert_eq!(OBSTACLE_EXIT_X, -100.0);
    }
}

/// Session lifecycle phase
///
/// - **Idle**: Nothing started yet (or manually reset)
/// - **Playing**: Ticks advance the plane and the obstacles
/// - **GameOver**: The plane collided; terminal until the player starts again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    GameOver,
}

impl Phase {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Playing => "playing",
            Phase::GameOver => "gameOver",
        }
    }

    /// Whether the start screen (title, score, prompt) should be shown
    pub fn shows_menu(&self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by keyboard input and by the headless autopilot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Begin a new session (from Idle or GameOver)
    Start,
    /// Ascend input pressed
    AscendPress,
    /// Ascend input released
    AscendRelease,
    /// Abandon the current session and return to Idle
    Reset,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use paper_plane_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("start"), Some(GameAction::Start));
    /// assert_eq!(GameAction::from_str("ascendRelease"), Some(GameAction::AscendRelease));
    /// assert_eq!(GameAction::from_str("flap"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "ascendpress" => Some(GameAction::AscendPress),
            "ascendrelease" => Some(GameAction::AscendRelease),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::AscendPress => "ascendPress",
            GameAction::AscendRelease => "ascendRelease",
            GameAction::Reset => "reset",
        }
    }
}

/// One obstacle bar: a rectangle spanning `OBSTACLE_WIDTH` horizontally.
///
/// `top_offset` and `height` are in game-space pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub top_offset: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn new(top_offset: f32, height: f32) -> Self {
        Self { top_offset, height }
    }

    /// Bottom edge (exclusive) of the bar
    pub fn bottom(&self) -> f32 {
        self.top_offset + self.height
    }
}

/// The upper and lower bar generated together, sharing one gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstaclePair {
    pub upper: Obstacle,
    pub lower: Obstacle,
}

impl ObstaclePair {
    /// Top edge of the opening between the bars
    pub fn gap_top(&self) -> f32 {
        self.upper.bottom()
    }

    /// Bottom edge of the opening between the bars
    pub fn gap_bottom(&self) -> f32 {
        self.lower.top_offset
    }

    pub fn gap_center(&self) -> f32 {
        (self.gap_top() + self.gap_bottom()) / 2.0
    }
}

/// The player's glider. Its horizontal position is fixed by configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Top edge in game-space pixels
    pub y: f32,
    /// Ascend input currently held
    pub ascending: bool,
}

impl Plane {
    pub fn new(y: f32) -> Self {
        Self {
            y,
            ascending: false,
        }
    }
}
