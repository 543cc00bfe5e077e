//! Game configuration - viewport geometry, obstacle constraints and timing
//!
//! Every number the simulation depends on lives in [`GameConfig`]. Defaults
//! come from the constants in [`crate::types`]; a handful can be overridden
//! through environment variables (see [`GameConfig::from_env`]).
//!
//! Invalid geometry is rejected up front by [`GameConfig::validate`] instead of
//! producing undefined obstacles later.

use std::fmt;

use crate::types::{
    GAP_HEIGHT, MIN_OBSTACLE_HEIGHT, OBSTACLE_EXIT_X, OBSTACLE_WIDTH, PLANE_HEIGHT, PLANE_WIDTH,
    PLANE_X, STEP_PX, TICK_MS, TRAVERSE_MS, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};

/// Configuration errors detected before a session can run.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension that must be finite and strictly positive was not.
    NonPositive { field: &'static str, value: f32 },
    /// A duration that must be non-zero was zero.
    ZeroDuration { field: &'static str },
    /// `viewport_height - gap_height - min_height < min_height`: no obstacle
    /// height satisfies both bars' minimum.
    EmptyObstacleRange {
        viewport_height: f32,
        gap_height: f32,
        min_height: f32,
    },
    /// The plane box does not fit inside the viewport.
    PlaneTooLarge { plane_height: f32, viewport_height: f32 },
    /// The traversal would not move the obstacles leftward.
    ExitNotLeftOfViewport { exit_x: f32, viewport_width: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{} must be finite and > 0 (got {})", field, value)
            }
            ConfigError::ZeroDuration { field } => write!(f, "{} must be non-zero", field),
            ConfigError::EmptyObstacleRange {
                viewport_height,
                gap_height,
                min_height,
            } => write!(
                f,
                "no valid obstacle height: viewport {} - gap {} - min {} is below min {}",
                viewport_height, gap_height, min_height, min_height
            ),
            ConfigError::PlaneTooLarge {
                plane_height,
                viewport_height,
            } => write!(
                f,
                "plane height {} does not fit viewport height {}",
                plane_height, viewport_height
            ),
            ConfigError::ExitNotLeftOfViewport {
                exit_x,
                viewport_width,
            } => write!(
                f,
                "obstacle exit x {} must be left of viewport width {}",
                exit_x, viewport_width
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub gap_height: f32,
    pub min_obstacle_height: f32,
    pub obstacle_width: f32,
    pub plane_x: f32,
    pub plane_width: f32,
    pub plane_height: f32,
    /// Vertical displacement per tick (both directions)
    pub step_px: f32,
    pub tick_ms: u32,
    /// Time for an obstacle pair to travel from `viewport_width` to `exit_x`
    pub traverse_ms: u32,
    pub exit_x: f32,
    /// RNG seed; `None` draws one from OS entropy when the session is built
    pub seed: Option<u64>,
    /// Log file path; logging is disabled when unset
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            gap_height: GAP_HEIGHT,
            min_obstacle_height: MIN_OBSTACLE_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            plane_x: PLANE_X,
            plane_width: PLANE_WIDTH,
            plane_height: PLANE_HEIGHT,
            step_px: STEP_PX,
            tick_ms: TICK_MS,
            traverse_ms: TRAVERSE_MS,
            exit_x: OBSTACLE_EXIT_X,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `PAPER_PLANE_VIEWPORT_WIDTH` / `PAPER_PLANE_VIEWPORT_HEIGHT`
    /// - `PAPER_PLANE_GAP_HEIGHT` / `PAPER_PLANE_MIN_OBSTACLE_HEIGHT`
    /// - `PAPER_PLANE_SEED`
    /// - `PAPER_PLANE_LOG_PATH`
    ///
    /// Missing or unparsable values keep their defaults. The result is not
    /// validated; call [`GameConfig::validate`] (or build a
    /// [`crate::GameState`]) to check it.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| -> Option<String> {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let read_f32 = |key: &str, fallback: f32| -> f32 {
            read(key).and_then(|s| s.parse().ok()).unwrap_or(fallback)
        };

        Self {
            viewport_width: read_f32("PAPER_PLANE_VIEWPORT_WIDTH", defaults.viewport_width),
            viewport_height: read_f32("PAPER_PLANE_VIEWPORT_HEIGHT", defaults.viewport_height),
            gap_height: read_f32("PAPER_PLANE_GAP_HEIGHT", defaults.gap_height),
            min_obstacle_height: read_f32(
                "PAPER_PLANE_MIN_OBSTACLE_HEIGHT",
                defaults.min_obstacle_height,
            ),
            seed: read("PAPER_PLANE_SEED").and_then(|s| s.parse().ok()),
            log_path: read("PAPER_PLANE_LOG_PATH"),
            ..defaults
        }
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every invariant the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("gap_height", self.gap_height),
            ("min_obstacle_height", self.min_obstacle_height),
            ("obstacle_width", self.obstacle_width),
            ("plane_width", self.plane_width),
            ("plane_height", self.plane_height),
            ("step_px", self.step_px),
        ] {
            // Also catches NaN.
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroDuration { field: "tick_ms" });
        }
        if self.traverse_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "traverse_ms",
            });
        }

        if self.plane_height >= self.viewport_height {
            return Err(ConfigError::PlaneTooLarge {
                plane_height: self.plane_height,
                viewport_height: self.viewport_height,
            });
        }

        if !self.exit_x.is_finite() || self.exit_x >= self.viewport_width {
            return Err(ConfigError::ExitNotLeftOfViewport {
                exit_x: self.exit_x,
                viewport_width: self.viewport_width,
            });
        }

        crate::obstacle::ObstacleGenerator::from_config(self).map(|_| ())
    }

    /// Vertical midpoint where the plane starts each session.
    pub fn spawn_y(&self) -> f32 {
        self.viewport_height / 2.0
    }
}
