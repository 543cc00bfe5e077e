//! Obstacle generation - random upper/lower bar pairs around a fixed gap
//!
//! The upper bar height is drawn uniformly (inclusive, whole pixels) from
//! `[min_height, viewport_height - gap_height - min_height]`; the lower bar
//! fills whatever is left below the gap. Both bars therefore satisfy the
//! minimum height and the three spans always add up to the viewport height.
//!
//! The random source is a parameter, so seeded RNGs reproduce the same
//! sequence of pairs.

use rand::Rng;

use crate::config::{ConfigError, GameConfig};
use crate::types::{Obstacle, ObstaclePair};

/// Validated generator for obstacle pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleGenerator {
    viewport_height: f32,
    gap_height: f32,
    /// Inclusive range of upper bar heights, whole pixels.
    upper_min: u32,
    upper_max: u32,
}

impl ObstacleGenerator {
    /// Build a generator, failing when no upper height satisfies both minimums.
    pub fn new(viewport_height: f32, gap_height: f32, min_height: f32) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("viewport_height", viewport_height),
            ("gap_height", gap_height),
            ("min_obstacle_height", min_height),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let empty = ConfigError::EmptyObstacleRange {
            viewport_height,
            gap_height,
            min_height,
        };
        let max_height = viewport_height - gap_height - min_height;
        if max_height < min_height {
            return Err(empty);
        }

        let upper_min = min_height.ceil() as u32;
        let upper_max = max_height.floor() as u32;
        if upper_max < upper_min {
            // Fractional bounds with no whole pixel between them.
            return Err(empty);
        }

        Ok(Self {
            viewport_height,
            gap_height,
            upper_min,
            upper_max,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.viewport_height,
            config.gap_height,
            config.min_obstacle_height,
        )
    }

    /// Inclusive range of upper bar heights this generator can produce.
    pub fn upper_range(&self) -> (f32, f32) {
        (self.upper_min as f32, self.upper_max as f32)
    }

    /// Draw the next pair.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> ObstaclePair {
        let upper_height = rng.random_range(self.upper_min..=self.upper_max) as f32;
        self.pair_with_upper(upper_height)
    }

    /// Build the pair for a given upper bar height.
    pub fn pair_with_upper(&self, upper_height: f32) -> ObstaclePair {
        let lower_height = self.viewport_height - upper_height - self.gap_height;
        ObstaclePair {
            upper: Obstacle::new(0.0, upper_height),
            lower: Obstacle::new(upper_height + self.gap_height, lower_height),
        }
    }
}

/// One-shot form of [`ObstacleGenerator::generate`].
pub fn generate_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    viewport_height: f32,
    gap_height: f32,
    min_height: f32,
) -> Result<ObstaclePair, ConfigError> {
    Ok(ObstacleGenerator::new(viewport_height, gap_height, min_height)?.generate(rng))
}
