//! Collision detection between the plane and the world
//!
//! The plane's box never moves horizontally, so only the obstacle pair's
//! shared `x` decides whether the bars can be hit at all. The ceiling and
//! ground are checked regardless of where the obstacles are.
//!
//! Edges count as contact: touching a bar, the ceiling or the ground ends the
//! session.

use crate::config::GameConfig;
use crate::types::ObstaclePair;

/// Whether a pair at `obstacle_x` overlaps the plane's horizontal span.
#[inline]
pub fn horizontally_eligible(config: &GameConfig, obstacle_x: f32) -> bool {
    obstacle_x <= config.plane_x + config.plane_width
        && obstacle_x + config.obstacle_width >= config.plane_x
}

/// Whether the plane touches the ceiling or the ground.
#[inline]
pub fn out_of_bounds(config: &GameConfig, plane_y: f32) -> bool {
    plane_y <= 0.0 || plane_y + config.plane_height >= config.viewport_height
}

/// Whether the plane at `plane_y` hits either bar of `pair` or the viewport edges.
pub fn check_collision(
    config: &GameConfig,
    plane_y: f32,
    pair: &ObstaclePair,
    obstacle_x: f32,
) -> bool {
    if horizontally_eligible(config, obstacle_x) {
        if plane_y <= pair.upper.height {
            return true;
        }
        if plane_y + config.plane_height >= pair.lower.top_offset {
            return true;
        }
    }

    out_of_bounds(config, plane_y)
}
