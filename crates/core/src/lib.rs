//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules and the simulation of the paper plane game.
//! It has **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same obstacle sequence
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Portable**: Runs in the terminal runner and in headless simulation alike
//!
//! # Module Structure
//!
//! - [`config`]: Viewport geometry, obstacle constraints, timing, env overrides
//! - [`obstacle`]: Random upper/lower bar pairs around a fixed gap
//! - [`collision`]: Plane versus bars, ceiling and ground
//! - [`game_state`]: Session lifecycle and the fixed-step update
//! - [`rng`]: Seeded random source
//! - [`snapshot`]: Read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - Holding the ascend input moves the plane up 5px per tick, releasing it
//!   lets the plane fall 5px per tick
//! - An obstacle pair sweeps from the right edge to x = -100 in 3000ms, then a
//!   new pair spawns at the right edge and the score goes up by one
//! - Touching a bar, the ceiling or the ground ends the session
//!
//! # Example
//!
//! ```
//! use paper_plane_core::GameState;
//! use paper_plane_types::{GameAction, Phase, TICK_MS};
//!
//! let mut game = GameState::with_seed(12345).unwrap();
//! game.apply_action(GameAction::Start);
//! game.apply_action(GameAction::AscendPress);
//! game.tick(TICK_MS);
//!
//! assert_eq!(game.phase(), Phase::Playing);
//! assert!(game.obstacles().is_some());
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Traversal**: 3000ms per obstacle pair
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! tick duration.

pub mod collision;
pub mod config;
pub mod game_state;
pub mod obstacle;
pub mod rng;
pub mod snapshot;

pub use paper_plane_types as types;

// Re-export commonly used types for convenience
pub use collision::{check_collision, horizontally_eligible, out_of_bounds};
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, TickReport};
pub use obstacle::{generate_obstacles, ObstacleGenerator};
pub use rng::{entropy_seed, seeded, GameRng};
pub use snapshot::{GameSnapshot, GeometrySnapshot, TimersSnapshot};
