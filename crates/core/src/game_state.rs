//! Game state module - the session and its fixed-step update
//!
//! [`GameState`] owns the plane, the active obstacle pair and the score. A
//! single [`GameState::tick`] advances everything: obstacle position, plane
//! position, scoring and collision. The obstacle position is derived from the
//! elapsed time of the current traversal, so there is no second timer racing
//! the tick.
//!
//! Ticks outside [`Phase::Playing`] are ignored. Entering GameOver or Idle
//! therefore halts all movement in the same call that changes the phase.

use crate::collision::check_collision;
use crate::config::{ConfigError, GameConfig};
use crate::obstacle::ObstacleGenerator;
use crate::rng::{entropy_seed, seeded, GameRng};
use crate::snapshot::{GameSnapshot, GeometrySnapshot, TimersSnapshot};
use crate::types::{GameAction, ObstaclePair, Phase, Plane};

/// What happened during a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// A traversal cycle completed and the score went up by one.
    pub scored: bool,
    /// The plane collided; the session is now over.
    pub crashed: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    generator: ObstacleGenerator,
    rng: GameRng,
    seed: u64,
    phase: Phase,
    plane: Plane,
    obstacles: Option<ObstaclePair>,
    obstacle_x: f32,
    /// Time spent in the current traversal cycle.
    traverse_elapsed_ms: u32,
    score: u32,
    /// Monotonic session id (increments on every start).
    episode_id: u32,
    /// Ticks processed in the current session.
    tick: u64,
}

impl GameState {
    /// Create an idle game, validating `config` first.
    ///
    /// Uses `config.seed` when set, otherwise a seed from OS entropy.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = ObstacleGenerator::from_config(&config)?;
        let seed = config.seed.unwrap_or_else(entropy_seed);

        let mut state = Self {
            plane: Plane::new(config.spawn_y()),
            obstacle_x: config.viewport_width,
            config,
            generator,
            rng: seeded(seed),
            seed,
            phase: Phase::Idle,
            obstacles: None,
            traverse_elapsed_ms: 0,
            score: 0,
            episode_id: 0,
            tick: 0,
        };
        state.reset_session();
        Ok(state)
    }

    /// Default geometry with a fixed seed.
    pub fn with_seed(seed: u64) -> Result<Self, ConfigError> {
        Self::new(GameConfig::default().with_seed(seed))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }

    pub fn obstacles(&self) -> Option<ObstaclePair> {
        self.obstacles
    }

    pub fn obstacle_x(&self) -> f32 {
        self.obstacle_x
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Begin a new session from Idle or GameOver.
    ///
    /// Returns `false` (and changes nothing) while a session is already running.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Playing {
            return false;
        }
        self.reset_session();
        self.phase = Phase::Playing;
        self.episode_id = self.episode_id.wrapping_add(1);
        log::info!(
            "session {} started (seed {}, viewport {}x{})",
            self.episode_id,
            self.seed,
            self.config.viewport_width,
            self.config.viewport_height
        );
        true
    }

    /// Abandon whatever is running and return to Idle.
    pub fn reset(&mut self) -> bool {
        let was_idle = self.phase == Phase::Idle && self.score == 0 && self.obstacles.is_none();
        self.reset_session();
        self.phase = Phase::Idle;
        !was_idle
    }

    /// Update the held state of the ascend input.
    ///
    /// Input is tracked in every phase so a key held across a restart keeps
    /// the plane climbing.
    pub fn set_ascending(&mut self, held: bool) -> bool {
        if self.plane.ascending == held {
            return false;
        }
        self.plane.ascending = held;
        true
    }

    /// Apply a game action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::AscendPress => self.set_ascending(true),
            GameAction::AscendRelease => self.set_ascending(false),
            GameAction::Reset => self.reset(),
        }
    }

    /// Advance the session by one fixed step of `elapsed_ms`.
    ///
    /// Order within a tick: make sure a pair exists, move the pair (scoring
    /// and replacing it when its traversal completes), move the plane one
    /// step, then test for collision.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickReport {
        let mut report = TickReport::default();
        if self.phase != Phase::Playing {
            return report;
        }
        self.tick += 1;

        if self.obstacles.is_none() {
            self.obstacles = Some(self.generator.generate(&mut self.rng));
            self.obstacle_x = self.config.viewport_width;
            self.traverse_elapsed_ms = 0;
        }

        self.traverse_elapsed_ms = self.traverse_elapsed_ms.saturating_add(elapsed_ms);
        if self.traverse_elapsed_ms >= self.config.traverse_ms {
            self.traverse_elapsed_ms = 0;
            self.obstacle_x = self.config.viewport_width;
            self.obstacles = Some(self.generator.generate(&mut self.rng));
            self.score += 1;
            report.scored = true;
            log::debug!("session {} traversal complete, score {}", self.episode_id, self.score);
        } else {
            self.obstacle_x = self.traverse_position(self.traverse_elapsed_ms);
        }

        if self.plane.ascending {
            self.plane.y -= self.config.step_px;
        } else {
            self.plane.y += self.config.step_px;
        }

        if self.collides() {
            self.phase = Phase::GameOver;
            report.crashed = true;
            log::info!(
                "session {} over after {} ticks, score {}",
                self.episode_id,
                self.tick,
                self.score
            );
        }

        report
    }

    /// Whether the plane currently touches a bar, the ceiling or the ground.
    pub fn collides(&self) -> bool {
        match &self.obstacles {
            Some(pair) => check_collision(&self.config, self.plane.y, pair, self.obstacle_x),
            None => crate::collision::out_of_bounds(&self.config, self.plane.y),
        }
    }

    /// Horizontal position of the pair `elapsed_ms` into a traversal.
    pub fn traverse_position(&self, elapsed_ms: u32) -> f32 {
        let t = (elapsed_ms as f32 / self.config.traverse_ms as f32).min(1.0);
        let start = self.config.viewport_width;
        start + (self.config.exit_x - start) * t
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            plane: self.plane,
            obstacles: self.obstacles,
            obstacle_x: self.obstacle_x,
            score: self.score,
            episode_id: self.episode_id,
            tick: self.tick,
            seed: self.seed,
            timers: TimersSnapshot {
                traverse_elapsed_ms: self.traverse_elapsed_ms,
                traverse_ms: self.config.traverse_ms,
            },
            geometry: GeometrySnapshot::from(&self.config),
        }
    }

    /// Plane to the vertical midpoint, obstacles cleared and parked at the
    /// right edge, score zeroed. Phase is left to the caller.
    fn reset_session(&mut self) {
        self.plane.y = self.config.spawn_y();
        self.obstacles = None;
        self.obstacle_x = self.config.viewport_width;
        self.traverse_elapsed_ms = 0;
        self.score = 0;
        self.tick = 0;
    }
}
