use crate::config::GameConfig;
use crate::types::{ObstaclePair, Phase, Plane};

/// Fixed geometry a renderer needs to place things.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySnapshot {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub plane_x: f32,
    pub plane_width: f32,
    pub plane_height: f32,
    pub obstacle_width: f32,
}

impl From<&GameConfig> for GeometrySnapshot {
    fn from(config: &GameConfig) -> Self {
        Self {
            viewport_width: config.viewport_width,
            viewport_height: config.viewport_height,
            plane_x: config.plane_x,
            plane_width: config.plane_width,
            plane_height: config.plane_height,
            obstacle_width: config.obstacle_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimersSnapshot {
    pub traverse_elapsed_ms: u32,
    pub traverse_ms: u32,
}

/// Read-only copy of everything the presentation layer observes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub plane: Plane,
    pub obstacles: Option<ObstaclePair>,
    pub obstacle_x: f32,
    pub score: u32,
    pub episode_id: u32,
    pub tick: u64,
    pub seed: u64,
    pub timers: TimersSnapshot,
    pub geometry: GeometrySnapshot,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// FNV-1a hash of the visible state.
    ///
    /// Two snapshots that render identically hash identically; used to skip
    /// redundant redraws of static screens.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new();
        h.write(&[self.phase as u8, self.plane.ascending as u8]);
        h.write(&self.plane.y.to_bits().to_le_bytes());
        h.write(&self.obstacle_x.to_bits().to_le_bytes());
        match self.obstacles {
            Some(pair) => {
                h.write(&[1]);
                h.write(&pair.upper.height.to_bits().to_le_bytes());
                h.write(&pair.lower.top_offset.to_bits().to_le_bytes());
            }
            None => h.write(&[0]),
        }
        h.write(&self.score.to_le_bytes());
        h.write(&self.episode_id.to_le_bytes());
        h.finish()
    }
}

struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET,
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
