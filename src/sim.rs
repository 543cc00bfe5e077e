//! Headless simulation (`paper-plane sim`).
//!
//! Runs a session without a terminal under a simple autopilot and streams
//! line-delimited JSON frames: one per scored traversal, one when the plane
//! crashes, optionally one every `--every` ticks, and a final summary.
//!
//! ```text
//! paper-plane sim --seed 7 --ticks 2000
//! {"type":"scored","tick":188,"score":1,...}
//! ...
//! {"type":"summary","seed":7,"ticks":2000,"score":10,"crashed":false}
//! ```

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use crate::core::{GameConfig, GameSnapshot, GameState};
use crate::types::GameAction;

const DEFAULT_SEED: u64 = 1;
const DEFAULT_TICKS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// `--seed`; falls back to the game config's seed, then to 1.
    pub seed: Option<u64>,
    pub max_ticks: u64,
    /// Emit a `tick` frame every N ticks.
    pub every: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_ticks: DEFAULT_TICKS,
            every: None,
        }
    }
}

/// Parse `sim [--seed N] [--ticks N] [--every N]`.
///
/// Returns `Ok(None)` when the first argument is not `sim`.
pub fn parse_sim_args(args: &[String]) -> Result<Option<SimConfig>> {
    if args.first().map(String::as_str) != Some("sim") {
        return Ok(None);
    }

    let mut config = SimConfig::default();
    let mut i = 1usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = || -> Result<u64> {
            let v = args
                .get(i + 1)
                .ok_or_else(|| anyhow!("sim: missing value for {}", flag))?;
            v.parse::<u64>()
                .map_err(|_| anyhow!("sim: invalid {} value: {}", flag, v))
        };
        match flag {
            "--seed" => config.seed = Some(value()?),
            "--ticks" => config.max_ticks = value()?,
            "--every" => {
                let n = value()?;
                if n == 0 {
                    return Err(anyhow!("sim: --every must be > 0"));
                }
                config.every = Some(n);
            }
            other => return Err(anyhow!("sim: unknown argument: {}", other)),
        }
        i += 2;
    }

    Ok(Some(config))
}

/// One line of simulation output.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SimFrame {
    Tick(FrameState),
    Scored(FrameState),
    GameOver(FrameState),
    Summary(SimSummary),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameState {
    pub tick: u64,
    pub phase: &'static str,
    pub plane_y: f32,
    pub ascending: bool,
    pub obstacle_x: f32,
    /// Progress of the current pair's sweep, 0 right after it spawns.
    pub traverse_elapsed_ms: u32,
    pub gap_top: Option<f32>,
    pub gap_bottom: Option<f32>,
    pub score: u32,
}

impl From<&GameSnapshot> for FrameState {
    fn from(snap: &GameSnapshot) -> Self {
        Self {
            tick: snap.tick,
            phase: snap.phase.as_str(),
            plane_y: snap.plane.y,
            ascending: snap.plane.ascending,
            obstacle_x: snap.obstacle_x,
            traverse_elapsed_ms: snap.timers.traverse_elapsed_ms,
            gap_top: snap.obstacles.map(|p| p.gap_top()),
            gap_bottom: snap.obstacles.map(|p| p.gap_bottom()),
            score: snap.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimSummary {
    pub seed: u64,
    pub ticks: u64,
    pub score: u32,
    pub crashed: bool,
}

/// Hold ascend while the plane's centre is below the target line: the centre
/// of the current gap, or mid-screen before the first pair exists.
pub fn autopilot(snap: &GameSnapshot) -> GameAction {
    let g = &snap.geometry;
    let target = snap
        .obstacles
        .map(|p| p.gap_center())
        .unwrap_or(g.viewport_height / 2.0);
    let center = snap.plane.y + g.plane_height / 2.0;
    if center > target {
        GameAction::AscendPress
    } else {
        GameAction::AscendRelease
    }
}

/// Run one session to a crash or `max_ticks`, writing frames to `out`.
pub fn run_simulation<W: Write>(
    sim: &SimConfig,
    game_config: GameConfig,
    out: &mut W,
) -> Result<SimSummary> {
    let seed = sim.seed.or(game_config.seed).unwrap_or(DEFAULT_SEED);
    let mut game =
        GameState::new(game_config.with_seed(seed)).context("invalid game configuration")?;
    let tick_ms = game.config().tick_ms;
    game.apply_action(GameAction::Start);

    let mut crashed = false;
    for _ in 0..sim.max_ticks {
        let action = autopilot(&game.snapshot());
        game.apply_action(action);
        let report = game.tick(tick_ms);
        let snap = game.snapshot();

        if report.scored {
            write_frame(out, &SimFrame::Scored(FrameState::from(&snap)))?;
        }
        if report.crashed {
            write_frame(out, &SimFrame::GameOver(FrameState::from(&snap)))?;
            crashed = true;
            break;
        }
        if let Some(every) = sim.every {
            if snap.tick % every == 0 {
                write_frame(out, &SimFrame::Tick(FrameState::from(&snap)))?;
            }
        }
    }

    let summary = SimSummary {
        seed: game.seed(),
        ticks: game.tick_count(),
        score: game.score(),
        crashed,
    };
    write_frame(out, &SimFrame::Summary(summary.clone()))?;
    out.flush()?;
    log::info!(
        "simulation finished: seed {} ticks {} score {} crashed {}",
        summary.seed,
        summary.ticks,
        summary.score,
        summary.crashed
    );
    Ok(summary)
}

fn write_frame<W: Write>(out: &mut W, frame: &SimFrame) -> Result<()> {
    serde_json::to_writer(&mut *out, frame)?;
    out.write_all(b"\n")?;
    Ok(())
}
