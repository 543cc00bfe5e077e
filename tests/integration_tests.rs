//! Integration tests for the main game loop

use paper_plane::core::{GameConfig, GameState};
use paper_plane::sim::autopilot;
use paper_plane::types::{GameAction, Phase, TICK_MS};

fn crash(state: &mut GameState) {
    for _ in 0..10_000 {
        if state.tick(TICK_MS).crashed {
            return;
        }
    }
    panic!("session never ended");
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::with_seed(12345).unwrap();
    assert_eq!(state.phase(), Phase::Idle);

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.episode_id(), 1);

    crash(&mut state);
    assert_eq!(state.phase(), Phase::GameOver);

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.episode_id(), 2);
}

#[test]
fn test_start_resets_session() {
    let mut state = GameState::with_seed(5).unwrap();
    state.start();
    for _ in 0..400 {
        let action = autopilot(&state.snapshot());
        state.apply_action(action);
        state.tick(TICK_MS);
    }
    assert!(state.score() > 0);
    state.apply_action(GameAction::AscendRelease);
    crash(&mut state);

    state.start();
    assert_eq!(state.score(), 0);
    assert_eq!(state.plane().y, 400.0);
    assert_eq!(state.obstacle_x(), 480.0);
    assert!(state.obstacles().is_none());
    assert_eq!(state.tick_count(), 0);
}

#[test]
fn test_double_start_from_game_over_is_idempotent() {
    let mut state = GameState::with_seed(77).unwrap();
    state.start();
    crash(&mut state);

    state.apply_action(GameAction::Start);
    let first = state.snapshot();
    state.apply_action(GameAction::Start);
    let second = state.snapshot();

    assert_eq!(first, second);
    assert_eq!(second.score, 0);
    assert_eq!(second.plane.y, 400.0);
    assert!(second.obstacles.is_none());
}

#[test]
fn test_score_counts_completed_traversals() {
    let mut state = GameState::with_seed(2024).unwrap();
    state.start();

    let mut scored = 0;
    for _ in 0..2_000 {
        let action = autopilot(&state.snapshot());
        state.apply_action(action);
        let report = state.tick(TICK_MS);
        assert!(!report.crashed, "autopilot crashed at tick {}", state.tick_count());
        if report.scored {
            scored += 1;
        }
    }

    assert_eq!(state.score(), scored);
    // 3000ms / 16ms per tick => a traversal completes every 188 ticks.
    assert_eq!(scored, 2_000 / 188);
}

#[test]
fn test_traversal_completes_on_188th_tick() {
    let mut state = GameState::with_seed(1).unwrap();
    state.start();

    for i in 1..188 {
        let action = autopilot(&state.snapshot());
        state.apply_action(action);
        let report = state.tick(TICK_MS);
        assert!(!report.scored, "scored early at tick {}", i);
    }
    assert!(state.obstacle_x() < -90.0);

    let action = autopilot(&state.snapshot());
    state.apply_action(action);
    let report = state.tick(TICK_MS);
    assert!(report.scored);
    assert_eq!(state.score(), 1);
    assert_eq!(state.obstacle_x(), 480.0);
    assert!(state.obstacles().is_some());
}

#[test]
fn test_ticks_after_game_over_do_not_mutate() {
    let mut state = GameState::with_seed(9).unwrap();
    state.start();
    crash(&mut state);

    let frozen = state.snapshot();
    state.apply_action(GameAction::AscendPress);
    for _ in 0..50 {
        state.tick(TICK_MS);
    }
    let after = state.snapshot();
    assert_eq!(after.plane.y, frozen.plane.y);
    assert_eq!(after.obstacle_x, frozen.obstacle_x);
    assert_eq!(after.score, frozen.score);
    assert_eq!(after.phase, Phase::GameOver);
}

#[test]
fn test_holding_ascend_hits_ceiling() {
    let mut state = GameState::with_seed(4).unwrap();
    state.start();
    state.apply_action(GameAction::AscendPress);

    let mut ticks = 0;
    while !state.tick(TICK_MS).crashed {
        ticks += 1;
    }
    // 400 / 5 = 80 steps to reach y = 0.
    assert_eq!(ticks + 1, 80);
    assert_eq!(state.plane().y, 0.0);
}

#[test]
fn test_same_seed_same_session() {
    let run = |seed| {
        let mut state = GameState::with_seed(seed).unwrap();
        state.start();
        let mut trace = Vec::new();
        for _ in 0..600 {
            let action = autopilot(&state.snapshot());
            state.apply_action(action);
            state.tick(TICK_MS);
            trace.push(state.snapshot());
        }
        trace
    };
    assert_eq!(run(31337), run(31337));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig {
        gap_height: 900.0,
        ..GameConfig::default()
    };
    let err = GameState::new(config).unwrap_err();
    assert!(err.to_string().contains("no valid obstacle height"));
}

#[test]
fn test_infinite_viewport_from_env_is_rejected() {
    let config = GameConfig::from_lookup(|key| {
        (key == "PAPER_PLANE_VIEWPORT_WIDTH").then(|| "inf".to_string())
    });
    assert_eq!(config.viewport_width, f32::INFINITY);
    let err = GameState::new(config).unwrap_err();
    assert!(err.to_string().contains("viewport_width"));
}
